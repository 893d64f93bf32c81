use rand::{prelude::*, rngs::SmallRng};
use rand_distr::{Distribution, Uniform};

/// Every random choice made while building a dungeon comes from one generator, so a fixed seed
/// reproduces the same layout.
pub fn small_rng(seed: [u32; 4]) -> SmallRng {
    let mut bytes = [0u8; 16];
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(seed.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }

    SmallRng::from_seed(bytes)
}

/// Returns a uniformly random index into a sequence of length `len`, or `None` if it's empty.
pub fn choose_index<R: Rng>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(Uniform::from(0..len).sample(rng))
}

pub fn choose<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    choose_index(rng, items.len()).map(|i| &items[i])
}
