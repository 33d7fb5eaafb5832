use rand::{SeedableRng, rngs::StdRng};

/// Generator for one run of a sweep. The stream depends only on
/// (seed, combination, iteration), so runs can execute in any order.
pub fn run_rng(seed: u64, combination: usize, iteration: usize) -> StdRng {
    let mut bytes = [0u8; 32];
    bytes[0..8].copy_from_slice(&seed.to_le_bytes());
    bytes[8..16].copy_from_slice(&(combination as u64).to_le_bytes());
    bytes[16..24].copy_from_slice(&(iteration as u64).to_le_bytes());
    StdRng::from_seed(bytes)
}
