use crate::aliases::RandGen;
use rand::SeedableRng;

/// SplitMix64 finalizer. Turns structured keys (consecutive pixel and
/// sample indices) into seeds with no visible correlation.
fn mix(mut key: u64) -> u64 {
    key = key.wrapping_add(0x9e37_79b9_7f4a_7c15);
    key = (key ^ (key >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    key = (key ^ (key >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    key ^ (key >> 31)
}

/// Independent random stream for one (pixel, sample) pair.
///
/// Every path owns its generator for all of its bounces, so parallel
/// workers never share randomness. Equal indices always rebuild the same
/// stream, which keeps renders reproducible.
pub fn path_rng(pixel_index: u32, sample_index: u32) -> RandGen {
    let key = (u64::from(sample_index) << 32) | u64::from(pixel_index);
    RandGen::seed_from_u64(mix(key))
}
