use rand::Rng;

pub fn init_test() {
    drop(env_logger::builder().is_test(true).try_init());
}

/// Random test sizes are kept small unless the stress_tests feature is on
pub const TRIALS: usize = if cfg!(feature = "stress_tests") { 200 } else { 20 };
pub const MAX_LEN: usize = if cfg!(feature = "stress_tests") { 5000 } else { 300 };

pub fn random_vec(rng: &mut impl Rng, max_len: usize, lo: i64, hi: i64) -> Vec<i64> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_|rng.gen_range(lo..=hi)).collect()
}
