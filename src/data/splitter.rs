// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles records with a seeded RNG and splits them into:
//   - Training set: used to fit the pipeline
//   - Test set:     held out to score accuracy
//
// The same seed always yields the same permutation, so two
// training runs over the same cleaned file see identical
// partitions.
//
// Split sizing: test = ceil(total * test_fraction), the rest
// trains. With 0.2 that is 80% / 20%.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom driven
// by a StdRng seeded from a u64.
//
// Reference: rand crate documentation

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Shuffle `samples` with `seed` and split into (train, test).
///
/// # Arguments
/// * `samples`       - All available samples (consumed by this function)
/// * `test_fraction` - Proportion held out for testing, e.g. 0.2
/// * `seed`          - RNG seed for a reproducible shuffle
///
/// # Example
/// ```ignore
/// let (train, test) = split_train_test(all_samples, 0.2, 42);
/// // test has ceil(20%) of samples, train has the rest
/// ```
pub fn split_train_test<T>(mut samples: Vec<T>, test_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    let total     = samples.len();
    let test_size = ((total as f64) * test_fraction.clamp(0.0, 1.0)).ceil() as usize;
    let split_at  = total - test_size.min(total);

    // split_off(n) removes elements [n..] and returns them
    let test = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} train, {} test (seed {})",
        samples.len(),
        test.len(),
        seed,
    );

    (samples, test)
}
