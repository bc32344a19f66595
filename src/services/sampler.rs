use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::services::config::ConfigError;

#[derive(Error, Debug, PartialEq)]
pub enum SampleError {
    #[error("no eligible customers to sample from")]
    EmptyPool,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Draws `min(max_samples, pool.len())` pool positions without replacement and
/// returns the entries at those positions in draw order.
///
/// Positions are never reused, but the same customer can appear several times
/// because the pool repeats customers by weight.
pub fn draw_sample<T: Clone, R: Rng + ?Sized>(
    pool: &[T],
    max_samples: usize,
    rng: &mut R,
) -> Result<Vec<T>, SampleError> {
    if max_samples == 0 {
        return Err(SampleError::Config(ConfigError::InvalidMaxSamples));
    }
    if pool.is_empty() {
        return Err(SampleError::EmptyPool);
    }

    let sample_size = max_samples.min(pool.len());
    let mut positions: Vec<usize> = (0..pool.len()).collect();
    let (drawn, _) = positions.partial_shuffle(rng, sample_size);
    debug!(pool_size = pool.len(), sample_size, "drew sample");
    Ok(drawn.iter().map(|position| pool[*position].clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draw_sample_caps_size_at_max_samples() {
        let pool: Vec<usize> = (0..500).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let sample = draw_sample(&pool, 200, &mut rng).unwrap();
        assert_eq!(sample.len(), 200);
    }

    #[test]
    fn draw_sample_takes_whole_pool_when_smaller_than_cap() {
        let pool = vec![0, 0, 1];
        let mut rng = StdRng::seed_from_u64(42);
        let mut sample = draw_sample(&pool, 200, &mut rng).unwrap();
        sample.sort();
        assert_eq!(sample, vec![0, 0, 1]);
    }

    #[test]
    fn draw_sample_never_reuses_a_position() {
        let pool: Vec<usize> = (0..50).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut sample = draw_sample(&pool, 30, &mut rng).unwrap();
        sample.sort();
        sample.dedup();
        assert_eq!(sample.len(), 30);
    }

    #[test]
    fn draw_sample_is_reproducible_with_the_same_seed() {
        let pool: Vec<usize> = (0..100).collect();
        let first = draw_sample(&pool, 10, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = draw_sample(&pool, 10, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn draw_sample_differs_across_seeds_on_large_pool() {
        let pool: Vec<usize> = (0..1000).collect();
        let first = draw_sample(&pool, 200, &mut StdRng::seed_from_u64(1)).unwrap();
        let second = draw_sample(&pool, 200, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn draw_sample_from_small_example_pool() {
        let pool = vec!["A", "A", "B"];
        let first = draw_sample(&pool, 2, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = draw_sample(&pool, 2, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first.len(), 2);
        assert!(first.iter().all(|name| *name == "A" || *name == "B"));
        assert_eq!(first, second);
    }

    #[test]
    fn draw_sample_rejects_empty_pool() {
        let pool: Vec<usize> = Vec::new();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(draw_sample(&pool, 10, &mut rng), Err(SampleError::EmptyPool));
    }

    #[test]
    fn draw_sample_rejects_zero_cap() {
        let pool = vec![0];
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            draw_sample(&pool, 0, &mut rng),
            Err(SampleError::Config(ConfigError::InvalidMaxSamples))
        );
    }
}
