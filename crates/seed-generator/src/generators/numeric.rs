//! Numeric and boolean generators.

use rand::Rng;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Generate a uniformly random boolean.
pub fn generate_bool<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

/// Generate a monetary amount in the given range, rounded to cents.
pub fn generate_amount<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let value = rng.gen_range(min..=max);
    ((value * 100.0).round() / 100.0).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let v = generate_int_range(&mut rng, 0, 100);
            assert!((0..=100).contains(&v));
        }
    }

    #[test]
    fn test_generate_bool_hits_both() {
        let mut rng = StdRng::seed_from_u64(42);
        let values: Vec<bool> = (0..200).map(|_| generate_bool(&mut rng)).collect();

        assert!(values.iter().any(|v| *v));
        assert!(values.iter().any(|v| !*v));
    }

    #[test]
    fn test_generate_amount() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let amount = generate_amount(&mut rng, 10.0, 10_000.0);
            assert!((10.0..=10_000.0).contains(&amount));
            let cents = amount * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }
}
