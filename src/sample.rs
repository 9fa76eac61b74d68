//!
//! Generate synthetic datasets by sampling from a model
//!
use crate::config::FullConfig;
use crate::error::{Error, Result};
use crate::params::ProbabilityModel;
use crate::stats::Record;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

///
/// Draw one fully observed configuration `(z, w, h)` from the model
///
pub fn sample_config<R: Rng>(model: &ProbabilityModel, rng: &mut R) -> FullConfig {
    let z = if rng.gen_bool(model.p_gender(0)) { 0 } else { 1 };
    let w = if rng.gen_bool(model.p_weight(0, z)) { 0 } else { 1 };
    let h = if rng.gen_bool(model.p_height(0, z)) { 0 } else { 1 };
    FullConfig::from_bits(z, w, h)
}

///
/// Draw one record; `Z` is hidden with probability `missing_rate`.
///
pub fn sample_record<R: Rng>(
    model: &ProbabilityModel,
    rng: &mut R,
    missing_rate: f64,
) -> Record {
    let config = sample_config(model, rng);
    if rng.gen_bool(missing_rate) {
        Record::Missing(config.observed())
    } else {
        Record::Hard(config)
    }
}

///
/// Generate `n_records` records.
/// Random number generator will be created from the seed.
///
pub fn sample_records(
    model: &ProbabilityModel,
    n_records: usize,
    missing_rate: f64,
    seed: u64,
) -> Result<Vec<Record>> {
    if !(0.0..=1.0).contains(&missing_rate) {
        return Err(Error::InvalidProbability {
            name: "missing_rate",
            value: missing_rate,
        });
    }
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    Ok((0..n_records)
        .map(|_| sample_record(model, &mut rng, missing_rate))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SufficientStats;

    #[test]
    fn sample_is_reproducible() {
        let m = ProbabilityModel::default_initial();
        let a = sample_records(&m, 100, 0.3, 5).unwrap();
        let b = sample_records(&m, 100, 0.3, 5).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 100);
    }
    #[test]
    fn sample_missing_rate() {
        let m = ProbabilityModel::default_initial();
        let hard: SufficientStats = sample_records(&m, 200, 0.0, 0).unwrap().into_iter().collect();
        assert_eq!(hard.n_missing(), 0);
        let missing: SufficientStats = sample_records(&m, 200, 1.0, 0).unwrap().into_iter().collect();
        assert_eq!(missing.n_hard(), 0);
        assert!(matches!(
            sample_records(&m, 10, 1.5, 0),
            Err(Error::InvalidProbability { .. })
        ));
    }
    #[test]
    fn sample_frequencies() {
        let m = ProbabilityModel::default_initial();
        let n = 20000;
        let stats: SufficientStats = sample_records(&m, n, 0.0, 11).unwrap().into_iter().collect();
        for c in FullConfig::all() {
            let freq = stats.hard(c) as f64 / n as f64;
            let p = m.likelihood_complete(c).to_value();
            assert_abs_diff_eq!(freq, p, epsilon = 0.02);
        }
    }
}
