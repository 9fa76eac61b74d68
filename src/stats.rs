//!
//! Sufficient statistics of the dataset
//!
//! * `SufficientStats`: hard counts and missing-data counts, fixed for a run
//! * `ExpectedCounts`: fractional completion of the missing records, recomputed every E-step
//! * `ClassSums`: the five sums the M-step needs
//! * `Record`: one line of the dataset
//!
use crate::common::{Count, Freq, N_FULL_CONFIGS, N_OBSERVED_CONFIGS};
use crate::config::{FullConfig, ObservedConfig};
use serde::{Deserialize, Serialize};

///
/// One record of the dataset
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Record {
    /// `zwh`, all three variables observed
    Hard(FullConfig),
    /// `-wh`, `Z` unobserved
    Missing(ObservedConfig),
}

///
/// Counts of the dataset records
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SufficientStats {
    ///
    /// count of fully observed records per `zwh` configuration
    ///
    hard_counts: [Count; N_FULL_CONFIGS],
    ///
    /// count of records with `Z` unobserved per `wh` configuration
    ///
    missing_counts: [Count; N_OBSERVED_CONFIGS],
    ///
    /// total number of records (hard + missing)
    ///
    total: Count,
}

impl SufficientStats {
    pub fn new(
        hard_counts: [Count; N_FULL_CONFIGS],
        missing_counts: [Count; N_OBSERVED_CONFIGS],
    ) -> SufficientStats {
        let total = hard_counts.iter().sum::<Count>() + missing_counts.iter().sum::<Count>();
        SufficientStats {
            hard_counts,
            missing_counts,
            total,
        }
    }
    /// Record one fully observed `zwh`
    pub fn add_hard(&mut self, config: FullConfig) {
        self.hard_counts[config.index()] += 1;
        self.total += 1;
    }
    /// Record one `-wh`
    pub fn add_missing(&mut self, config: ObservedConfig) {
        self.missing_counts[config.index()] += 1;
        self.total += 1;
    }
    pub fn add(&mut self, record: Record) {
        match record {
            Record::Hard(config) => self.add_hard(config),
            Record::Missing(config) => self.add_missing(config),
        }
    }
    pub fn hard(&self, config: FullConfig) -> Count {
        self.hard_counts[config.index()]
    }
    pub fn missing(&self, config: ObservedConfig) -> Count {
        self.missing_counts[config.index()]
    }
    pub fn hard_counts(&self) -> &[Count; N_FULL_CONFIGS] {
        &self.hard_counts
    }
    pub fn missing_counts(&self) -> &[Count; N_OBSERVED_CONFIGS] {
        &self.missing_counts
    }
    pub fn total(&self) -> Count {
        self.total
    }
    pub fn n_hard(&self) -> Count {
        self.hard_counts.iter().sum()
    }
    pub fn n_missing(&self) -> Count {
        self.missing_counts.iter().sum()
    }
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl std::iter::FromIterator<Record> for SufficientStats {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut stats = SufficientStats::default();
        for record in iter {
            stats.add(record);
        }
        stats
    }
}

impl std::fmt::Display for SufficientStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "total={} hard={:?} missing={:?}",
            self.total, self.hard_counts, self.missing_counts
        )
    }
}

///
/// Expected counts of the missing records completed into each `zwh`
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExpectedCounts([Freq; N_FULL_CONFIGS]);

impl ExpectedCounts {
    /// all-zero buffer
    pub fn zero() -> ExpectedCounts {
        ExpectedCounts([0.0; N_FULL_CONFIGS])
    }
    pub fn get(&self, config: FullConfig) -> Freq {
        self.0[config.index()]
    }
    pub fn set(&mut self, config: FullConfig, value: Freq) {
        self.0[config.index()] = value;
    }
    pub fn sum(&self) -> Freq {
        self.0.iter().sum()
    }
    pub fn as_array(&self) -> &[Freq; N_FULL_CONFIGS] {
        &self.0
    }
}

///
/// Sums of (hard + expected) counts used in the closed-form M-step
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassSums {
    /// mass of `Z=0`
    pub sum_z0: Freq,
    /// mass of `Z=0, W=0`
    pub sum_z0_w0: Freq,
    /// mass of `Z=1, W=0`
    pub sum_z1_w0: Freq,
    /// mass of `Z=0, H=0`
    pub sum_z0_h0: Freq,
    /// mass of `Z=1, H=0`
    pub sum_z1_h0: Freq,
    /// total number of records
    pub total: Freq,
}

impl ClassSums {
    ///
    /// Combine hard counts and expected counts into the five M-step sums.
    ///
    pub fn from_counts(stats: &SufficientStats, expected: &ExpectedCounts) -> ClassSums {
        let mut sums = ClassSums {
            sum_z0: 0.0,
            sum_z0_w0: 0.0,
            sum_z1_w0: 0.0,
            sum_z0_h0: 0.0,
            sum_z1_h0: 0.0,
            total: stats.total() as Freq,
        };
        for config in FullConfig::all() {
            let mass = stats.hard(config) as Freq + expected.get(config);
            match (config.z(), config.w(), config.h()) {
                (0, w, h) => {
                    sums.sum_z0 += mass;
                    if w == 0 {
                        sums.sum_z0_w0 += mass;
                    }
                    if h == 0 {
                        sums.sum_z0_h0 += mass;
                    }
                }
                (_, w, h) => {
                    if w == 0 {
                        sums.sum_z1_w0 += mass;
                    }
                    if h == 0 {
                        sums.sum_z1_h0 += mass;
                    }
                }
            }
        }
        sums
    }
    /// mass of `Z=1`
    pub fn sum_z1(&self) -> Freq {
        self.total - self.sum_z0
    }
}
