//!
//! Datasets for tests
//!
use crate::common::Count;
use crate::stats::SufficientStats;

///
/// 2 records of `000` and 2 of `101`, nothing missing.
///
pub fn mock_separable() -> SufficientStats {
    SufficientStats::new([2, 0, 0, 0, 0, 2, 0, 0], [0; 4])
}

///
/// `n` records of each `-wh`, every `Z` missing.
///
pub fn mock_uniform_missing(n: Count) -> SufficientStats {
    SufficientStats::new([0; 8], [n; 4])
}

///
/// 21 hard records and 25 missing records
///
/// ```text
/// zwh   000 001 010 011 100 101 110 111
/// hard    5   2   3   1   1   3   2   4
/// wh     00  01  10  11
/// miss    4   6   7   8
/// ```
///
pub fn mock_mixed() -> SufficientStats {
    SufficientStats::new([5, 2, 3, 1, 1, 3, 2, 4], [4, 6, 7, 8])
}
