//!
//! Configuration codes of the `(Z, W, H)` binary triple
//!
//! * `FullConfig`: 3-bit code `zwh` in `[0, 7]`, most-significant bit is `Z`
//! * `ObservedConfig`: 2-bit code `wh` in `[0, 3]`, most-significant bit is `W`
//!
use crate::common::{N_FULL_CONFIGS, N_OBSERVED_CONFIGS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

///
/// Fully observed configuration `(Z, W, H)`
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FullConfig(u8);

///
/// Observed part `(W, H)` of a configuration
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObservedConfig(u8);

impl FullConfig {
    pub fn from_bits(z: u8, w: u8, h: u8) -> FullConfig {
        assert!(z < 2 && w < 2 && h < 2);
        FullConfig((z << 2) | (w << 1) | h)
    }
    /// iterate over all 8 configurations in increasing code order
    pub fn all() -> impl Iterator<Item = FullConfig> {
        (0..N_FULL_CONFIGS as u8).map(FullConfig)
    }
    pub fn index(self) -> usize {
        self.0 as usize
    }
    pub fn z(self) -> u8 {
        (self.0 >> 2) & 1
    }
    pub fn w(self) -> u8 {
        (self.0 >> 1) & 1
    }
    pub fn h(self) -> u8 {
        self.0 & 1
    }
    /// drop `Z` and keep the lower two bits
    pub fn observed(self) -> ObservedConfig {
        ObservedConfig(self.0 & 0b11)
    }
}

impl ObservedConfig {
    pub fn from_bits(w: u8, h: u8) -> ObservedConfig {
        assert!(w < 2 && h < 2);
        ObservedConfig((w << 1) | h)
    }
    /// iterate over all 4 configurations in increasing code order
    pub fn all() -> impl Iterator<Item = ObservedConfig> {
        (0..N_OBSERVED_CONFIGS as u8).map(ObservedConfig)
    }
    pub fn index(self) -> usize {
        self.0 as usize
    }
    pub fn w(self) -> u8 {
        (self.0 >> 1) & 1
    }
    pub fn h(self) -> u8 {
        self.0 & 1
    }
    /// complete the configuration with the given value of `Z`
    pub fn with_z(self, z: u8) -> FullConfig {
        FullConfig::from_bits(z, self.w(), self.h())
    }
}

impl TryFrom<usize> for FullConfig {
    type Error = Error;
    fn try_from(index: usize) -> Result<Self> {
        if index < N_FULL_CONFIGS {
            Ok(FullConfig(index as u8))
        } else {
            Err(Error::InvalidConfig {
                index,
                max: N_FULL_CONFIGS - 1,
            })
        }
    }
}

impl TryFrom<usize> for ObservedConfig {
    type Error = Error;
    fn try_from(index: usize) -> Result<Self> {
        if index < N_OBSERVED_CONFIGS {
            Ok(ObservedConfig(index as u8))
        } else {
            Err(Error::InvalidConfig {
                index,
                max: N_OBSERVED_CONFIGS - 1,
            })
        }
    }
}

impl std::fmt::Display for FullConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:03b}", self.0)
    }
}

impl std::fmt::Display for ObservedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:02b}", self.0)
    }
}
