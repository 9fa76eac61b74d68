//!
//! JSON output of EM runs
//!
use super::write_string;
use crate::em::EMResult;
use crate::error::Result;
use std::path::Path;

///
/// Pretty-printed JSON of the whole run (config, history and final model)
///
pub fn to_json_string(result: &EMResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn write_json<P: AsRef<Path>>(path: P, result: &EMResult) -> Result<()> {
    let json = to_json_string(result)?;
    write_string(path, &json)?;
    Ok(())
}
