pub mod dataset;
pub mod json;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

///
/// `.gz` extension means gzip-compressed
///
pub fn is_gzip<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().extension().map_or(false, |ext| ext == "gz")
}

///
/// write string into a file
///
pub fn write_string<P: AsRef<Path>>(path: P, string: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(string.as_bytes())?;
    Ok(())
}
