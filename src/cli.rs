use crate::em::{EMResult, EmConfig, Engine};
use crate::error::Result;
use crate::io::dataset::{parse_dataset_file, write_records_file};
use crate::io::json::write_json;
use crate::params::ProbabilityModel;
use crate::sample::sample_records;
use log::info;
use std::path::Path;

///
/// Estimate the model parameters from a dataset file and print the report.
///
pub fn estimate(
    input: &Path,
    init: ProbabilityModel,
    config: EmConfig,
    json: Option<&Path>,
) -> Result<EMResult> {
    let stats = parse_dataset_file(input)?;
    let engine = Engine::new(stats, config)?;

    println!("Initial parameters:\n{}", init);
    println!("Likelihood: {:.3}\n", engine.log_likelihood(&init));

    let result = engine.run(&init)?;
    for log in &result.logs {
        println!("{}", log);
    }
    if !result.is_converged() {
        println!("# not converged after {} iterations", result.n_iterations());
    }
    println!("Final result:\n{}", result.model);

    if let Some(path) = json {
        write_json(path, &result)?;
        info!("wrote {}", path.display());
    }
    Ok(result)
}

///
/// Sample a synthetic dataset from `model` and write it to `output`.
///
pub fn sample(
    model: ProbabilityModel,
    n_records: usize,
    missing_rate: f64,
    seed: u64,
    output: &Path,
) -> Result<()> {
    let records = sample_records(&model, n_records, missing_rate, seed)?;
    write_records_file(output, &records)?;
    info!("wrote {} records into {}", records.len(), output.display());
    Ok(())
}
