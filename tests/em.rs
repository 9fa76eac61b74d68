//!
//! end-to-end runs of EM
//!
#[macro_use]
extern crate approx;

use nbem::io::dataset::parse_dataset_file;
use nbem::mocks::{mock_mixed, mock_separable, mock_uniform_missing};
use nbem::prelude::*;
use test_case::test_case;

fn mixed_dataset_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/mixed.txt")
}

fn model(values: [f64; 5]) -> ProbabilityModel {
    ProbabilityModel::from_array(values).unwrap()
}

#[test]
fn mixed_dataset_file() {
    let stats = parse_dataset_file(mixed_dataset_path()).unwrap();
    assert_eq!(stats, mock_mixed());
    assert_eq!(stats.total(), 46);
}

#[test]
fn default_run_matches_reference() {
    let stats = parse_dataset_file(mixed_dataset_path()).unwrap();
    let engine = Engine::new(stats, EmConfig::default()).unwrap();
    let result = engine.run(&ProbabilityModel::default_initial()).unwrap();

    assert_eq!(result.status, Status::Converged);
    assert_eq!(result.n_iterations(), 9);
    let reference = model([0.496271, 0.547461, 0.366929, 0.681799, 0.277736]);
    assert_abs_diff_eq!(result.model, reference, epsilon = 0.001);
    assert_abs_diff_eq!(result.initial_log_likelihood, -82.388926, epsilon = 1e-5);
    assert_abs_diff_eq!(result.final_log_likelihood(), -75.703558, epsilon = 1e-5);
}

#[test]
fn log_likelihood_criterion_run() {
    let config = EmConfig::default().with_criterion(Criterion::LogLikelihood { delta: 0.001 });
    let engine = Engine::new(mock_mixed(), config).unwrap();
    let result = engine.run(&ProbabilityModel::default_initial()).unwrap();

    // stops earlier than the parameter criterion on this dataset
    assert_eq!(result.status, Status::Converged);
    assert_eq!(result.n_iterations(), 7);
    let reference = model([0.497230, 0.547943, 0.366108, 0.680129, 0.278617]);
    assert_abs_diff_eq!(result.model, reference, epsilon = 0.001);
}

#[test]
fn log_likelihood_is_non_decreasing() {
    let engine = Engine::new(mock_mixed(), EmConfig::default()).unwrap();
    let mut current = ProbabilityModel::default_initial();
    let mut log_likelihood = engine.log_likelihood(&current);
    for _ in 0..15 {
        current = engine.step(&current).unwrap();
        let new_log_likelihood = engine.log_likelihood(&current);
        println!("{} {:?}", new_log_likelihood, current);
        assert!(new_log_likelihood >= log_likelihood - 1e-9);
        log_likelihood = new_log_likelihood;
    }

    // same for the history recorded by a run
    let result = engine.run(&ProbabilityModel::default_initial()).unwrap();
    for w in result.log_likelihoods().windows(2) {
        assert!(w[1] >= w[0] - 1e-9);
    }
}

#[test]
fn fixed_point_is_stable() {
    let config = EmConfig::default().with_criterion(Criterion::Params { delta: 1e-12 });
    let engine = Engine::new(mock_mixed(), config).unwrap();
    let result = engine.run(&ProbabilityModel::default_initial()).unwrap();
    assert!(result.is_converged());

    let next = engine.step(&result.model).unwrap();
    assert!(next.is_close_to(&result.model, 0.001));
    assert_abs_diff_eq!(next, result.model, epsilon = 1e-9);
}

#[test]
fn separable_without_missing_records() {
    let engine = Engine::new(mock_separable(), EmConfig::default()).unwrap();
    let result = engine.run(&model([0.5, 0.5, 0.5, 0.5, 0.5])).unwrap();

    // `000` x2 and `101` x2: every female has W=0 and H=1
    let expected = model([0.5, 1.0, 1.0, 1.0, 0.0]);
    assert!(result.is_converged());
    assert_abs_diff_eq!(result.logs[0].model, expected, epsilon = 1e-12);
    assert_abs_diff_eq!(result.model, expected, epsilon = 1e-12);
    // the first M-step reaches the estimate, the second one confirms it
    assert_eq!(result.n_iterations(), 2);
}

#[test]
fn hard_only_is_direct_maximum_likelihood() {
    let stats = SufficientStats::new([5, 2, 3, 1, 1, 3, 2, 4], [0; 4]);
    let engine = Engine::new(stats, EmConfig::default()).unwrap();
    let result = engine.run(&ProbabilityModel::default_initial()).unwrap();
    let expected = model([11.0 / 21.0, 7.0 / 11.0, 4.0 / 10.0, 8.0 / 11.0, 3.0 / 10.0]);
    assert!(result.is_converged());
    assert_eq!(result.n_iterations(), 2);
    assert_abs_diff_eq!(result.model, expected, epsilon = 1e-12);
}

#[test_case([0.5, 0.5, 0.5, 0.5, 0.5] ; "all half")]
#[test_case([0.5, 0.5, 0.5, 0.7, 0.3] ; "height differs by class")]
#[test_case([0.5, 0.8, 0.2, 0.5, 0.5] ; "weight differs by class")]
fn uniform_missing_at_true_parameters(values: [f64; 5]) {
    let init = model(values);
    let engine = Engine::new(mock_uniform_missing(25), EmConfig::default()).unwrap();
    let result = engine.run(&init).unwrap();
    assert!(result.is_converged());
    assert_eq!(result.n_iterations(), 1);
    assert!(result.model.is_close_to(&init, 0.001));
}

#[test]
fn degenerate_dataset_is_reported() {
    let stats = SufficientStats::new([0, 0, 0, 0, 2, 0, 1, 1], [0; 4]);
    let engine = Engine::new(stats, EmConfig::default()).unwrap();
    let r = engine.run(&ProbabilityModel::default_initial());
    assert!(matches!(r, Err(Error::DegenerateModel { .. })));
}
