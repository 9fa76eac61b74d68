use clap::{ArgEnum, Parser, Subcommand};
use nbem::{
    cli,
    common::{DEFAULT_DELTA, DEFAULT_MAX_ITER},
    em::{Criterion, EmConfig},
    params::ProbabilityModel,
};

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum CriterionKind {
    /// every parameter changed by less than delta
    Params,
    /// log-likelihood changed by less than delta
    Loglik,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate the model parameters from a dataset by EM
    Estimate {
        /// Input dataset filename (`.gz` is accepted)
        input: std::path::PathBuf,
        /// Initial model `P(Z=0),P(W=0|Z=0),P(W=0|Z=1),P(H=0|Z=0),P(H=0|Z=1)`
        #[clap(long, default_value = "0.7,0.8,0.4,0.7,0.3")]
        init: ProbabilityModel,
        /// Convergence criterion
        #[clap(long, arg_enum, default_value = "params")]
        criterion: CriterionKind,
        /// Convergence threshold
        #[clap(long, default_value_t = DEFAULT_DELTA)]
        delta: f64,
        /// Maximum number of EM iterations
        #[clap(long, default_value_t = DEFAULT_MAX_ITER)]
        max_iter: usize,
        /// Write the whole run as JSON
        #[clap(long)]
        json: Option<std::path::PathBuf>,
    },
    /// Sample a synthetic dataset from a model
    Sample {
        /// Model to sample from
        #[clap(long, default_value = "0.7,0.8,0.4,0.7,0.3")]
        model: ProbabilityModel,
        /// Number of records
        #[clap(short = 'n', default_value_t = 100)]
        n_records: usize,
        /// Probability that `Z` of a record is hidden
        #[clap(short = 'm', long, default_value_t = 0.5)]
        missing_rate: f64,
        /// Seed of the random number generator
        #[clap(short, long, default_value_t = 0)]
        seed: u64,
        /// Output dataset filename (`.gz` is compressed)
        #[clap(short, long)]
        output: std::path::PathBuf,
    },
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    println!("# started_at={}", chrono::Local::now());
    println!("# opts={:?}", opts);

    let result = match opts.command {
        Commands::Estimate {
            input,
            init,
            criterion,
            delta,
            max_iter,
            json,
        } => {
            let criterion = match criterion {
                CriterionKind::Params => Criterion::Params { delta },
                CriterionKind::Loglik => Criterion::LogLikelihood { delta },
            };
            let config = EmConfig::default()
                .with_criterion(criterion)
                .with_max_iter(max_iter);
            cli::estimate(&input, init, config, json.as_deref()).map(|_| ())
        }
        Commands::Sample {
            model,
            n_records,
            missing_rate,
            seed,
            output,
        } => cli::sample(model, n_records, missing_rate, seed, &output),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    println!("# finished_at={}", chrono::Local::now());
}
