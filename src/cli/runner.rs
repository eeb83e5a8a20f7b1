use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use devtype::core::params::load_params;
use devtype::{BatchReport, GenerateParams, NormalizeParams};

use super::args::{CliArgs, Command, GenerateArgs, NormalizeArgs};
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_preset<T>(config: Option<&Path>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned + Default,
{
    match config {
        Some(path) => load_params(path).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(T::default()),
    }
}

fn normalize_params(args: &NormalizeArgs) -> Result<NormalizeParams, AppError> {
    let mut params: NormalizeParams = load_preset(args.config.as_deref())?;
    if let Some(naming) = args.naming {
        params.naming = naming;
    }
    if let Some(prefix) = &args.prefix {
        params.prefix = prefix.clone();
    }
    if let Some(ratio) = args.ratio {
        params.ratio = ratio;
    }
    params.continue_on_error |= args.continue_on_error;
    Ok(params)
}

fn generate_params(args: &GenerateArgs) -> Result<GenerateParams, AppError> {
    let mut params: GenerateParams = load_preset(args.config.as_deref())?;
    if let Some(dir) = &args.output_dir {
        params.output_dir = dir.clone();
    }
    if let Some(dir) = &args.elevation_dir {
        params.elevation_dir = dir.clone();
    }
    if let Some(manufacturer) = &args.manufacturer {
        params.manufacturer = manufacturer.clone();
    }
    params.continue_on_error |= args.continue_on_error;
    Ok(params)
}

fn log_report(report: &BatchReport) -> Result<(), AppError> {
    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    if report.errors > 0 {
        return Err(AppError::Failures {
            errors: report.errors,
        });
    }
    Ok(())
}

fn run_normalize(args: NormalizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.dir.is_dir() {
        return Err(AppError::MissingInputDir { path: args.dir }.into());
    }
    let params = normalize_params(&args)?;
    info!("Normalizing images in {:?} ({:?})", args.dir, params.naming);

    let report = devtype::normalize_directory(&args.dir, &params)?;
    log_report(&report)?;
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.csv.is_file() {
        return Err(AppError::MissingInputFile { path: args.csv }.into());
    }
    let params = generate_params(&args)?;
    info!("Output directory: {:?}", params.output_dir);

    let report = devtype::generate_from_csv(&args.csv, &params)?;
    log_report(&report)?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.verbose);

    match args.command {
        Command::NormalizeImages(cmd) => run_normalize(cmd),
        Command::GenerateDevices(cmd) => run_generate(cmd),
    }
}
