use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use devtype::types::OutputNaming;

#[derive(Parser)]
#[command(name = "devtype", version, about = "Device-type library tooling")]
pub struct CliArgs {
    /// Enable debug logging (RUST_LOG is honoured otherwise)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Crop elevation PNGs to their opaque region and pad/crop them to a fixed aspect ratio
    NormalizeImages(NormalizeArgs),
    /// Generate one device-type YAML document per row of a model CSV
    GenerateDevices(GenerateArgs),
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Directory containing the PNG files (not searched recursively)
    #[arg(default_value = devtype::core::params::DEFAULT_IMAGE_DIR)]
    pub dir: PathBuf,

    /// JSON preset with normalizer parameters; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overwrite sources in place or write prefixed siblings
    #[arg(long, value_enum)]
    pub naming: Option<OutputNaming>,

    /// Filename prefix for prefixed output (default "final_")
    #[arg(long)]
    pub prefix: Option<String>,

    /// Target width as a multiple of the height (default 9.8)
    #[arg(long)]
    pub ratio: Option<f64>,

    /// Keep going after a file fails, reporting the error count at the end
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Model CSV file
    #[arg(default_value = devtype::core::params::DEFAULT_CSV_FILE)]
    pub csv: PathBuf,

    /// JSON preset with generator parameters; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the YAML documents are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Directory checked for <slug>.front.png / <slug>.rear.png
    #[arg(long)]
    pub elevation_dir: Option<PathBuf>,

    /// Manufacturer name written to every record
    #[arg(long)]
    pub manufacturer: Option<String>,

    /// Keep going after a malformed row, reporting the error count at the end
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,
}
