use crate::cli::HELP_TEMPLATE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
   // Obtain during build time, not runtime
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
#[command(
    after_help = HELP_TEMPLATE.replace("%BINARY_NAME%", env!("CARGO_PKG_NAME"))
)]
pub struct Cli {
    /// The file whose checksum is printed.
    #[arg(
        value_name = "file",
        help = "Path to the file to checksum. The whole file is read into memory."
    )]
    pub file: PathBuf,
}
