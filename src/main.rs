use clap::Parser;
use file_crc32::cli::{Cli, execute_command};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; stdout carries only the checksum.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Usage problems exit with code 1; `--help` and `--version` keep
    // clap's stdout rendering and exit code 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    execute_command(&cli);
}
