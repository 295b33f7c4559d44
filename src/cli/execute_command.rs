use crate::checksum::compute_crc32;
use crate::cli::Cli;
use crate::file_loader::load_file;

/// Runs one checksum invocation: the file is loaded whole, folded through
/// the CRC-32 engine, and the result printed to stdout.
///
/// Any load failure prints its message to stderr and exits with code 1;
/// a partial checksum is never printed.
pub fn execute_command(cli: &Cli) {
    let buffer = match load_file(&cli.file) {
        Ok(buffer) => buffer,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let crc32 = compute_crc32(&buffer);

    println!("{crc32:08X}");
}
