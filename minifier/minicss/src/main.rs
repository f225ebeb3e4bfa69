//! minicss CLI
//!
//! Strips block comments and blank lines from a CSS file.

use std::process::ExitCode;

use minicss::{
    init_tracing, parse_args, CliError, CliOptions, Command, Destination, Minifier, USAGE,
};

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(std::env::args_os().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("minicss {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Minify(options) => match minify(options) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::from(err.exit_code())
            }
        },
    }
}

/// Open both ends, report an output fallback up front, then scan.
fn minify(options: CliOptions) -> Result<(), CliError> {
    let minifier = Minifier::new(options.input).with_config(options.config);
    let input = minifier.open_input()?;

    let (destination, output_error) = Destination::open(options.output.as_deref());
    if let Some(err) = output_error {
        eprintln!("warning: {err}; writing to standard output instead");
    }

    minifier.minimize_into(input, destination)?;
    Ok(())
}
