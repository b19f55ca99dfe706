use std::process::ExitCode;

use clap::Parser;

use docbundle::cli::{self, Cli};
use docbundle::domain::errors::BundleError;

fn main() -> ExitCode {
    docbundle::init();

    let cli = Cli::parse();
    match cli::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is::<BundleError>() {
                eprintln!("error: {err:#}");
            } else {
                eprintln!("unexpected error: {err:?}");
            }
            ExitCode::FAILURE
        }
    }
}
