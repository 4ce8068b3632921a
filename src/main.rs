use std::{
    io::{self, Read, Write},
    process::ExitCode,
};

use log::error;

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Err(e) = congruence_crt::run(&input, &mut out) {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = out.flush() {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
