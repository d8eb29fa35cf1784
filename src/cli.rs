use std::fmt::Display;

pub mod args;
pub mod explore;

/// The one place where the process gives up: report the failure and exit with status 1.
/// Nothing is retried and nothing is partially recovered.
pub fn fatal_error<E: Display + ?Sized>(context: &str, err: &E) -> ! {
    if log::log_enabled!(log::Level::Error) {
        log::error!("{}: {}", context, err);
    } else {
        eprintln!("FATAL ERROR: {}: {}", context, err);
    }
    std::process::exit(1)
}
