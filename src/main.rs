use clap::Parser;

use domain_coloring::cli::{
    args::DomainColoringArgs,
    explore::{explore, ExploreParams},
    fatal_error,
};
use domain_coloring::core::file_io::load_params;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = DomainColoringArgs::parse();

    let params: ExploreParams = match args.params_path() {
        Some(path) => {
            load_params(path).unwrap_or_else(|err| fatal_error("Failed to load parameters", &err))
        }
        None => {
            log::info!("No parameter file given; using defaults.");
            ExploreParams::default()
        }
    };

    if let Err(err) = explore(params) {
        fatal_error("Failed to run the explorer", &err);
    }
}
