mod aggregate;
mod cli;
mod errors;
mod fetch;
mod model;
mod report;

use crate::errors::AppError;
use env_logger::Env;
use log::info;

fn setup_logging(level: &str) {
    let env = Env::default().filter_or("RUST_LOG", match level {
        "essential" => "info",
        "debug" => "debug",
        "trace" => "trace",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    });
    env_logger::Builder::from_env(env).init();
}

fn main() -> Result<(), AppError> {
    let args = cli::parse_cli();
    setup_logging(&args.log_level);
    info!("Starting: fetching transmitters from {}", args.base_url);

    let source = fetch::HttpTransmitterSource::new(args.base_url, args.page_size)?;
    let transmitters = fetch::fetch_all(&source)?;
    info!("Fetched {} transmitters", transmitters.len());

    let groups = aggregate::group_by_satellite(transmitters);
    let winner = aggregate::largest_group(&groups)?;
    info!(
        "Largest group: {} with {} transmitters (of {} satellites)",
        winner.name,
        winner.transmitters.len(),
        groups.len()
    );

    let best = report::best_transmitter(&winner.transmitters)?;
    let summary = report::build_report(winner, best);
    println!("{}", report::render(&summary)?);

    info!("Done.");
    Ok(())
}
