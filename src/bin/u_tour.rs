//! Command-line demo: prints the shortest closed tour for a stop set.
//!
//! ```text
//! u-tour [STOPS.json]
//! ```
//!
//! The file holds a JSON array of `[x, y, "identity"]` triples, depot
//! first. Without an argument the built-in sample is solved. Log level is
//! taken from `RUST_LOG` (default `info`).

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use u_tour::models::StopSet;
use u_tour::optimizer::RouteOptimizer;

const SAMPLE: &str = r#"[
    [0, 2, "Post office"],
    [8, 3, "742 Evergreen Terrace"],
    [6, 6, "302-bis Bolshaya Sadovaya"],
    [5, 2, "221B Baker Street"],
    [2, 5, "104/25 Griboyedov Canal"]
]"#;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn load_stops() -> Result<StopSet, String> {
    let text = match std::env::args_os().nth(1) {
        Some(path) => {
            tracing::info!(path = %path.to_string_lossy(), "reading stop set");
            std::fs::read_to_string(&path)
                .map_err(|err| format!("cannot read {}: {err}", path.to_string_lossy()))?
        }
        None => {
            tracing::info!("no input file given, solving the built-in sample");
            SAMPLE.to_owned()
        }
    };
    serde_json::from_str(&text).map_err(|err| format!("invalid stop set: {err}"))
}

fn main() -> ExitCode {
    init_tracing();

    let stops = match load_stops() {
        Ok(stops) => stops,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        depot = stops.depot().identity(),
        waypoints = stops.waypoints().len(),
        "stop set loaded"
    );

    match RouteOptimizer::default().solve(&stops) {
        Ok(result) => {
            for (stop, distance) in result.stops()[1..].iter().zip(result.leg_distances()) {
                tracing::debug!(stop = stop.identity(), distance, "leg");
            }
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("optimization failed: {err}");
            ExitCode::FAILURE
        }
    }
}
