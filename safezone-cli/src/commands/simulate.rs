//! Simulated session command.
//!
//! Pushes a list of points through a simulated monitor session, printing each
//! classified update and every alert the throttler lets through.

use std::time::Duration;

use clap::Args;

use super::common::{parse_point, PointArg};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for `safezone simulate`.
#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Point to push as lat,lng (repeat for a path)
    #[arg(
        long = "point",
        value_name = "LAT,LNG",
        required = true,
        allow_hyphen_values = true,
        value_parser = parse_point
    )]
    pub points: Vec<PointArg>,

    /// Pause between pushes in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,
}

/// Run the simulate command.
pub async fn run(runner: &CliRunner, args: SimulateArgs) -> Result<(), CliError> {
    runner.log_startup("simulate");
    let tracker = runner.create_tracker()?;
    let output = runner.output();
    let delay = Duration::from_millis(args.delay_ms);

    let input = tracker.start_simulated();
    let mut alerts = 0;
    for (index, point) in args.points.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let outcome = input.push(point.lat, point.lng)?;
        output.update(&outcome.update)?;
        if let Some(alert) = &outcome.alert {
            output.alert(alert)?;
            alerts += 1;
        }
    }
    tracker.stop();

    if !output.is_json() {
        println!();
        println!("{} samples, {} alerts", args.points.len(), alerts);
    }
    Ok(())
}
