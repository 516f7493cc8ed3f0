//! GPS replay command.
//!
//! Runs a full GPS session (permission, first fix, watch) against a scripted
//! track. The session ends when the track runs out.

use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use safezone::monitor::{
    ErrorCause, GeofenceBroadcaster, MonitorState, ReplayFix, ReplayProvider,
    DEFAULT_REPLAY_INTERVAL,
};
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;

use super::common::{parse_point, PointArg};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for `safezone replay`.
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Track point as lat,lng or lat,lng,accuracy (repeat for a path)
    #[arg(
        long = "point",
        value_name = "LAT,LNG[,ACCURACY]",
        required = true,
        allow_hyphen_values = true,
        value_parser = parse_point
    )]
    pub points: Vec<PointArg>,

    /// Delay between streamed samples in milliseconds
    #[arg(long, default_value_t = DEFAULT_REPLAY_INTERVAL.as_millis() as u64)]
    pub interval_ms: u64,

    /// Refuse the location permission request
    #[arg(long)]
    pub deny_permission: bool,
}

impl ReplayArgs {
    fn provider(&self) -> ReplayProvider {
        let track = self
            .points
            .iter()
            .map(|p| ReplayFix::new(p.lat, p.lng, p.accuracy_meters))
            .collect();
        let provider =
            ReplayProvider::new(track).with_interval(Duration::from_millis(self.interval_ms));
        if self.deny_permission {
            provider.with_permission_denied()
        } else {
            provider
        }
    }
}

/// Run the replay command.
pub async fn run(runner: &CliRunner, args: ReplayArgs) -> Result<(), CliError> {
    runner.log_startup("replay");
    let tracker = runner.create_tracker()?;
    let output = runner.output();

    let mut updates = tracker.subscribe_updates();
    let mut alerts = tracker.subscribe_alerts();
    let mut states = tracker.subscribe_state();

    tracker.start_gps(Arc::new(args.provider()));
    output.state(*states.borrow_and_update())?;

    loop {
        tokio::select! {
            // Drain queued samples before acting on a state change.
            biased;

            update = updates.recv() => match update {
                Ok(update) => output.update(&update)?,
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Update subscriber lagged"),
                Err(RecvError::Closed) => break,
            },

            alert = alerts.recv() => match alert {
                Ok(alert) => output.alert(&alert)?,
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Alert subscriber lagged"),
                Err(RecvError::Closed) => break,
            },

            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = *states.borrow_and_update();
                output.state(state)?;
                match state {
                    MonitorState::Error(ErrorCause::PositionUnavailable) => break,
                    MonitorState::Error(cause) => return Err(CliError::Session(cause)),
                    MonitorState::Idle => break,
                    _ => {}
                }
            }
        }
    }

    tracker.stop();
    if !output.is_json() {
        println!();
        println!("Track finished");
    }
    Ok(())
}
