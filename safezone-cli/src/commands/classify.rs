//! Single-point classification command.

use clap::Args;
use safezone::accuracy::{self, AccuracyTier};
use safezone::position::Position;
use safezone::resolver::{ZoneResolver, ZoneStatus};
use serde::Serialize;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for `safezone classify`.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// Reported accuracy radius in meters
    #[arg(long)]
    pub accuracy: Option<f64>,
}

#[derive(Debug, Serialize)]
struct Classification<'a> {
    position: &'a Position,
    status: &'a ZoneStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    accuracy: AccuracyTier,
}

/// Run the classify command.
pub fn run(runner: &CliRunner, args: ClassifyArgs) -> Result<(), CliError> {
    runner.log_startup("classify");
    let position = Position::gps(args.lat, args.lng, args.accuracy)?;
    let resolver = ZoneResolver::new(runner.load_registry()?);

    let status = resolver.classify(&position);
    let label = status
        .zone_id
        .as_deref()
        .and_then(|id| resolver.registry().get(id))
        .map(|zone| zone.label());

    let result = Classification {
        position: &position,
        status: &status,
        label,
        accuracy: accuracy::grade(position.accuracy_meters),
    };

    runner.output().emit(&result, || {
        let mut text = format!("Position: {}\nStatus:   {}", position, status);
        if let Some(label) = label {
            text.push_str(&format!(" - {}", label));
        }
        text.push_str(&format!("\nAccuracy: {}", result.accuracy));
        text
    })
}
