//! Zone listing command.

use safezone::zone::{Zone, ZoneKind};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the zones command.
pub fn run(runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("zones");
    let registry = runner.load_registry()?;
    let output = runner.output();

    if registry.is_empty() && !output.is_json() {
        println!("No zones defined.");
        return Ok(());
    }

    for kind in ZoneKind::PRIORITY {
        for zone in registry.zones_of(kind) {
            output.emit(zone, || describe(zone))?;
        }
    }
    Ok(())
}

fn describe(zone: &Zone) -> String {
    let mut line = format!(
        "{:<10} {:<20} {} ({} vertices)",
        zone.kind().to_string(),
        zone.id(),
        zone.label(),
        zone.vertices().len()
    );
    if !zone.description().is_empty() {
        line.push_str(&format!("\n{:<31} {}", "", zone.description()));
    }
    line
}
