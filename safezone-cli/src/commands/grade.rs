//! Accuracy grading command.

use clap::Args;
use safezone::accuracy::{self, AccuracyTier};
use serde::Serialize;

use crate::error::CliError;
use crate::runner::GlobalOptions;

/// Arguments for `safezone grade`.
#[derive(Debug, Args)]
pub struct GradeArgs {
    /// Accuracy radius in meters (omit for an unknown radius)
    #[arg(long, allow_hyphen_values = true)]
    pub accuracy: Option<f64>,
}

#[derive(Debug, Serialize)]
struct Grade {
    accuracy_meters: Option<f64>,
    tier: AccuracyTier,
}

/// Run the grade command. Needs neither config nor zones.
pub fn run(options: &GlobalOptions, args: GradeArgs) -> Result<(), CliError> {
    let grade = Grade {
        accuracy_meters: args.accuracy,
        tier: accuracy::grade(args.accuracy),
    };

    let output = crate::commands::Output::new(options.json);
    output.emit(&grade, || grade.tier.to_string())
}
