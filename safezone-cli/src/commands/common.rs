//! Common types and utilities shared across CLI commands.

use std::fmt;

use safezone::monitor::{MonitorState, TrackingUpdate};
use safezone::throttle::AlertEvent;
use serde::Serialize;

use crate::error::CliError;

/// A coordinate given on the command line as `lat,lng` or `lat,lng,accuracy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointArg {
    pub lat: f64,
    pub lng: f64,
    pub accuracy_meters: Option<f64>,
}

impl fmt::Display for PointArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)?;
        if let Some(accuracy) = self.accuracy_meters {
            write!(f, ",{}", accuracy)?;
        }
        Ok(())
    }
}

/// Clap value parser for [`PointArg`].
pub fn parse_point(value: &str) -> Result<PointArg, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let number = |part: &str, name: &str| -> Result<f64, String> {
        part.parse()
            .map_err(|_| format!("invalid {} '{}' in '{}'", name, part, value))
    };

    match parts.as_slice() {
        [lat, lng] => Ok(PointArg {
            lat: number(*lat, "latitude")?,
            lng: number(*lng, "longitude")?,
            accuracy_meters: None,
        }),
        [lat, lng, accuracy] => Ok(PointArg {
            lat: number(*lat, "latitude")?,
            lng: number(*lng, "longitude")?,
            accuracy_meters: Some(number(*accuracy, "accuracy")?),
        }),
        _ => Err(format!(
            "expected 'lat,lng' or 'lat,lng,accuracy', got '{}'",
            value
        )),
    }
}

/// One line of session output.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Record<'a> {
    Update(&'a TrackingUpdate),
    Alert(&'a AlertEvent),
    State { state: MonitorState },
}

/// Prints command results as text, or as one JSON object per line.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print `value` as JSON, or `text` otherwise.
    pub fn emit<T: Serialize>(
        &self,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> Result<(), CliError> {
        if self.json {
            println!("{}", serde_json::to_string(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }

    pub fn update(&self, update: &TrackingUpdate) -> Result<(), CliError> {
        self.emit(&Record::Update(update), || {
            format!(
                "{:>10.5}, {:>10.5}  {:<24} accuracy: {}",
                update.position.lat,
                update.position.lng,
                update.status.to_string(),
                update.accuracy
            )
        })
    }

    pub fn alert(&self, alert: &AlertEvent) -> Result<(), CliError> {
        self.emit(&Record::Alert(alert), || match &alert.previous {
            Some(previous) if alert.is_transition() => {
                format!("ALERT: {} -> {}", previous, alert.next)
            }
            _ => format!("ALERT: {}", alert.next),
        })
    }

    pub fn state(&self, state: MonitorState) -> Result<(), CliError> {
        self.emit(&Record::State { state }, || format!("State: {}", state))
    }
}
