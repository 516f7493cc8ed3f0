//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`classify`] - Classify one coordinate
//! - [`config`] - Configuration management (path, show, init)
//! - [`grade`] - Grade an accuracy radius
//! - [`replay`] - Replay a GPS track through a full session
//! - [`simulate`] - Push simulated points through a session
//! - [`zones`] - List zone definitions

pub mod classify;
pub mod common;
pub mod config;
pub mod grade;
pub mod replay;
pub mod simulate;
pub mod zones;

pub use common::Output;
