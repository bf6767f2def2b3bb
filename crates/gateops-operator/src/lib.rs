//! Reconciliation library for API gateway operation resources.
//!
//! Translates a declarative operation configuration into the control
//! plane's typed contract and drives create-or-update / read / delete
//! against the versioned REST API, detecting out-of-band drift on read.

pub mod client;
pub mod constants;
pub mod controller;
pub mod error;
pub mod spec;
pub mod telemetry;
pub mod translate;

pub use client::{ControlPlaneClient, ControlPlaneConfig};
pub use controller::{ObservedOperation, OperationController};
pub use error::{OperatorError, Result};
