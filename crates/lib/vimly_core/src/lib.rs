//! # vimly_core
//!
//! Core lead capture logic for Vimly: the lead record, field validation,
//! host bridge ports, and the submit handler.

pub mod bridge;
pub mod config;
pub mod handler;
pub mod lead;
pub mod payload;
pub mod view;

pub use bridge::{BridgeError, HostBridge, ImpactStyle};
pub use config::{ConfigError, LeadConfig};
pub use handler::{LeadCaptureHandler, SubmitError, SubmitOutcome, SubmitState};
pub use lead::{LeadField, LeadForm, LeadRecord, ValidationError};
pub use view::{Clock, LeadFormView, Scheduler, SystemClock};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
