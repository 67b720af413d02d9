//! Host bridge port.
//!
//! The mini-app runs inside a host (Telegram) that exposes lifecycle,
//! theming, haptics, and outbound messaging. The handler only ever talks to
//! the host through [`HostBridge`], and holds it as an `Option` so that a page
//! opened outside the host degrades to no-ops.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The host raised while transmitting a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Host bridge error: {0}")]
pub struct BridgeError(pub String);

/// Haptic impact styles understood by `HapticFeedback.impactOccurred`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStyle {
    Light,
    Medium,
    #[default]
    Heavy,
    Rigid,
    Soft,
}

impl ImpactStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactStyle::Light => "light",
            ImpactStyle::Medium => "medium",
            ImpactStyle::Heavy => "heavy",
            ImpactStyle::Rigid => "rigid",
            ImpactStyle::Soft => "soft",
        }
    }
}

impl std::fmt::Display for ImpactStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities consumed from the host. All calls are fire-and-forget except
/// [`HostBridge::send_data`].
pub trait HostBridge {
    /// Ask the host to expand the view to full height.
    fn expand(&self);

    /// Signal that the page is ready to be shown.
    fn ready(&self);

    /// Hide the host-drawn primary action button.
    fn hide_main_button(&self);

    /// `themeParams.bg_color`, if the host supplied one.
    fn theme_bg_color(&self) -> Option<String>;

    /// Transmit a payload to the bot backend.
    fn send_data(&self, data: &str) -> Result<(), BridgeError>;

    /// Fire a haptic pulse. Returns `false` when the host has no haptics.
    fn haptic_impact(&self, style: ImpactStyle) -> bool;

    /// Request dismissal of the mini-app view.
    fn close(&self);
}
