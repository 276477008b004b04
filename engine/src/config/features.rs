//! Reach-Around Feature Toggles
//!
//! Each strategy is usable only when the player enabled it and the host
//! (normally the server) allows it. Both bits arrive already resolved.

use serde::{Deserialize, Serialize};

/// A locally switchable feature that the host may veto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub enabled: bool,
    pub allowed: bool,
}

impl Feature {
    /// Enabled or not, allowed by the host.
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            allowed: true,
        }
    }

    #[inline]
    pub const fn is_available(&self) -> bool {
        self.enabled && self.allowed
    }
}

impl Default for Feature {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Availability of the two reach-around strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureToggles {
    pub vertical: Feature,
    pub horizontal: Feature,
}

impl FeatureToggles {
    pub const fn new(vertical: bool, horizontal: bool) -> Self {
        Self {
            vertical: Feature::new(vertical),
            horizontal: Feature::new(horizontal),
        }
    }

    pub const fn all() -> Self {
        Self::new(true, true)
    }

    pub const fn none() -> Self {
        Self::new(false, false)
    }

    /// Apply the host's permission to both strategies.
    pub fn set_allowed(&mut self, allowed: bool) {
        self.vertical.allowed = allowed;
        self.horizontal.allowed = allowed;
    }

    #[inline]
    pub fn vertical_available(&self) -> bool {
        self.vertical.is_available()
    }

    #[inline]
    pub fn horizontal_available(&self) -> bool {
        self.horizontal.is_available()
    }

    /// True when at least one strategy can run.
    #[inline]
    pub fn any_available(&self) -> bool {
        self.vertical_available() || self.horizontal_available()
    }
}
