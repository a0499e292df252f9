//! Pause policy applied between sources during a full search.

use std::time::Duration;

/// Decides how long to wait before querying the next source.
pub trait DelayPolicy: Send + Sync {
    /// The pause inserted before each source after the first.
    fn delay(&self) -> Duration;
}

/// The same pause every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    /// Two seconds, the default pause between sources.
    pub const DEFAULT: FixedDelay = FixedDelay(Duration::from_secs(2));
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl DelayPolicy for FixedDelay {
    fn delay(&self) -> Duration {
        self.0
    }
}

/// No pause at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl DelayPolicy for NoDelay {
    fn delay(&self) -> Duration {
        Duration::ZERO
    }
}
