//! Fluent accumulation of lot geometry.
//!
//! ```
//! use carpark::builder::LotBuilder;
//!
//! let lot = LotBuilder::new()
//!     .with_square_size(3)
//!     .with_pedestrian_exit(5)
//!     .build();
//! assert_eq!(lot.available_bays(), 8);
//! ```

use crate::config::{LotConfig, LotConfigError};
use crate::lot::Lot;

/// Collects size, exits and disabled bays step by step.
#[derive(Debug, Clone, Default)]
pub struct LotBuilder {
    config: LotConfig,
}

impl LotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_square_size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    pub fn with_pedestrian_exit(mut self, bay: usize) -> Self {
        self.config.pedestrian_exits.push(bay);
        self
    }

    pub fn with_disabled_bay(mut self, bay: usize) -> Self {
        self.config.disabled_bays.push(bay);
        self
    }

    /// The configuration accumulated so far.
    pub fn config(&self) -> &LotConfig {
        &self.config
    }

    /// Build the lot without validating the geometry.
    pub fn build(self) -> Lot {
        Lot::from_config(self.config)
    }

    /// Validate the geometry, then build.
    pub fn try_build(self) -> Result<Lot, LotConfigError> {
        self.config.validate()?;
        Ok(Lot::from_config(self.config))
    }
}

impl From<LotBuilder> for LotConfig {
    fn from(builder: LotBuilder) -> Self {
        builder.config
    }
}
