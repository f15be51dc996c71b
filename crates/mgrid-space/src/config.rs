//! Construction-time configuration for [`MgrsSpace`](crate::MgrsSpace).

use mgrid_core::{CellAnchor, ConfigError};
use mgrid_geodesy::VincentyConfig;

/// Settings for the built-in WGS84 providers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpaceConfig {
    /// Point of each cell that grid coordinates refer to.
    ///
    /// Default: [`CellAnchor::Centre`]. This departs from the MGRS
    /// convention, where a reference names the south-west corner of its
    /// cell; set [`CellAnchor::SouthWest`] to follow it. Either way,
    /// translation and refinement are measured from the cell centre, so
    /// the anchor changes reported coordinates, distances and bearings
    /// but not which cells navigation reaches.
    pub anchor: CellAnchor,
    /// Iteration controls for the geodesic solver.
    pub vincenty: VincentyConfig,
}

impl SpaceConfig {
    /// Check the configuration for values the providers cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vincenty.validate()
    }
}
