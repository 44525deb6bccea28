use crate::Error;

/// Square output resolution subdivided into `n_grids` cells per side.
#[derive(Clone, Copy, Debug)]
pub struct GridSpec {
    resolution: u32,
    n_grids: u32,
}

impl GridSpec {
    /// Validate a resolution / grid-count pair.
    ///
    /// Fails when either value is zero or when the grid count is too large
    /// for the resolution, which would leave every cell empty.
    pub fn new(resolution: u32, n_grids: u32) -> Result<Self, Error> {
        if resolution == 0 || n_grids == 0 {
            return Err(Error::InvalidGridSpec(format!(
                "resolution {resolution} and grid count {n_grids} must both be positive"
            )));
        }
        if resolution / n_grids == 0 {
            return Err(Error::InvalidGridSpec(format!(
                "grid count {n_grids} exceeds resolution {resolution}"
            )));
        }
        Ok(Self {
            resolution,
            n_grids,
        })
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn n_grids(&self) -> u32 {
        self.n_grids
    }

    /// Pixel side length of one grid cell (floor division).
    pub fn grid_res(&self) -> u32 {
        self.resolution / self.n_grids
    }

    /// Whether the cells cover the requested resolution exactly.
    pub fn is_exact(&self) -> bool {
        self.grid_res() * self.n_grids == self.resolution
    }

    /// Diagnostic for resolutions the grid does not divide evenly; the
    /// pattern is still generated and cropped to `resolution`.
    pub(crate) fn warn_if_inexact(&self) {
        if !self.is_exact() {
            log::warn!(
                "incomplete grid: resolution {} is not evenly divided by {} grids, edge cells will be truncated",
                self.resolution,
                self.n_grids
            );
        }
    }
}
