//! Storm intensity measures and their calibrated domains.
//!
//! All fragility models in this crate are driven by the same pair of
//! intensity measures: maximum wave height and relative surge elevation
//! (deck clearance). The regressions were calibrated over fixed ranges of
//! both; outside those ranges the polynomials extrapolate freely, which is
//! the caller's responsibility to judge, never an error.

use serde::{Deserialize, Serialize};

/// Calibrated domain of the maximum wave height `hmax`, in meters.
pub const HMAX_RANGE: (f64, f64) = (0.0, 8.0);

/// Calibrated domain of the relative surge elevation `zc`, in meters.
pub const ZC_RANGE: (f64, f64) = (-2.0, 2.0);

/// Storm intensity measures for a single fragility evaluation.
///
/// # Sign convention
///
/// Positive `zc` means the water surface sits below the deck soffit
/// (clearance remains); negative `zc` means the deck is inundated.
///
/// # Examples
///
/// ```
/// use berth_fragility::IntensityMeasures;
/// let im = IntensityMeasures { hmax: 4.0, zc: 0.0 };
/// assert!(im.within_calibrated_range());
///
/// let extreme = IntensityMeasures { hmax: 12.0, zc: 0.0 };
/// assert!(!extreme.within_calibrated_range());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityMeasures {
    /// Maximum wave height (m). Calibrated domain [`HMAX_RANGE`].
    pub hmax: f64,
    /// Relative surge elevation / deck clearance (m). Calibrated domain
    /// [`ZC_RANGE`]; positive = water surface below deck.
    pub zc: f64,
}

impl IntensityMeasures {
    /// Whether both measures lie inside the domains the regressions were
    /// calibrated over. Advisory only: evaluation outside the ranges is
    /// extrapolation, not an error.
    pub fn within_calibrated_range(&self) -> bool {
        (HMAX_RANGE.0..=HMAX_RANGE.1).contains(&self.hmax)
            && (ZC_RANGE.0..=ZC_RANGE.1).contains(&self.zc)
    }
}
