//! Uplift fragility for pile-to-deck connections, without aging effects.
//!
//! Logistic regression surfaces fitted by Balomenos & Padgett (2018) for
//! four connection configurations: full or partial moment connection, with
//! the compression zone inside or outside the connection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FragilityError;
use crate::intensity::IntensityMeasures;
use crate::logistic::logistic;

/// Moment connection type of the pile-to-deck joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentConnection {
    /// Full moment connection.
    Full,
    /// Partial moment connection.
    Partial,
}

impl fmt::Display for MomentConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::Partial => f.write_str("partial"),
        }
    }
}

impl FromStr for MomentConnection {
    type Err = FragilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "partial" => Ok(Self::Partial),
            other => Err(FragilityError::invalid_selector("moment", other)),
        }
    }
}

/// Location of the compression zone relative to the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionZone {
    /// Compression zone inside the connection.
    In,
    /// Compression zone outside the connection.
    Out,
}

impl fmt::Display for CompressionZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => f.write_str("in"),
            Self::Out => f.write_str("out"),
        }
    }
}

impl FromStr for CompressionZone {
    type Err = FragilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            other => Err(FragilityError::invalid_selector("comp_zone", other)),
        }
    }
}

/// Connection configuration for [`uplift_balomenos`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalomenosParams {
    /// Moment connection type.
    pub moment: MomentConnection,
    /// Compression zone location.
    pub comp_zone: CompressionZone,
}

/// Probability of uplift failure of a pile-to-deck connection.
///
/// The logit is a degree-3 polynomial in `hmax` and `zc`, with one fitted
/// coefficient set per (moment, compression zone) combination. The
/// coefficients are empirical and reproduced verbatim from the publication;
/// no aging covariates are considered.
///
/// Inputs outside the calibrated domains
/// ([`HMAX_RANGE`](crate::intensity::HMAX_RANGE),
/// [`ZC_RANGE`](crate::intensity::ZC_RANGE)) are extrapolated as-is.
///
/// # Examples
///
/// ```
/// use berth_fragility::IntensityMeasures;
/// use berth_fragility::pile_connection::{
///     uplift_balomenos, BalomenosParams, CompressionZone, MomentConnection,
/// };
///
/// let im = IntensityMeasures { hmax: 4.0, zc: 0.0 };
/// let params = BalomenosParams {
///     moment: MomentConnection::Full,
///     comp_zone: CompressionZone::In,
/// };
/// let pf = uplift_balomenos(im, params);
/// assert!((pf - 0.0119).abs() < 1e-4);
/// ```
///
/// # Reference
/// Balomenos & Padgett (2018), *J. Waterway, Port, Coastal, Ocean Eng.*
/// 144(2), 04017046.
pub fn uplift_balomenos(im: IntensityMeasures, params: BalomenosParams) -> f64 {
    let IntensityMeasures { hmax, zc } = im;

    let g = match (params.moment, params.comp_zone) {
        (MomentConnection::Full, CompressionZone::In) => {
            -27.06 + 9.02 * hmax - 1.88 * zc + 0.18 * hmax * zc - hmax.powi(2)
                + 0.04 * hmax.powi(3)
        }
        (MomentConnection::Full, CompressionZone::Out) => {
            -26.89 + 11.35 * hmax - 2.50 * zc + 0.30 * hmax * zc - 1.62 * hmax.powi(2)
                + 0.09 * hmax.powi(3)
        }
        (MomentConnection::Partial, CompressionZone::In) => {
            -15.01 + 6.12 * hmax - 2.87 * zc + 0.39 * hmax * zc - 0.61 * hmax.powi(2)
                - 0.28 * zc.powi(2)
                + 0.03 * hmax.powi(3)
        }
        (MomentConnection::Partial, CompressionZone::Out) => {
            -20.945 + 13.27 * hmax - 4.73 * zc + 0.90 * hmax * zc - 2.71 * hmax.powi(2)
                - 0.5 * zc.powi(2)
                + 0.23 * hmax.powi(3)
        }
    };

    logistic(g)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pf_bounded_over_calibrated_range(
            hmax in 0.0_f64..8.0,
            zc in -2.0_f64..2.0,
        ) {
            for (moment, comp_zone) in [
                (MomentConnection::Full, CompressionZone::In),
                (MomentConnection::Full, CompressionZone::Out),
                (MomentConnection::Partial, CompressionZone::In),
                (MomentConnection::Partial, CompressionZone::Out),
            ] {
                let pf = uplift_balomenos(
                    IntensityMeasures { hmax, zc },
                    BalomenosParams { moment, comp_zone },
                );
                prop_assert!(pf > 0.0 && pf < 1.0, "pf = {}", pf);
            }
        }
    }
}
