//! Dispatcher over the uplift fragility models.

use serde::{Deserialize, Serialize};

use crate::intensity::IntensityMeasures;

use super::balomenos::{uplift_balomenos, BalomenosParams};
use super::maniglio::{uplift_maniglio, ManiglioUpliftParams};

/// An uplift fragility model together with its parameter record.
///
/// Bundling the selection with its parameters makes misrouting impossible:
/// each variant can only reach the formula its parameters belong to. There
/// is no default variant; the Maniglio model is the usual choice when its
/// geometry covariates are known, since it supersedes the Balomenos fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpliftModel {
    /// Balomenos & Padgett (2018), no aging effects.
    Balomenos(BalomenosParams),
    /// Maniglio et al. (2021), with geometry and dowel covariates.
    Maniglio(ManiglioUpliftParams),
}

/// Probability of uplift failure of a pile-to-deck connection, under the
/// selected model.
///
/// Delegates to [`uplift_balomenos`] or [`uplift_maniglio`] according to the
/// variant.
///
/// # Examples
///
/// ```
/// use berth_fragility::IntensityMeasures;
/// use berth_fragility::pile_connection::{
///     uplift_balomenos, uplift_pf, BalomenosParams, CompressionZone,
///     MomentConnection, UpliftModel,
/// };
///
/// let im = IntensityMeasures { hmax: 4.0, zc: 0.0 };
/// let params = BalomenosParams {
///     moment: MomentConnection::Full,
///     comp_zone: CompressionZone::In,
/// };
/// let pf = uplift_pf(im, UpliftModel::Balomenos(params));
/// assert_eq!(pf, uplift_balomenos(im, params));
/// ```
pub fn uplift_pf(im: IntensityMeasures, model: UpliftModel) -> f64 {
    match model {
        UpliftModel::Balomenos(params) => uplift_balomenos(im, params),
        UpliftModel::Maniglio(params) => uplift_maniglio(im, params),
    }
}
