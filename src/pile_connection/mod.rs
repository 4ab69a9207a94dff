//! Pile-to-deck connection fragilities for wharves and piers.
//!
//! Probability of connection failure under storm surge and wave loading,
//! from published logistic regression models.
//!
//! # Models
//!
//! - [`uplift_balomenos`] — Uplift failure, moment connection and compression
//!   zone selectors; no aging effects
//! - [`uplift_maniglio`] — Uplift failure with deck geometry and dowel
//!   covariates; internal and seaward pile positions
//! - [`flexural_maniglio`] — Flexural failure of seaward piles with corrosion
//!   aging covariates
//! - [`uplift_pf`] — Dispatcher selecting among the uplift models
//!
//! # References
//!
//! - Balomenos, G.P., & Padgett, J.E. (2018). "Fragility Analysis of
//!   Pile-Supported Wharves and Piers Exposed to Storm Surge and Waves",
//!   *Journal of Waterway, Port, Coastal, and Ocean Engineering* 144(2),
//!   04017046. doi:10.1061/(ASCE)WW.1943-5460.0000436
//! - Maniglio, M., Balomenos, G.P., Padgett, J.E., & Cimellaro, G.P. (2021).
//!   "Parameterized coastal fragilities and their application to aging port
//!   structures subjected to surge and wave", *Engineering Structures* 237,
//!   112235. doi:10.1016/j.engstruct.2021.112235

mod balomenos;
mod dispatch;
mod maniglio;

pub use balomenos::{uplift_balomenos, BalomenosParams, CompressionZone, MomentConnection};
pub use dispatch::{uplift_pf, UpliftModel};
pub use maniglio::{
    flexural_maniglio, uplift_maniglio, CorrosionType, ManiglioFlexuralParams,
    ManiglioUpliftParams, PilePosition,
};
