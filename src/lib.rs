//! # berth-fragility
//!
//! Closed-form fragility models for pile-supported wharves and piers
//! subjected to storm surge and wave loading.
//!
//! Each model maps intensity measures (maximum wave height, relative surge
//! elevation) and structural parameters to a probability of failure via a
//! published logistic regression: a fixed polynomial logit `g` passed through
//! `pf = 1 / (1 + exp(-g))`.
//!
//! ## Modules
//!
//! - [`pile_connection`] — Pile-to-deck connection fragilities (uplift and
//!   flexural failure modes) and the uplift model dispatcher
//! - [`intensity`] — Storm intensity measures and their calibrated domains
//! - [`logistic`] — The shared logistic transform
//! - [`error`] — Error type for selector parsing
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every evaluation is stateless, side-effect-free,
//!   and O(1); safe to call from any number of threads
//! - **Verbatim coefficients**: regression coefficients are empirical fits
//!   from the literature, transcribed exactly and pinned by tests
//! - **Exhaustive selectors**: categorical model options are enums, so an
//!   illegal selector cannot reach the arithmetic
//! - **Research-backed**: every model cites its source publication

pub mod error;
pub mod intensity;
pub mod logistic;
pub mod pile_connection;

pub use error::FragilityError;
pub use intensity::IntensityMeasures;
