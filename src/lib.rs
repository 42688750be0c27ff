//! Environmental and eco-social assessment core for cultural exhibitions.
//!
//! The crate is organized around a static criteria catalog (five weighted
//! categories of typed questions), a response aggregation model that rolls
//! completion percentages bottom-up, and a stateless validator applied to
//! every raw value before it is accepted. The HTTP surface in
//! [`assessment::router`] exposes the same operations the in-process service
//! facade offers.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
