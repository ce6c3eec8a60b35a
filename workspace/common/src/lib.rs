//! Common transport-layer types shared with the scoring service.
//! These structs mirror the `/predict` request and response payloads so
//! the client can build and deserialize them without ad hoc JSON plumbing.

mod features;
mod prediction;

pub use features::{feature_columns, FeaturePayload, AMOUNT_FEATURE};
pub use prediction::{ErrorResponse, PredictionResponse, RiskBand};
