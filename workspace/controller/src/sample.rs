//! Canned transaction used to prefill the form.
//!
//! The values are one real row from the public credit-card fraud dataset the
//! model was trained on, so a freshly loaded form scores like a genuine
//! legitimate transaction instead of an all-zero outlier.

use common::FeaturePayload;

/// PCA components of the sample transaction, in column order.
pub const SAMPLE_FEATURES: [(&str, f64); 28] = [
    ("V1", -1.359807),
    ("V2", -0.072781),
    ("V3", 2.536346),
    ("V4", 1.378155),
    ("V5", -0.338321),
    ("V6", 0.462388),
    ("V7", 0.239599),
    ("V8", 0.098698),
    ("V9", 0.363787),
    ("V10", 0.090794),
    ("V11", -0.5516),
    ("V12", -0.617801),
    ("V13", -0.99139),
    ("V14", -0.311169),
    ("V15", 1.468177),
    ("V16", -0.470401),
    ("V17", 0.207971),
    ("V18", 0.025791),
    ("V19", 0.403993),
    ("V20", 0.251412),
    ("V21", -0.018307),
    ("V22", 0.277838),
    ("V23", -0.110474),
    ("V24", 0.066928),
    ("V25", 0.128539),
    ("V26", -0.189115),
    ("V27", 0.133558),
    ("V28", -0.021053),
];

/// Amount of the sample transaction.
pub const SAMPLE_AMOUNT: f64 = 149.62;

/// Fixed values merged into every manual submission for the fields the form
/// does not expose. Does not contain the amount.
pub fn feature_defaults() -> FeaturePayload {
    let mut payload = FeaturePayload::new();
    for (name, value) in SAMPLE_FEATURES {
        payload.set_number(name, value);
    }
    payload
}

/// Map a unit-interval draw onto the demo amount range of 10.00 to 500.00,
/// rounded to cents.
pub fn sample_amount(unit: f64) -> f64 {
    let raw = unit * 490.0 + 10.0;
    (raw * 100.0).round() / 100.0
}
