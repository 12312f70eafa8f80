use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default value for every intent coefficient.
pub const DEFAULT_COEFFICIENT: f64 = 1.0;

/// A validated primal intent vector.
///
/// Every coefficient lies in `[0.0, 1.0]`. Built from an [`IntentRequest`]
/// by the guard in `blitz-core`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentVector {
    /// Universal flourishing coefficient.
    pub phi_1: f64,
    /// Universal love coefficient.
    pub phi_22: f64,
    pub phi_omega: f64,
    /// Caller-supplied metadata, echoed back untouched.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Default for IntentVector {
    fn default() -> Self {
        Self {
            phi_1: DEFAULT_COEFFICIENT,
            phi_22: DEFAULT_COEFFICIENT,
            phi_omega: DEFAULT_COEFFICIENT,
            metadata: Map::new(),
        }
    }
}

/// Body of `POST /intent`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntentRequest {
    pub phi_1: Option<f64>,
    pub phi_22: Option<f64>,
    pub phi_omega: Option<f64>,
    pub metadata: Option<Map<String, Value>>,
}
