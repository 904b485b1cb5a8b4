use serde::{Deserialize, Serialize};

/// Predicate for the bare-metal builder. Disjoint from `InstanceFilter`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BareMetalFilter {
    pub min_cores: Option<f64>,
    pub min_memory: Option<f64>,
    pub min_storage: Option<f64>,
    /// Offers without a monthly price fail this ceiling when it is set.
    pub max_monthly_cost: Option<f64>,
    /// Exact match; empty means any location.
    pub region: String,
}
