use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CatalogMetrics {
    pub total_records: u64,
    /// Latest `last_updated` seen per provider.
    #[serde(default)]
    pub last_updated_times: BTreeMap<String, Option<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}
