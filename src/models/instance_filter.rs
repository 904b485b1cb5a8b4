use serde::{Deserialize, Serialize};

use super::SortSpec;

/// User-chosen predicate for the general instance listing.
///
/// Empty strings, `None` thresholds and empty sets are unrestricted.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InstanceFilter {
    pub instance_name: String,
    pub min_vcpus: Option<f64>,
    pub min_memory: Option<f64>,
    pub min_storage: Option<f64>,
    pub providers: Vec<String>,
    pub regions: Vec<String>,
    pub instance_families: Vec<String>,
    pub storage_types: Vec<String>,
    pub sort: SortSpec,
}
