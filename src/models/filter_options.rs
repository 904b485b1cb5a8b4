use serde::{Deserialize, Serialize};

/// Distinct values used to populate the selection widgets.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FilterOptions {
    #[serde(default)]
    pub providers: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub instance_families: Vec<String>,
    #[serde(default)]
    pub storage_types: Vec<String>,
}
