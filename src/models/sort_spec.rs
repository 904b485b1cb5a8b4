use serde::{Deserialize, Serialize};

use super::Offer;

/// Column an instance listing is ordered by. Mirrors the remote `sort_by` values.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    HourlyCost,
    Vcpus,
    MemoryGb,
}

impl SortKey {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::HourlyCost => "hourly_cost",
            SortKey::Vcpus => "vcpus",
            SortKey::MemoryGb => "memory_gb",
        }
    }

    pub fn value(&self, offer: &Offer) -> Option<f64> {
        match self {
            SortKey::HourlyCost => offer.hourly_cost,
            SortKey::Vcpus => offer.vcpus,
            SortKey::MemoryGb => offer.memory_gb,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}
