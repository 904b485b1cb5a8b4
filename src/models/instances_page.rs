use serde::{Deserialize, Serialize};

use super::Offer;

/// One page of a filtered listing. `total` counts the whole filtered set.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InstancesPage {
    pub total: u64,
    pub instances: Vec<Offer>,
}

impl InstancesPage {
    pub fn total_pages(&self, page_size: usize) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.total.div_ceil(page_size as u64)
    }
}
