use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::models::{CatalogMetrics, FilterOptions, Offer};
use super::csv::decode_offers;

// Embed the bundled pricing snapshot in the binary
const BUNDLED_SNAPSHOT: &str = include_str!("../../data/vm_pricing.csv");

/// The decoded local dataset plus its derived option indexes.
///
/// Built once; the indexes are never recomputed because the offers never change.
#[derive(Debug, Clone)]
pub struct SnapshotCatalog {
    offers: Vec<Offer>,
    options: FilterOptions,
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl SnapshotCatalog {
    pub fn from_offers(offers: Vec<Offer>) -> Self {
        let options = FilterOptions {
            providers: distinct_sorted(offers.iter().map(|o| o.provider.as_str())),
            regions: distinct_sorted(offers.iter().map(|o| o.region.as_str())),
            instance_families: distinct_sorted(offers.iter().filter_map(|o| o.instance_family.as_deref())),
            storage_types: distinct_sorted(offers.iter().filter_map(|o| o.storage_type.as_deref())),
        };
        SnapshotCatalog { offers, options }
    }

    pub fn from_csv(text: &str) -> Self {
        Self::from_offers(decode_offers(text))
    }

    /// The snapshot compiled into the binary.
    pub fn bundled() -> Self {
        Self::from_csv(BUNDLED_SNAPSHOT)
    }

    /// Load an override file if one is given and readable, else the bundled snapshot.
    pub fn load(path: Option<&Path>) -> Self {
        let catalog = match path {
            Some(p) => match std::fs::read_to_string(p) {
                Ok(text) => {
                    tracing::info!(path = %p.display(), "Loaded snapshot override");
                    Self::from_csv(&text)
                }
                Err(e) => {
                    tracing::warn!(%e, path = %p.display(), "Failed to read snapshot override; using bundled snapshot");
                    Self::bundled()
                }
            },
            None => Self::bundled(),
        };
        tracing::debug!(offers = catalog.offers.len(), providers = catalog.options.providers.len(), "Snapshot catalog ready");
        catalog
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn regions_for_provider(&self, provider: &str) -> Vec<String> {
        distinct_sorted(
            self.offers
                .iter()
                .filter(|o| o.provider == provider)
                .map(|o| o.region.as_str()),
        )
    }

    pub fn metrics(&self) -> CatalogMetrics {
        let mut last_updated_times: BTreeMap<String, Option<String>> = BTreeMap::new();
        for offer in &self.offers {
            let entry = last_updated_times.entry(offer.provider.clone()).or_insert(None);
            if entry.as_deref().map_or(true, |seen| offer.last_updated.as_str() > seen) {
                *entry = Some(offer.last_updated.clone());
            }
        }
        CatalogMetrics {
            total_records: self.offers.len() as u64,
            last_updated_times,
        }
    }
}
