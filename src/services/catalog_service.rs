use std::sync::atomic::{AtomicBool, Ordering};

use crate::api::{self, RemoteCatalog};
use crate::config::{clamp_page_size, Settings};
use crate::error::CatalogError;
use crate::models::{
    BareMetalFilter, CatalogMetrics, FilterOptions, HealthStatus, InstanceFilter, InstancesPage, Offer, Served,
    SortOrder,
};
use crate::snapshot::SnapshotCatalog;

use super::paging::{page_slice, sort_offers, sort_offers_by};
use super::predicate::{matches_bare_metal, matches_instance};
use super::provider_display::{display_providers, BARE_METAL_PROVIDER};

/// Decides per call whether the remote catalog or the bundled snapshot answers.
///
/// The first remote failure latches `forced_fallback` for the lifetime of this
/// value; every later call goes straight to the snapshot. Each session owns its
/// own service, so separate sessions never share the latch.
#[derive(Debug)]
pub struct CatalogService {
    snapshot: SnapshotCatalog,
    remote: Option<RemoteCatalog>,
    forced_fallback: AtomicBool,
    page_size: usize,
}

fn paginate(mut offers: Vec<Offer>, page: usize, page_size: usize, sort: impl FnOnce(&mut [Offer])) -> InstancesPage {
    sort(offers.as_mut_slice());
    InstancesPage {
        total: offers.len() as u64,
        instances: page_slice(&offers, page, page_size),
    }
}

impl CatalogService {
    pub fn new(snapshot: SnapshotCatalog, remote: Option<RemoteCatalog>) -> Self {
        CatalogService {
            snapshot,
            remote,
            forced_fallback: AtomicBool::new(false),
            page_size: crate::config::DEFAULT_PAGE_SIZE,
        }
    }

    /// Snapshot-only service; the remote path is permanently disabled.
    pub fn local_only(snapshot: SnapshotCatalog) -> Self {
        Self::new(snapshot, None)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let snapshot = SnapshotCatalog::load(settings.snapshot_path.as_deref());
        let remote = settings.api_base_url.as_deref().and_then(|base| {
            match RemoteCatalog::new(base, settings.request_timeout) {
                Ok(r) => Some(r),
                Err(e) => {
                    tracing::warn!(%e, "Remote catalog unavailable; running from bundled snapshot");
                    None
                }
            }
        });
        if remote.is_none() {
            tracing::info!("No remote catalog configured; serving bundled snapshot");
        }
        Self::new(snapshot, remote).with_page_size(settings.page_size)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = clamp_page_size(page_size);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn remote_configured(&self) -> bool {
        self.remote.is_some()
    }

    pub fn is_fallback_forced(&self) -> bool {
        self.forced_fallback.load(Ordering::SeqCst)
    }

    /// The remote handle, unless disabled or already latched into fallback.
    fn active_remote(&self) -> Option<&RemoteCatalog> {
        if self.is_fallback_forced() {
            return None;
        }
        self.remote.as_ref()
    }

    fn latch_fallback(&self, operation: &str, err: &CatalogError) {
        if !self.forced_fallback.swap(true, Ordering::SeqCst) {
            tracing::warn!(%err, operation, "Remote catalog failed; switching to bundled snapshot for the rest of the session");
        } else {
            tracing::debug!(%err, operation, "Remote call failed after fallback already latched");
        }
    }

    /// Distinct values for every filter widget.
    pub async fn filter_options(&self) -> Served<FilterOptions> {
        if let Some(remote) = self.active_remote() {
            match api::load_filter_options(remote).await {
                Ok(options) => return Served::remote(options),
                Err(e) => self.latch_fallback("filter_options", &e),
            }
        }
        tracing::debug!("Serving filter options from snapshot");
        Served::local(self.snapshot.filter_options().clone())
    }

    /// Filter options with the provider list normalized for the cloud picker.
    pub async fn display_filter_options(&self) -> Served<FilterOptions> {
        self.filter_options().await.map(|mut options| {
            options.providers = display_providers(&options.providers);
            options
        })
    }

    /// One page of offers matching `filter`. `page` is 1-based; 0 is read as 1.
    pub async fn instances(&self, filter: &InstanceFilter, page: usize) -> Served<InstancesPage> {
        let page = page.max(1);
        if let Some(remote) = self.active_remote() {
            match api::load_instances(remote, filter, page, self.page_size).await {
                Ok(result) => return Served::remote(result),
                Err(e) => self.latch_fallback("instances", &e),
            }
        }
        Served::local(self.local_instances(filter, page))
    }

    /// Filter, sort and paginate the snapshot. Never touches the network.
    pub fn local_instances(&self, filter: &InstanceFilter, page: usize) -> InstancesPage {
        let matched: Vec<Offer> = self
            .snapshot
            .offers()
            .iter()
            .filter(|o| matches_instance(o, filter))
            .cloned()
            .collect();
        tracing::debug!(matched = matched.len(), page, "Filtered snapshot offers");
        paginate(matched, page, self.page_size, |offers| sort_offers(offers, filter.sort))
    }

    /// Remote-only region lookup. Empty means unknown, not "no regions".
    pub async fn regions_for_provider(&self, provider: &str) -> Vec<String> {
        let Some(remote) = self.active_remote() else {
            return Vec::new();
        };
        match api::load_regions(remote, provider).await {
            Ok(regions) => regions,
            Err(e) => {
                self.latch_fallback("regions_for_provider", &e);
                Vec::new()
            }
        }
    }

    pub async fn providers(&self) -> Served<Vec<String>> {
        if let Some(remote) = self.active_remote() {
            match api::load_providers(remote).await {
                Ok(providers) => return Served::remote(providers),
                Err(e) => self.latch_fallback("providers", &e),
            }
        }
        Served::local(self.snapshot.filter_options().providers.clone())
    }

    pub async fn metrics(&self) -> Served<CatalogMetrics> {
        if let Some(remote) = self.active_remote() {
            match api::load_metrics(remote).await {
                Ok(metrics) => return Served::remote(metrics),
                Err(e) => self.latch_fallback("metrics", &e),
            }
        }
        Served::local(self.snapshot.metrics())
    }

    /// Probe the remote health endpoint, even after fallback has latched.
    pub async fn check_remote(&self) -> Result<HealthStatus, CatalogError> {
        let remote = self.remote.as_ref().ok_or(CatalogError::Disabled)?;
        api::load_health(remote).await.inspect_err(|e| self.latch_fallback("check_remote", e))
    }

    /// Bare-metal offers from the snapshot, cheapest monthly price first.
    ///
    /// The remote contract has no cost ceiling, so this is always answered locally.
    pub fn bare_metal(&self, filter: &BareMetalFilter, page: usize) -> InstancesPage {
        let matched: Vec<Offer> = self
            .snapshot
            .offers()
            .iter()
            .filter(|o| o.provider == BARE_METAL_PROVIDER && matches_bare_metal(o, filter))
            .cloned()
            .collect();
        paginate(matched, page.max(1), self.page_size, |offers| {
            sort_offers_by(offers, |o| o.monthly_cost, SortOrder::Asc)
        })
    }

    /// Locations for the bare-metal picker: remote if it knows any, else the snapshot's.
    pub async fn bare_metal_regions(&self) -> Vec<String> {
        let regions = self.regions_for_provider(BARE_METAL_PROVIDER).await;
        if regions.is_empty() {
            return self.snapshot.regions_for_provider(BARE_METAL_PROVIDER);
        }
        regions
    }
}
