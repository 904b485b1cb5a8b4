use crate::error::CatalogError;
use crate::models::{CatalogMetrics, HealthStatus};
use super::client::RemoteCatalog;

pub async fn load_metrics(remote: &RemoteCatalog) -> Result<CatalogMetrics, CatalogError> {
    remote.get_json("/metrics", &[]).await
}

pub async fn load_health(remote: &RemoteCatalog) -> Result<HealthStatus, CatalogError> {
    remote.get_json("/health", &[]).await
}
