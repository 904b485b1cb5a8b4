use crate::error::CatalogError;
use crate::models::FilterOptions;
use super::client::RemoteCatalog;

/// Load the distinct values for every filter dropdown.
pub async fn load_filter_options(remote: &RemoteCatalog) -> Result<FilterOptions, CatalogError> {
    remote.get_json("/filters/options", &[]).await
}

/// Load the providers that currently have data.
pub async fn load_providers(remote: &RemoteCatalog) -> Result<Vec<String>, CatalogError> {
    remote.get_json("/providers", &[]).await
}
