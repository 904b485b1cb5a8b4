use crate::error::CatalogError;
use super::client::RemoteCatalog;

/// Load the regions a single provider offers.
pub async fn load_regions(remote: &RemoteCatalog, provider: &str) -> Result<Vec<String>, CatalogError> {
    let params = vec![("provider".to_string(), provider.to_string())];
    remote.get_json("/regions", &params).await
}
