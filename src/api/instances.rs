use crate::error::CatalogError;
use crate::models::{InstanceFilter, InstancesPage};
use crate::services::paging::page_offset;
use super::client::RemoteCatalog;

/// Translate a filter and 1-based page into the remote query parameters.
///
/// Thresholds are sent as decimal strings; sets become repeated keys.
pub fn instance_query_params(filter: &InstanceFilter, page: usize, page_size: usize) -> Vec<(String, String)> {
    let mut params = vec![
        ("offset".to_string(), page_offset(page, page_size).to_string()),
        ("limit".to_string(), page_size.to_string()),
        ("sort_by".to_string(), filter.sort.key.as_param().to_string()),
        ("sort_order".to_string(), filter.sort.order.as_param().to_string()),
    ];

    if !filter.instance_name.is_empty() {
        params.push(("instance_name".into(), filter.instance_name.clone()));
    }
    if let Some(v) = filter.min_vcpus {
        params.push(("min_vcpus".into(), v.to_string()));
    }
    if let Some(v) = filter.min_memory {
        params.push(("min_memory".into(), v.to_string()));
    }
    if let Some(v) = filter.min_storage {
        params.push(("min_storage".into(), v.to_string()));
    }
    for p in &filter.providers {
        params.push(("providers".into(), p.clone()));
    }
    for r in &filter.regions {
        params.push(("regions".into(), r.clone()));
    }
    for f in &filter.instance_families {
        params.push(("instance_families".into(), f.clone()));
    }
    for s in &filter.storage_types {
        params.push(("storage_types".into(), s.clone()));
    }
    params
}

/// Load one page of instances, ordered and counted by the remote service.
pub async fn load_instances(
    remote: &RemoteCatalog,
    filter: &InstanceFilter,
    page: usize,
    page_size: usize,
) -> Result<InstancesPage, CatalogError> {
    let params = instance_query_params(filter, page, page_size);
    remote.get_json("/instances", &params).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortKey, SortOrder, SortSpec};

    fn value<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
        params.iter().filter(|(k, _)| k == key).map(|(_, v)| v.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_sends_only_paging_and_sort() {
        let params = instance_query_params(&InstanceFilter::default(), 1, 25);
        assert_eq!(value(&params, "offset"), vec!["0"]);
        assert_eq!(value(&params, "limit"), vec!["25"]);
        assert_eq!(value(&params, "sort_by"), vec!["hourly_cost"]);
        assert_eq!(value(&params, "sort_order"), vec!["asc"]);
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_full_filter_translation() {
        let filter = InstanceFilter {
            instance_name: "m5".into(),
            min_vcpus: Some(4.0),
            min_memory: Some(7.5),
            min_storage: Some(0.0),
            providers: vec!["AWS".into(), "GCP".into()],
            regions: vec!["us-east-1".into()],
            instance_families: vec!["m5".into()],
            storage_types: vec!["EBS".into()],
            sort: SortSpec { key: SortKey::MemoryGb, order: SortOrder::Desc },
        };
        let params = instance_query_params(&filter, 3, 10);
        assert_eq!(value(&params, "offset"), vec!["20"]);
        assert_eq!(value(&params, "limit"), vec!["10"]);
        assert_eq!(value(&params, "instance_name"), vec!["m5"]);
        assert_eq!(value(&params, "min_vcpus"), vec!["4"]);
        assert_eq!(value(&params, "min_memory"), vec!["7.5"]);
        assert_eq!(value(&params, "min_storage"), vec!["0"]);
        assert_eq!(value(&params, "providers"), vec!["AWS", "GCP"]);
        assert_eq!(value(&params, "regions"), vec!["us-east-1"]);
        assert_eq!(value(&params, "instance_families"), vec!["m5"]);
        assert_eq!(value(&params, "storage_types"), vec!["EBS"]);
        assert_eq!(value(&params, "sort_by"), vec!["memory_gb"]);
        assert_eq!(value(&params, "sort_order"), vec!["desc"]);
    }
}
