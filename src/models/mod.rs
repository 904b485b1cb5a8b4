pub mod offer;
pub mod filter_options;
pub mod sort_spec;
pub mod instance_filter;
pub mod bare_metal_filter;
pub mod instances_page;
pub mod catalog_metrics;
pub mod served;

pub use offer::{Offer, DEFAULT_CURRENCY};
pub use filter_options::FilterOptions;
pub use sort_spec::{SortKey, SortOrder, SortSpec};
pub use instance_filter::InstanceFilter;
pub use bare_metal_filter::BareMetalFilter;
pub use instances_page::InstancesPage;
pub use catalog_metrics::{CatalogMetrics, HealthStatus};
pub use served::{DataSource, Served};
