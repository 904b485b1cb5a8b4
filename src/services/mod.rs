pub mod predicate;
pub mod paging;
pub mod provider_display;
pub mod query_guard;
pub mod catalog_service;

// Re-export commonly used functions
pub use predicate::{matches_bare_metal, matches_instance};
pub use paging::{page_slice, sort_offers};
pub use provider_display::{display_providers, BARE_METAL_PROVIDER, CLOUD_VARIANT_PROVIDER};
pub use query_guard::{QueryGuard, QueryTicket};
pub use catalog_service::CatalogService;
