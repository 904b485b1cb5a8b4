// Remote catalog endpoints
pub mod client;
pub mod filters;
pub mod instances;
pub mod regions;
pub mod metrics;

// Re-export commonly used functions
pub use client::{set_silent, RemoteCatalog};
pub use filters::{load_filter_options, load_providers};
pub use instances::{instance_query_params, load_instances};
pub use regions::load_regions;
pub use metrics::{load_health, load_metrics};
