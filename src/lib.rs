//! Browse and filter a multi-provider catalog of VM and bare-metal offers.
//!
//! Requests go to a remote catalog service when one is configured. The first
//! remote failure switches the session to the bundled CSV snapshot, which is
//! filtered, sorted and paginated locally with the same semantics.
//!
//! ```no_run
//! use vmfind::config::Settings;
//! use vmfind::models::InstanceFilter;
//! use vmfind::services::CatalogService;
//!
//! # async fn example() {
//! let service = CatalogService::from_settings(&Settings::from_env());
//! let filter = InstanceFilter { min_vcpus: Some(4.0), ..Default::default() };
//! let page = service.instances(&filter, 1).await;
//! println!("{} offers from the {}", page.data.total, page.source);
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod snapshot;
pub mod services;
pub mod api;
pub mod utils;

pub use error::CatalogError;
