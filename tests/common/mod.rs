/// Test helpers: a local stand-in for the remote catalog service
use axum::Router;
use std::time::Duration;

use vmfind::api::RemoteCatalog;
use vmfind::services::CatalogService;
use vmfind::snapshot::SnapshotCatalog;

pub const HEADER: &str = "instance_name,provider,region,vcpus,memory_gb,storage_gb,storage_type,hourly_cost,monthly_cost,spot_price,currency,instance_family,network_performance,last_updated";

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn small_snapshot() -> SnapshotCatalog {
    SnapshotCatalog::from_csv(&format!(
        "{HEADER}\n\
         b,AWS,us-east-1,2,4,,EBS,,,,,t3,,2024-01-01\n\
         a,AWS,us-east-1,4,16,,EBS,0.05,36.5,,,m5,,2024-01-02\n\
         c,GCP,us-central1,8,32,,pd-ssd,0.02,14.6,,,e2,,2024-01-03\n\
         AX41,Hetzner Bare Metal,FSN1,6,64,1024,NVMe SSD,,44,,EUR,AX,,2024-01-04\n"
    ))
}

pub fn remote_service(base_url: &str, timeout: Duration) -> CatalogService {
    vmfind::api::set_silent(true);
    let remote = RemoteCatalog::new(base_url, timeout).unwrap();
    CatalogService::new(small_snapshot(), Some(remote))
}
