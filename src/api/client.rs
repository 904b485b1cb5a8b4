use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use yansi::Paint;

use crate::error::CatalogError;
use crate::utils::build_query_string;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

// Request echo goes to stderr so `--json` output stays clean on stdout.
fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        eprintln!("{}", msg);
    }
}

/// HTTP handle for the remote catalog service.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl RemoteCatalog {
    /// Build a client whose every request is abandoned after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("vmfind/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!(%e, "Failed to create HTTP client");
                CatalogError::Disabled
            })?;
        Ok(RemoteCatalog {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn classify(&self, e: reqwest::Error) -> CatalogError {
        if e.is_timeout() {
            CatalogError::Timeout(self.timeout.as_millis())
        } else {
            CatalogError::Network(e.to_string())
        }
    }

    /// GET `endpoint` with repeated-key query params and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<T, CatalogError> {
        // --- Curl Logging ---
        let mut url_for_log = format!("{}{}", self.base_url, endpoint);
        if !params.is_empty() {
            url_for_log = format!("{}?{}", url_for_log, build_query_string(params));
        }
        log_output(format!(
            "Request:\n{} {} '{}'",
            Paint::new("curl").fg(yansi::Color::Green).bold(),
            format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()),
            Paint::new(&url_for_log).fg(yansi::Color::Cyan)
        ));
        // --------------------

        let url = format!("{}{}", self.base_url, endpoint);
        let mut req = self.client.get(&url);
        if !params.is_empty() {
            req = req.query(params);
        }

        let resp = req.send().await.map_err(|e| self.classify(e))?;
        let status = resp.status();
        if !status.is_success() {
            log_output(format!("Response:\n{}", Paint::new(format!("HTTP {}", status)).red()));
            return Err(CatalogError::Status(status.as_u16()));
        }
        let body = resp.bytes().await.map_err(|e| self.classify(e))?;

        let preview = String::from_utf8_lossy(&body).to_string();
        // Grayed out color (dimmed/dark gray)
        log_output(format!("Response:\n{}", Paint::new(preview).rgb(100, 100, 100)));

        serde_json::from_slice(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}
