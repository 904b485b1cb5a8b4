use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_CURRENCY: &str = "USD";

/// One priced instance or server configuration.
///
/// Numeric fields are `None` when the source omits the dimension. A missing
/// cost is never the same thing as a cost of zero.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Offer {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub instance_name: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub vcpus: Option<f64>,
    #[serde(default)]
    pub memory_gb: Option<f64>,
    #[serde(default)]
    pub storage_gb: Option<f64>,
    #[serde(default)]
    pub storage_type: Option<String>,
    #[serde(default)]
    pub hourly_cost: Option<f64>,
    #[serde(default)]
    pub monthly_cost: Option<f64>,
    #[serde(default)]
    pub spot_price: Option<f64>,
    #[serde(default = "default_currency", deserialize_with = "currency_or_default")]
    pub currency: String,
    #[serde(default)]
    pub instance_family: Option<String>,
    #[serde(default)]
    pub network_performance: Option<String>,
    #[serde(default)]
    pub last_updated: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

// The remote service may send `"currency": null` for rows it never priced.
fn currency_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(default_currency))
}
