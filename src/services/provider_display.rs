/// Provider label reserved for the separate bare-metal flow.
pub const BARE_METAL_PROVIDER: &str = "Hetzner Bare Metal";

/// Cloud variant of the same vendor; always offered in the general picker.
pub const CLOUD_VARIANT_PROVIDER: &str = "Hetzner Cloud";

/// Normalize a provider list for the general cloud picker.
///
/// Drops the bare-metal label, adds the cloud variant if the dataset has not
/// reported it yet, then sorts and dedups. The underlying records are untouched.
pub fn display_providers(providers: &[String]) -> Vec<String> {
    let mut out: Vec<String> = providers
        .iter()
        .filter(|p| p.as_str() != BARE_METAL_PROVIDER)
        .cloned()
        .collect();
    if !out.iter().any(|p| p == CLOUD_VARIANT_PROVIDER) {
        out.push(CLOUD_VARIANT_PROVIDER.to_string());
    }
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_swaps_bare_metal_for_cloud_variant() {
        let out = display_providers(&list(&["AWS", "Hetzner Bare Metal", "Vultr"]));
        assert_eq!(out, list(&["AWS", "Hetzner Cloud", "Vultr"]));
    }

    #[test]
    fn test_cloud_variant_appears_once() {
        let out = display_providers(&list(&["Hetzner Cloud", "AWS", "Hetzner Cloud"]));
        assert_eq!(out, list(&["AWS", "Hetzner Cloud"]));
    }

    #[test]
    fn test_empty_list_still_offers_cloud_variant() {
        assert_eq!(display_providers(&[]), list(&["Hetzner Cloud"]));
    }
}
