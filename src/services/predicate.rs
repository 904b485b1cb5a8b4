use crate::models::{BareMetalFilter, InstanceFilter, Offer};

/// `value >= threshold`, missing values counted as zero. No threshold always passes.
fn at_least(value: Option<f64>, threshold: Option<f64>) -> bool {
    match threshold {
        Some(min) => value.unwrap_or(0.0) >= min,
        None => true,
    }
}

fn member_of(allowed: &[String], value: &str) -> bool {
    allowed.is_empty() || allowed.iter().any(|a| a == value)
}

fn optional_member_of(allowed: &[String], value: Option<&str>) -> bool {
    allowed.is_empty() || value.is_some_and(|v| allowed.iter().any(|a| a == v))
}

/// Whether an offer satisfies every active clause of an instance filter.
pub fn matches_instance(offer: &Offer, filter: &InstanceFilter) -> bool {
    if !filter.instance_name.is_empty()
        && !offer
            .instance_name
            .to_lowercase()
            .contains(&filter.instance_name.to_lowercase())
    {
        return false;
    }

    at_least(offer.vcpus, filter.min_vcpus)
        && at_least(offer.memory_gb, filter.min_memory)
        && at_least(offer.storage_gb, filter.min_storage)
        && member_of(&filter.providers, &offer.provider)
        && member_of(&filter.regions, &offer.region)
        && optional_member_of(&filter.instance_families, offer.instance_family.as_deref())
        && optional_member_of(&filter.storage_types, offer.storage_type.as_deref())
}

/// Bare-metal variant. A cost ceiling requires a known monthly cost.
pub fn matches_bare_metal(offer: &Offer, filter: &BareMetalFilter) -> bool {
    let under_ceiling = match filter.max_monthly_cost {
        Some(max) => offer.monthly_cost.is_some_and(|cost| cost <= max),
        None => true,
    };

    at_least(offer.vcpus, filter.min_cores)
        && at_least(offer.memory_gb, filter.min_memory)
        && at_least(offer.storage_gb, filter.min_storage)
        && under_ceiling
        && (filter.region.is_empty() || offer.region == filter.region)
}
