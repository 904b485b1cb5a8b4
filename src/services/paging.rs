use std::cmp::Ordering;

use crate::models::{Offer, SortOrder, SortSpec};

/// Compare two optional numbers; missing values sort last in either direction.
pub fn compare_nullable(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            let ord = x.total_cmp(&y);
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn tie_break(a: &Offer, b: &Offer) -> Ordering {
    a.instance_name.cmp(&b.instance_name).then(a.id.cmp(&b.id))
}

/// Order offers by the given key, then by name, then by id.
pub fn sort_offers_by<F>(offers: &mut [Offer], key: F, order: SortOrder)
where
    F: Fn(&Offer) -> Option<f64>,
{
    offers.sort_by(|a, b| compare_nullable(key(a), key(b), order).then_with(|| tie_break(a, b)));
}

pub fn sort_offers(offers: &mut [Offer], spec: SortSpec) {
    sort_offers_by(offers, |o| spec.key.value(o), spec.order);
}

/// Zero-based offset of a 1-based page.
pub fn page_offset(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// The `[(page-1)*size, page*size)` slice. Page 0 and pages past the end are empty.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    items
        .iter()
        .skip(page_offset(page, page_size))
        .take(page_size)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortKey;

    fn offer(id: u64, name: &str, hourly: Option<f64>) -> Offer {
        Offer {
            id,
            instance_name: name.to_string(),
            provider: "AWS".into(),
            region: "us-east-1".into(),
            vcpus: Some(id as f64),
            memory_gb: None,
            storage_gb: None,
            storage_type: None,
            hourly_cost: hourly,
            monthly_cost: None,
            spot_price: None,
            currency: "USD".into(),
            instance_family: None,
            network_performance: None,
            last_updated: String::new(),
        }
    }

    fn names(offers: &[Offer]) -> Vec<&str> {
        offers.iter().map(|o| o.instance_name.as_str()).collect()
    }

    #[test]
    fn test_default_sort_puts_unpriced_last() {
        let mut offers = vec![offer(1, "b", None), offer(2, "a", Some(0.05)), offer(3, "c", Some(0.02))];
        sort_offers(&mut offers, SortSpec::default());
        assert_eq!(names(&offers), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_unpriced_sorts_after_cheapest() {
        let mut offers = vec![offer(1, "free?", None), offer(2, "cheap", Some(0.01))];
        sort_offers(&mut offers, SortSpec::default());
        assert_eq!(names(&offers), vec!["cheap", "free?"]);
    }

    #[test]
    fn test_ties_broken_by_name() {
        let mut offers = vec![offer(1, "zeta", Some(0.1)), offer(2, "alpha", Some(0.1)), offer(3, "mid", Some(0.1))];
        sort_offers(&mut offers, SortSpec::default());
        assert_eq!(names(&offers), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_descending_keeps_missing_last() {
        let mut offers = vec![offer(1, "a", None), offer(2, "b", Some(0.1)), offer(3, "c", Some(0.3))];
        sort_offers(&mut offers, SortSpec { key: SortKey::HourlyCost, order: SortOrder::Desc });
        assert_eq!(names(&offers), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_by_vcpus() {
        let mut offers = vec![offer(3, "x", None), offer(1, "y", None), offer(2, "z", None)];
        sort_offers(&mut offers, SortSpec { key: SortKey::Vcpus, order: SortOrder::Asc });
        assert_eq!(names(&offers), vec!["y", "z", "x"]);
    }

    #[test]
    fn test_page_slice_bounds() {
        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(page_slice(&items, 1, 2), vec![1, 2]);
        assert_eq!(page_slice(&items, 3, 2), vec![5]);
        assert!(page_slice(&items, 4, 2).is_empty());
        assert!(page_slice(&items, 0, 2).is_empty());
        assert!(page_slice(&items, 1, 0).is_empty());
    }

    #[test]
    fn test_pages_cover_everything_once() {
        let items: Vec<u32> = (1..=23).collect();
        let size = 5;
        let pages = items.len().div_ceil(size);
        let joined: Vec<u32> = (1..=pages).flat_map(|p| page_slice(&items, p, size)).collect();
        assert_eq!(joined, items);
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 25), 0);
        assert_eq!(page_offset(3, 25), 50);
        assert_eq!(page_offset(0, 25), 0);
    }
}
