use urlencoding::encode;

/// Build a query string from key-value pairs, keeping repeated keys in order.
pub fn build_query_string(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_keys_and_escaping() {
        let pairs = vec![
            ("providers".to_string(), "Hetzner Cloud".to_string()),
            ("providers".to_string(), "AWS".to_string()),
            ("instance_name".to_string(), "a&b".to_string()),
        ];
        assert_eq!(
            build_query_string(&pairs),
            "providers=Hetzner%20Cloud&providers=AWS&instance_name=a%26b"
        );
    }
}
