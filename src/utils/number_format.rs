/// Placeholder for a dimension the offer does not report.
pub const MISSING: &str = "—";

/// Render a number without trailing zeros (`4`, `7.5`), or a dash when absent.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{:.0}", v),
        Some(v) => {
            let s = format!("{:.4}", v);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        None => MISSING.to_string(),
    }
}

/// Render a price with its currency code, or a dash when unpriced.
pub fn format_cost(value: Option<f64>, currency: &str) -> String {
    match value {
        Some(v) => format!("{} {}", format_number(Some(v)), currency),
        None => MISSING.to_string(),
    }
}
