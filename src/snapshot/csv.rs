use crate::models::{Offer, DEFAULT_CURRENCY};

/// Split one CSV line into fields.
///
/// A `"` toggles quoted mode, `""` inside quotes is a literal quote and a
/// comma only separates fields outside quotes. An unterminated quote swallows
/// the rest of the line into the open field instead of failing.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// Non-blank lines of `text`, split on `\n` or `\r\n`.
fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty())
}

fn parse_number(raw: Option<&String>) -> Option<f64> {
    raw.map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

fn optional_text(raw: Option<&String>) -> Option<String> {
    raw.filter(|v| !v.trim().is_empty()).cloned()
}

/// Map positional fields onto an offer. Missing trailing columns take defaults.
pub fn offer_from_fields(id: u64, fields: &[String], now: &str) -> Offer {
    let text = |i: usize| fields.get(i).cloned().unwrap_or_default();

    Offer {
        id,
        instance_name: text(0),
        provider: text(1),
        region: text(2),
        vcpus: parse_number(fields.get(3)),
        memory_gb: parse_number(fields.get(4)),
        storage_gb: parse_number(fields.get(5)),
        storage_type: optional_text(fields.get(6)),
        hourly_cost: parse_number(fields.get(7)),
        monthly_cost: parse_number(fields.get(8)),
        spot_price: parse_number(fields.get(9)),
        currency: optional_text(fields.get(10))
            .map(|c| c.trim().to_string())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        instance_family: optional_text(fields.get(11)),
        network_performance: optional_text(fields.get(12)),
        last_updated: optional_text(fields.get(13)).unwrap_or_else(|| now.to_string()),
    }
}

/// Decode a snapshot with a header row into offers, ids assigned 1-based in source order.
pub fn decode_offers(text: &str) -> Vec<Offer> {
    let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    decode_offers_at(text, &now)
}

/// Same as [`decode_offers`] with an explicit timestamp for rows lacking `last_updated`.
pub fn decode_offers_at(text: &str, now: &str) -> Vec<Offer> {
    content_lines(text)
        .skip(1)
        .enumerate()
        .map(|(i, line)| offer_from_fields(i as u64 + 1, &split_line(line), now))
        .collect()
}
