use super::tables;
use super::text::normalize;

pub const DEFAULT_CATEGORY: &str = "General";
pub const FALLBACK_SUBCATEGORY: &str = "Other Services";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcategory {
    pub prefix: String,
    pub name: String,
}

pub fn resolve_category(slug: &str, raw: &str) -> String {
    if let Some(hit) = tables::category(slug) {
        return hit.to_string();
    }
    non_empty(normalize(raw)).unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

/// Table hit, else the row's own text under the "Other Services" prefix.
pub fn resolve_subcategory(slug: &str, raw: &str) -> Subcategory {
    if let Some((prefix, name)) = tables::subcategory(slug) {
        return Subcategory {
            prefix: prefix.to_string(),
            name: name.to_string(),
        };
    }
    Subcategory {
        prefix: FALLBACK_SUBCATEGORY.to_string(),
        name: non_empty(normalize(raw)).unwrap_or_else(|| FALLBACK_SUBCATEGORY.to_string()),
    }
}

/// Lenient decimal parse: comma decimals, spaces as thousands separators,
/// `_` between digits as grouping. Blank, unparseable and non-finite input
/// all read as absent.
pub fn parse_price(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: String = trimmed.replace(',', ".").replace(' ', "");
    strip_digit_grouping(&cleaned)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// `1_200` → `1200`. An underscore anywhere but between two digits rejects the input.
fn strip_digit_grouping(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let grouped_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    grouped_ok.then(|| s.replace('_', ""))
}

pub fn resolve_price(recommended: Option<f64>, min: Option<f64>, max: Option<f64>) -> f64 {
    match (recommended, min, max) {
        (Some(rec), _, _) if rec > 0.0 => rec,
        (_, Some(low), Some(high)) => round2((low + high) / 2.0),
        (_, Some(low), None) => low,
        (_, None, Some(high)) => high,
        _ => 0.0,
    }
}

/// Two-decimal rounding of the exact binary value. Formatting is
/// correctly rounded; scaling by 100 first is not (`84.975 * 100.0 == 8497.5`).
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
