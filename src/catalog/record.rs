use serde::Serialize;

use super::duration::estimate_duration;
use super::resolve::{parse_price, resolve_category, resolve_price, resolve_subcategory, round2};
use super::text::{normalize, slugify};
use crate::source::SourceRow;

pub const ID_TAG: &str = "svc";
pub const ID_MAX_CHARS: usize = 60;
const THUMB_BASE: &str = "https://picsum.photos/seed";

/// Field order here is the field order in the written document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub duration_min: u32,
    pub base_price: f64,
    pub thumb_url: String,
}

pub fn build_title(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{} - {}", prefix, name)
    }
}

/// Not unique: two rows folding to the same category and title share an id,
/// and truncation can merge long titles.
pub fn build_id(category: &str, title: &str) -> String {
    format!("{}_{}_{}", ID_TAG, slugify(category), slugify(title))
        .chars()
        .take(ID_MAX_CHARS)
        .collect()
}

pub fn build_thumb_url(title: &str) -> String {
    format!("{}/{}/400/280", THUMB_BASE, slugify(title))
}

/// Resolve every field of one source row. `None` only for rows with no service name.
pub fn synthesize(row: &SourceRow) -> Option<ServiceRecord> {
    if !row.has_service() {
        return None;
    }
    let raw_category = row.category.as_deref().unwrap_or_default();
    let raw_subcategory = row.subcategory.as_deref().unwrap_or_default();

    let name = normalize(row.service.as_deref().unwrap_or_default());
    let category = resolve_category(&slugify(raw_category), raw_category);
    let sub = resolve_subcategory(&slugify(raw_subcategory), raw_subcategory);
    let title = build_title(&sub.prefix, &name);
    let price = resolve_price(
        parse_price(row.price_recommended_mad.as_deref()),
        parse_price(row.price_avg_min_mad.as_deref()),
        parse_price(row.price_avg_max_mad.as_deref()),
    );

    Some(ServiceRecord {
        id: build_id(&category, &title),
        duration_min: estimate_duration(&title),
        base_price: round2(price),
        thumb_url: build_thumb_url(&title),
        title,
        category,
        subcategory: sub.name,
    })
}
