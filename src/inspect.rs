use itertools::Itertools;

use crate::catalog::{tables, text::slugify_plain};
use crate::source::SourceRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugEntry {
    pub slug: String,
    pub mapped: bool,
}

/// Distinct subcategory slugs in the export, sorted, each flagged with whether
/// the subcategory table already knows it. Blank cells show up as "".
pub fn subcategory_slugs(rows: &[SourceRow]) -> Vec<SlugEntry> {
    rows.iter()
        .map(|row| slugify_plain(row.subcategory.as_deref().unwrap_or_default()))
        .unique()
        .sorted()
        .map(|slug| SlugEntry {
            mapped: tables::subcategory(&slug).is_some(),
            slug,
        })
        .collect()
}

pub fn print_report(entries: &[SlugEntry]) {
    let unmapped = entries.iter().filter(|e| !e.mapped).count();
    for entry in entries {
        let mark = if entry.mapped { "ok" } else { "--" };
        let shown = if entry.slug.is_empty() { "(blank)" } else { entry.slug.as_str() };
        println!("  [{}] {}", mark, shown);
    }
    println!(
        "\n{} distinct subcategory slugs, {} without a table entry",
        entries.len(),
        unmapped
    );
}
