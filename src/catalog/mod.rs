pub mod assemble;
pub mod duration;
pub mod record;
pub mod resolve;
pub mod tables;
pub mod text;

use tracing::debug;

use crate::source::SourceRow;
pub use assemble::Catalog;
use record::{synthesize, ServiceRecord};

const CHUNK_SIZE: usize = 500;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub rows_read: usize,
    pub rows_discarded: usize,
    pub records: usize,
    pub duplicate_ids: usize,
}

#[cfg(feature = "rayon")]
fn synthesize_chunk(rows: &[SourceRow]) -> Vec<Option<ServiceRecord>> {
    use rayon::prelude::*;
    rows.par_iter().map(synthesize).collect()
}

#[cfg(not(feature = "rayon"))]
fn synthesize_chunk(rows: &[SourceRow]) -> Vec<Option<ServiceRecord>> {
    rows.iter().map(synthesize).collect()
}

/// Rows → records → grouped, sorted catalog. Records are synthesized per chunk
/// (in parallel with the `rayon` feature) and folded in source order, so the
/// result does not depend on scheduling. `on_progress` gets the row count of
/// each finished chunk.
pub fn build_catalog(
    rows: &[SourceRow],
    mut on_progress: impl FnMut(usize),
) -> (Catalog, BuildReport) {
    let mut catalog = Catalog::new();
    let mut report = BuildReport {
        rows_read: rows.len(),
        ..Default::default()
    };

    for chunk in rows.chunks(CHUNK_SIZE) {
        for record in synthesize_chunk(chunk) {
            match record {
                Some(record) => catalog.insert(record),
                None => report.rows_discarded += 1,
            }
        }
        on_progress(chunk.len());
    }
    catalog.finalize_sort();

    report.records = catalog.record_count();
    report.duplicate_ids = catalog.duplicate_ids();
    debug!(?report, "catalog assembled");
    (catalog, report)
}

// ── Tests ──
