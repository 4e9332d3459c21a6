use std::path::Path;

use mujam_core::{KeywordStore, NewEntry, Normalizer, StoreError};

use crate::csv;
use crate::error::ExportError;

/// Counts reported after a bulk import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Import rows with insert-if-absent semantics: keywords already present are
/// silently skipped, never overwritten. Each keyword is normalized before
/// the insert. Rows missing a meaning or example are skipped as well, since
/// the creation-time contract holds for imported entries too.
pub fn import_entries<N, S>(
    data: &str,
    normalizer: &N,
    store: &mut S,
) -> Result<ImportSummary, ExportError>
where
    N: Normalizer + ?Sized,
    S: KeywordStore + ?Sized,
{
    let mut summary = ImportSummary::default();

    for row in csv::parse(data)? {
        let keyword = normalizer.normalize(row.keyword.trim());
        if keyword.is_empty() || row.meaning.trim().is_empty() || row.example.trim().is_empty() {
            tracing::warn!(keyword = %row.keyword, "skipping incomplete import row");
            summary.skipped += 1;
            continue;
        }

        match store.insert_if_absent(NewEntry {
            keyword,
            meaning: row.meaning.trim().to_string(),
            example: row.example.trim().to_string(),
            note: None,
        }) {
            Ok(_) => summary.imported += 1,
            Err(StoreError::DuplicateKeyword(_)) => summary.skipped += 1,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(summary)
}

/// Startup-time bulk import. A missing file is a no-op, not an error.
pub fn import_file<N, S>(
    path: &Path,
    normalizer: &N,
    store: &mut S,
) -> Result<Option<ImportSummary>, ExportError>
where
    N: Normalizer + ?Sized,
    S: KeywordStore + ?Sized,
{
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no bulk import artifact, skipping");
        return Ok(None);
    }

    let data = std::fs::read_to_string(path)?;
    import_entries(&data, normalizer, store).map(Some)
}
