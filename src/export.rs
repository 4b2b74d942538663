//! Flattening annotation stores into exportable tables.
//!
//! Tables serialize to CSV (UTF-8 with a BOM, so CJK text survives
//! common spreadsheet tools) and to pretty-printed JSON arrays of
//! records. Exporting an empty table is an error: the caller suppresses
//! the export controls instead of producing an empty file.

use crate::annotate::{SentenceStore, WordStore};
use crate::label::UNLABELED;
use crate::{Error, Result};
use serde::Serialize;

/// UTF-8 byte-order mark prefixed to every CSV export.
pub const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Serialization target for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// UTF-8 CSV with BOM.
    Csv,
    /// Pretty-printed JSON array of records.
    Json,
}

impl ExportFormat {
    /// MIME type delivered with the download.
    #[must_use]
    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    /// File extension without the dot.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Fixed download filename for a table base name.
    #[must_use]
    pub fn filename(&self, base: &str) -> String {
        format!("{base}.{}", self.extension())
    }
}

/// Row scope for word-mode export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordScope {
    /// Every materialized entry, labeled or not.
    All,
    /// Only entries whose label differs from the sentinel.
    LabeledOnly,
}

/// One exported word-annotation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRow {
    /// 1-based sentence id.
    pub sentence_id: usize,
    /// Token surface form.
    pub word: String,
    /// Assigned label, or the sentinel.
    pub label: String,
}

/// One exported sentence-classification row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceRow {
    /// 1-based sentence id.
    pub sentence_id: usize,
    /// Sentence text.
    pub text: String,
    /// Assigned category.
    pub category: String,
}

/// Entry counts reported alongside an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryStats {
    /// Total materialized entries.
    pub total: usize,
    /// Entries carrying a real category.
    pub labeled: usize,
}

impl EntryStats {
    /// Labeled share in percent. `None` when there are no entries at
    /// all; the caller must not divide by zero on its own.
    #[must_use]
    pub fn labeled_percent(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.labeled as f64 / self.total as f64 * 100.0)
        }
    }

    /// Percentage formatted to one decimal place, e.g. `"30.0%"`.
    #[must_use]
    pub fn percent_display(&self) -> Option<String> {
        self.labeled_percent().map(|p| format!("{p:.1}%"))
    }
}

/// Flatten the word store under the given scope, key order.
#[must_use]
pub fn word_table(store: &WordStore, scope: WordScope) -> Vec<WordRow> {
    store
        .iter()
        .filter(|e| match scope {
            WordScope::All => true,
            WordScope::LabeledOnly => e.label != UNLABELED,
        })
        .map(|e| WordRow {
            sentence_id: e.sentence_index + 1,
            word: e.token.clone(),
            label: e.label.clone(),
        })
        .collect()
}

/// Entry counts for the word store.
#[must_use]
pub fn word_stats(store: &WordStore) -> EntryStats {
    EntryStats {
        total: store.len(),
        labeled: store.labeled_count(),
    }
}

/// Flatten the sentence store, sentence order.
#[must_use]
pub fn sentence_table(store: &SentenceStore) -> Vec<SentenceRow> {
    store
        .iter()
        .map(|e| SentenceRow {
            sentence_id: e.sentence_index + 1,
            text: e.text.clone(),
            category: e.category.clone(),
        })
        .collect()
}

/// Serialize rows as CSV bytes, BOM first, header row included.
///
/// Empty input is an [`Error::Export`].
pub fn to_csv_bytes<S: Serialize>(rows: &[S]) -> Result<Vec<u8>> {
    require_rows(rows)?;
    let mut buf = Vec::from(UTF8_BOM);
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| Error::export(e.to_string()))?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

/// Serialize rows as a pretty-printed JSON array.
///
/// Empty input is an [`Error::Export`].
pub fn to_json_bytes<S: Serialize>(rows: &[S]) -> Result<Vec<u8>> {
    require_rows(rows)?;
    serde_json::to_vec_pretty(rows).map_err(|e| Error::export(e.to_string()))
}

/// Serialize rows in the requested format.
pub fn to_bytes<S: Serialize>(rows: &[S], format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Csv => to_csv_bytes(rows),
        ExportFormat::Json => to_json_bytes(rows),
    }
}

fn require_rows<S>(rows: &[S]) -> Result<()> {
    if rows.is_empty() {
        return Err(Error::export("nothing to export"));
    }
    Ok(())
}
