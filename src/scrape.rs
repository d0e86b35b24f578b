//! Structural HTML extraction.
//!
//! Scraped pages are read as a sequence of table rows (`tbody tr`). A record
//! type describes the cells it needs as a fixed [`CellGroup`] layout and is
//! built from the texts those selectors match inside each row. When the
//! provider changes its markup, only the layouts need to change.
//!
//! # Example
//!
//! ```rust
//! use cmc_sdk::scrape::{extract_table, CellGroup, RowCells, TableRecord};
//!
//! struct Pair(String, String);
//!
//! impl TableRecord for Pair {
//!     const LAYOUT: &'static [CellGroup] = &[CellGroup::new("td", 2)];
//!     fn from_cells(cells: &RowCells) -> Self {
//!         Pair(cells.get(0, 0).to_string(), cells.get(0, 1).to_string())
//!     }
//! }
//!
//! let html = "<table><tbody><tr><td>a</td><td>b</td></tr></tbody></table>";
//! let rows: Vec<Pair> = extract_table(html).unwrap();
//! assert_eq!(rows[0].1, "b");
//! ```

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::error::{CmcError, Result};

/// Selector for the rows every scraped table is read from.
pub const ROW_SELECTOR: &str = "tbody tr";

// ---------------------------------------------------------------------------
// CellGroup / RowCells
// ---------------------------------------------------------------------------

/// A run of `count` cells matched by `selector` inside a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGroup {
    pub selector: &'static str,
    pub count: usize,
}

impl CellGroup {
    pub const fn new(selector: &'static str, count: usize) -> Self {
        Self { selector, count }
    }
}

/// Cell texts of one row, grouped by layout entry.
///
/// Each group holds exactly the `count` texts its [`CellGroup`] asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowCells {
    groups: Vec<Vec<String>>,
}

impl RowCells {
    pub fn new(groups: Vec<Vec<String>>) -> Self {
        Self { groups }
    }

    /// Text of cell `index` in layout group `group`, or `""` if out of range.
    pub fn get(&self, group: usize, index: usize) -> &str {
        self.groups
            .get(group)
            .and_then(|g| g.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// TableRecord
// ---------------------------------------------------------------------------

/// A record that can be built from one scraped table row.
pub trait TableRecord: Sized {
    /// Cell groups read from every row, in order.
    const LAYOUT: &'static [CellGroup];

    fn from_cells(cells: &RowCells) -> Self;
}

/// Extract one `T` per complete table row of `html`, in document order.
///
/// Rows with fewer cells than `T::LAYOUT` requires are skipped with a warning;
/// surplus cells are ignored. Fails with [`CmcError::Extraction`] when no row
/// yields a record, which covers both a missing table and one whose rows all
/// changed shape.
pub fn extract_table<T: TableRecord>(html: &str) -> Result<Vec<T>> {
    let row_selector = parse_selector(ROW_SELECTOR)?;
    let groups = T::LAYOUT
        .iter()
        .map(|g| parse_selector(g.selector).map(|sel| (g, sel)))
        .collect::<Result<Vec<_>>>()?;

    let doc = Html::parse_document(html);
    let mut records = Vec::new();
    let mut skipped = 0usize;

    'rows: for (i, row) in doc.select(&row_selector).enumerate() {
        let mut cells = Vec::with_capacity(groups.len());
        for (group, selector) in &groups {
            let texts: Vec<String> = row.select(selector).take(group.count).map(cell_text).collect();
            if texts.len() < group.count {
                warn!(
                    row = i,
                    selector = group.selector,
                    expected = group.count,
                    found = texts.len(),
                    "skipping table row with missing cells"
                );
                skipped += 1;
                continue 'rows;
            }
            cells.push(texts);
        }
        records.push(T::from_cells(&RowCells::new(cells)));
    }

    if records.is_empty() {
        return Err(CmcError::Extraction(format!(
            "no usable table rows matching `{}` ({} skipped)",
            ROW_SELECTOR, skipped
        )));
    }

    Ok(records)
}

/// Remove thousands separators: `"1,234.56"` -> `"1234.56"`.
pub fn strip_separators(s: &str) -> String {
    s.replace(',', "")
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| CmcError::Extraction(format!("invalid selector `{}`: {}", selector, e)))
}

/// Concatenated text of an element and its descendants, trimmed.
fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
