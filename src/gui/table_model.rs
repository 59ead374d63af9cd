// src/gui/table_model.rs
//! TableData: the projected, optionally sorted view the results table draws.
//!
//! - Built from the filter engine's kept indices, so the table never holds
//!   more than the visible rows.
//! - Sorting is display-only; the engine's output order is untouched.
//! - `row_ix[i]` maps display row `i` back to its dataset position, used to
//!   resolve clicks to a full record.

use std::cmp::Ordering;

use crate::bars::{Dataset, projection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub col: usize,
    pub ascending: bool,
}

impl SortKey {
    /// Clicking the same header flips direction; a new header sorts ascending.
    pub fn toggled(current: Option<SortKey>, col: usize) -> SortKey {
        match current {
            Some(k) if k.col == col => SortKey { col, ascending: !k.ascending },
            _ => SortKey { col, ascending: true },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub row_ix: Vec<usize>,
    pub numeric: Vec<usize>,
}

impl TableData {
    pub fn build(ds: &Dataset, kept: &[usize], sort: Option<SortKey>) -> Self {
        let with_distance = ds.reference().is_some();
        let records = ds.records();

        let mut pairs: Vec<(usize, Vec<String>)> = kept
            .iter()
            .filter_map(|&ix| records.get(ix).map(|r| (ix, projection::row(r, with_distance))))
            .collect();

        let numeric = projection::numeric_columns(with_distance);
        if let Some(key) = sort {
            let is_num = numeric.contains(&key.col);
            pairs.sort_by(|(_, a), (_, b)| {
                compare_cells(a.get(key.col), b.get(key.col), is_num, key.ascending)
            });
        }

        let (row_ix, rows) = pairs.into_iter().unzip();
        Self {
            headers: projection::headers(with_distance),
            rows,
            row_ix,
            numeric,
        }
    }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    #[inline] pub fn nrows(&self) -> usize { self.rows.len() }
    #[inline] pub fn ncols(&self) -> usize { self.headers.len() }

    pub fn is_numeric(&self, col: usize) -> bool {
        self.numeric.contains(&col)
    }
}

/// Empty cells sort last in either direction of a numeric column.
fn compare_cells(a: Option<&String>, b: Option<&String>, numeric: bool, ascending: bool) -> Ordering {
    let a = a.map(String::as_str).unwrap_or("");
    let b = b.map(String::as_str).unwrap_or("");
    let dir = |o: Ordering| if ascending { o } else { o.reverse() };
    if !numeric {
        return dir(a.to_lowercase().cmp(&b.to_lowercase()));
    }
    match (a.parse::<f64>().ok(), b.parse::<f64>().ok()) {
        (Some(x), Some(y)) => dir(x.partial_cmp(&y).unwrap_or(Ordering::Equal)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
