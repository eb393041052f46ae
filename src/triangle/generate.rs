use crate::foundation::core::RowIndex;
use crate::foundation::error::{PascalError, PascalResult};
use crate::triangle::binary::BinaryEntry;

/// One level of the triangle; row `i` holds `i + 1` entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    entries: Vec<BinaryEntry>,
}

impl Row {
    /// Borrow the entries, leftmost first.
    pub fn entries(&self) -> &[BinaryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for rows produced by [`generate`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The row as binary digit strings, leftmost first.
    pub fn to_binary_strings(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(BinaryEntry::to_binary_string)
            .collect()
    }

    fn first() -> Self {
        Self {
            entries: vec![BinaryEntry::one()],
        }
    }

    fn successor(&self) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(BinaryEntry::one());
        entries.extend(self.entries.windows(2).map(|pair| pair[0].plus(&pair[1])));
        entries.push(BinaryEntry::one());
        Self { entries }
    }
}

/// The full, immutable sequence of rows built for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    rows: Vec<Row>,
}

impl Triangle {
    /// Borrow all rows in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Borrow a single row.
    pub fn row(&self, idx: RowIndex) -> Option<&Row> {
        usize::try_from(idx.0).ok().and_then(|i| self.rows.get(i))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for triangles produced by [`generate`].
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows paired with their index.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (RowIndex, &Row)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (RowIndex(i as u64), row))
    }
}

/// Build the first `n_rows` rows of Pascal's triangle in binary.
///
/// Row 0 is `[1]`; every later row starts and ends with one, and each inner entry is the sum of
/// the two entries above it. Fails with [`PascalError::InvalidArgument`] when `n_rows == 0`.
pub fn generate(n_rows: usize) -> PascalResult<Triangle> {
    if n_rows == 0 {
        return Err(PascalError::invalid_argument(
            "row count must be >= 1, got 0",
        ));
    }

    let mut rows = Vec::with_capacity(n_rows);
    rows.push(Row::first());
    while rows.len() < n_rows {
        let next = rows[rows.len() - 1].successor();
        rows.push(next);
    }
    Ok(Triangle { rows })
}

#[cfg(test)]
#[path = "../../tests/unit/triangle/generate.rs"]
mod tests;
