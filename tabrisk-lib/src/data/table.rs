use crate::Result;
use ohno::bail;

/// An in-memory table: a header of column names plus rows of string cells.
///
/// Every row has exactly as many cells as there are columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, checking that every row matches the header's width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != columns.len()) {
            bail!("row {} has {} cells but the header has {} columns", index + 1, row.len(), columns.len());
        }

        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Numeric view of a cell; `None` for missing or non-numeric cells.
    #[must_use]
    pub fn numeric(&self, row: usize, column: usize) -> Option<f64> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|cell| cell.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }

    /// Indices of columns whose every cell parses as a finite number.
    ///
    /// A table without rows has no numeric columns.
    #[must_use]
    pub fn numeric_columns(&self) -> Vec<usize> {
        if self.rows.is_empty() {
            return Vec::new();
        }

        (0..self.columns.len())
            .filter(|&col| (0..self.rows.len()).all(|row| self.numeric(row, col).is_some()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    fn sample() -> Table {
        Table::new(strings(&["age", "city", "income"]), vec![strings(&["30", "Paris", "1200.5"]), strings(&["41", "Oslo", "n/a"])]).unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let err = Table::new(strings(&["a", "b"]), vec![strings(&["1", "2"]), strings(&["3"])]).unwrap_err();
        assert!(err.to_string().contains("row 2 has 1 cells"), "{err}");
    }

    #[test]
    fn test_shape_accessors() {
        let table = sample();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.column_index("city"), Some(1));
        assert_eq!(table.column_index("zip"), None);
        assert_eq!(table.row(1).unwrap()[1], "Oslo");
        assert!(table.row(2).is_none());
    }

    #[test]
    fn test_numeric_cells() {
        let table = sample();
        assert_eq!(table.numeric(0, 0), Some(30.0));
        assert_eq!(table.numeric(0, 2), Some(1200.5));
        assert_eq!(table.numeric(1, 2), None);
        assert_eq!(table.numeric(0, 1), None);
        assert_eq!(table.numeric(9, 0), None);
    }

    #[test]
    fn test_numeric_columns() {
        assert_eq!(sample().numeric_columns(), vec![0]);
        assert!(Table::new(strings(&["a"]), Vec::new()).unwrap().numeric_columns().is_empty());
    }
}
