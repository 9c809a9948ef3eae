use super::Table;
use crate::Result;
use ohno::bail;

/// The named tables available to one evaluation run, in insertion order.
///
/// Names are unique. Once handed to the engine the map is only ever shared by reference.
#[derive(Debug, Clone, Default)]
pub struct DatasetMap {
    entries: Vec<(String, Table)>,
}

impl DatasetMap {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add a dataset. Fails if the name is already taken.
    pub fn insert(&mut self, name: impl Into<String>, table: Table) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            bail!("a dataset named '{name}' is already loaded");
        }

        self.entries.push((name, table));
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, t)| t)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: usize) -> Table {
        Table::new(vec!["a".to_string()], (0..rows).map(|i| vec![i.to_string()]).collect()).unwrap()
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut map = DatasetMap::new();
        map.insert("Xtrain", table(1)).unwrap();
        map.insert("Xsyn", table(2)).unwrap();
        map.insert("Xcontrol", table(3)).unwrap();

        assert_eq!(map.names().collect::<Vec<_>>(), ["Xtrain", "Xsyn", "Xcontrol"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut map = DatasetMap::new();
        map.insert("Xsyn", table(1)).unwrap();
        assert!(map.insert("Xsyn", table(2)).is_err());
        assert_eq!(map.get("Xsyn").unwrap().row_count(), 1);
    }

    #[test]
    fn test_get_missing() {
        let map = DatasetMap::new();
        assert!(map.is_empty());
        assert!(map.get("Xsyn").is_none());
    }
}
