//! Tabular datasets and the CSV loader
//!
//! A run operates on a [`DatasetMap`]: an insertion-ordered set of named [`Table`]s,
//! one per CSV file found in the data directory, keyed by the file's base name
//! (`Xtrain.csv` becomes `Xtrain`). Files that cannot be parsed are reported back as
//! [`SkippedDataset`]s rather than failing the whole load.

mod dataset_map;
mod loader;
mod table;

pub use dataset_map::DatasetMap;
pub use loader::{SkippedDataset, csv_files, load_csv, load_datasets};
pub use table::Table;
