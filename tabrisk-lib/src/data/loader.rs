use super::{DatasetMap, Table};
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use csv::ReaderBuilder;
use ohno::{EnrichableExt, IntoAppError, bail};
use std::fs;

const LOG_TARGET: &str = "    loader";

/// A dataset file that could not be loaded.
#[derive(Debug)]
pub struct SkippedDataset {
    pub file: Utf8PathBuf,
    pub error: ohno::AppError,
}

/// Lists the CSV files directly inside `dir`, sorted by file name.
///
/// The extension match is case-insensitive. Entries whose names are not valid UTF-8 are ignored.
pub fn csv_files(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let entries = fs::read_dir(dir).into_app_err_with(|| format!("reading data directory '{dir}'"))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.into_app_err_with(|| format!("reading data directory '{dir}'"))?;
        let Ok(path) = Utf8PathBuf::from_path_buf(entry.path()) else {
            log::debug!(target: LOG_TARGET, "Ignoring non UTF-8 path {}", entry.path().display());
            continue;
        };

        if path.is_file() && path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Reads one CSV file into a table. The first record is the header.
pub fn load_csv(path: &Utf8Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)
        .into_app_err_with(|| format!("opening '{path}'"))?;

    let headers = reader.headers().into_app_err_with(|| format!("reading the header of '{path}'"))?;
    if headers.is_empty() {
        bail!("'{path}' has no header row");
    }
    let columns: Vec<String> = headers.iter().map(ToString::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.into_app_err_with(|| format!("parsing '{path}'"))?;
        rows.push(record.iter().map(ToString::to_string).collect());
    }

    Table::new(columns, rows).map_err(|e| e.enrich_with(|| format!("parsing '{path}'")))
}

/// Loads every file into a dataset map keyed by the file's base name.
///
/// Files that fail to load are returned as skipped and are absent from the map.
pub fn load_datasets(files: &[Utf8PathBuf]) -> (DatasetMap, Vec<SkippedDataset>) {
    let mut datasets = DatasetMap::new();
    let mut skipped = Vec::new();

    for file in files {
        let key = file.file_stem().unwrap_or_else(|| file.as_str());
        let loaded = load_csv(file).and_then(|table| {
            let rows = table.row_count();
            datasets.insert(key, table)?;
            Ok(rows)
        });

        match loaded {
            Ok(rows) => {
                log::info!(target: LOG_TARGET, "Loaded '{file}' as '{key}' with {rows} rows");
            }
            Err(error) => {
                log::warn!(target: LOG_TARGET, "Could not load '{file}': {error:#}");
                skipped.push(SkippedDataset { file: file.clone(), error });
            }
        }
    }

    (datasets, skipped)
}
