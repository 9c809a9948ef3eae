//! Plugin units and the built-in privacy metrics
//!
//! The plugin namespace is the static [`PLUGIN_UNITS`] table. Each [`PluginUnit`] pairs
//! an identity (the unit's module path) with a loader that initializes the unit and hands
//! back its metric capability, or `None` when the unit exposes none.
//!
//! The table deliberately lists the [`hooks`] unit, which only documents the capability
//! contract. Discovery skips it by identity.
//!
//! # Options
//!
//! The built-in metrics recognize these run options:
//!
//! | option | type | default | used by |
//! |--------|------|---------|---------|
//! | `synthetic_dataset` | text | `Xsyn` | `similar_check`, `dcr` |
//! | `original_dataset` | text | `Xtrain` | `similar_check`, `dcr` |
//! | `dcr_max_rows` | integer | `1000` | `dcr` |

use crate::Result;
use crate::data::{DatasetMap, Table};
use crate::metrics::{MetricPlugin, Options};
use std::sync::Arc;

pub mod dcr;
pub mod hooks;
pub mod row_count;
pub mod similar_check;

pub const SYNTHETIC_DATASET_OPTION: &str = "synthetic_dataset";
pub const ORIGINAL_DATASET_OPTION: &str = "original_dataset";
pub const DEFAULT_SYNTHETIC_DATASET: &str = "Xsyn";
pub const DEFAULT_ORIGINAL_DATASET: &str = "Xtrain";

/// Initializes a plugin unit. `Ok(None)` means the unit is not a metric.
pub type LoadFn = fn() -> Result<Option<Arc<dyn MetricPlugin>>>;

/// A candidate in the plugin namespace.
#[derive(Debug, Clone, Copy)]
pub struct PluginUnit {
    pub id: &'static str,
    pub load: LoadFn,
}

macro_rules! plugin_unit {
    ($module:ident) => {
        PluginUnit {
            id: $module::UNIT_ID,
            load: $module::load,
        }
    };
}

/// Every plugin unit shipped with tabrisk, in registration order.
pub const PLUGIN_UNITS: &[PluginUnit] = &[
    plugin_unit!(hooks),
    plugin_unit!(row_count),
    plugin_unit!(similar_check),
    plugin_unit!(dcr),
];

/// The synthetic and original tables named by the run options, if both are loaded.
pub(crate) fn dataset_pair<'a>(data: &'a DatasetMap, options: &'a Options) -> Option<(&'a str, &'a Table, &'a str, &'a Table)> {
    let synthetic_name = options.text_or(SYNTHETIC_DATASET_OPTION, DEFAULT_SYNTHETIC_DATASET);
    let original_name = options.text_or(ORIGINAL_DATASET_OPTION, DEFAULT_ORIGINAL_DATASET);

    let synthetic = data.get(synthetic_name)?;
    let original = data.get(original_name)?;
    Some((synthetic_name, synthetic, original_name, original))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::data::{DatasetMap, Table};

    pub fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            columns.iter().map(ToString::to_string).collect(),
            rows.iter().map(|r| r.iter().map(ToString::to_string).collect()).collect(),
        )
        .unwrap()
    }

    pub fn datasets(entries: Vec<(&str, Table)>) -> DatasetMap {
        let mut map = DatasetMap::new();
        for (name, table) in entries {
            map.insert(name, table).unwrap();
        }
        map
    }
}
