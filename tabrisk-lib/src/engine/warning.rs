use camino::Utf8PathBuf;
use core::fmt::{Display, Formatter};
use serde::Serialize;

/// A recoverable problem met during a run.
///
/// Warnings never stop a run; they are reported next to the completed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A dataset file could not be loaded and is absent from the run.
    DatasetSkipped { file: Utf8PathBuf, error: String },

    /// A plugin returned an error or panicked.
    PluginFailed { plugin: String, error: String },

    /// A plugin returned something that is not a list of well-formed metric results.
    ShapeRejected { plugin: String, shape: String },
}

impl Warning {
    /// The dataset file or plugin the warning is about.
    #[must_use]
    pub fn subject(&self) -> &str {
        match self {
            Self::DatasetSkipped { file, .. } => file.as_str(),
            Self::PluginFailed { plugin, .. } | Self::ShapeRejected { plugin, .. } => plugin,
        }
    }
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DatasetSkipped { file, error } => write!(f, "skipped dataset '{file}': {error}"),
            Self::PluginFailed { plugin, error } => write!(f, "plugin '{plugin}' failed: {error}"),
            Self::ShapeRejected { plugin, shape } => write!(f, "plugin '{plugin}' returned an unsupported shape: {shape}"),
        }
    }
}
