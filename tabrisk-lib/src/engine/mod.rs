//! Plugin discovery and execution
//!
//! [`Registry`] turns the plugin namespace into an ordered set of metric capabilities.
//! Discovery can fail, and such a failure ends the run. [`Engine`] then invokes each
//! capability and folds the per-plugin [`PluginOutcome`]s into a [`RunOutcome`]; that
//! step cannot fail, every problem becomes a [`Warning`].

mod executor;
mod plugin_outcome;
mod progress;
mod registry;
mod warning;

pub use executor::{Engine, PluginRun, RunOutcome};
pub use plugin_outcome::{OutcomeKind, PluginOutcome};
pub use progress::{NoProgress, Progress};
pub use registry::{RegisteredPlugin, Registry};
pub use warning::Warning;
