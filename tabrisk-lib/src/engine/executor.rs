use super::{OutcomeKind, PluginOutcome, Progress, RegisteredPlugin, Registry, Warning};
use crate::data::DatasetMap;
use crate::metrics::{MetricResult, Options};
use core::sync::atomic::{AtomicU64, Ordering};
use core::time::Duration;
use futures::future::join_all;
use ohno::app_err;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::{JoinError, spawn_blocking};

const LOG_TARGET: &str = "    engine";

/// How one plugin fared during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRun {
    pub id: String,
    pub outcome: OutcomeKind,
    pub results: usize,
    pub elapsed: Duration,
}

/// Everything an engine run produced.
///
/// `results` holds only well-formed metric results, grouped by plugin in registry order.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub results: Vec<MetricResult>,
    pub warnings: Vec<Warning>,
    pub runs: Vec<PluginRun>,
}

/// Invokes every registered plugin and normalizes what comes back.
///
/// Each invocation runs on the blocking pool so a panicking plugin only loses its own
/// contribution. In parallel mode all invocations start together; results are still
/// assembled in registry order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    parallel: bool,
}

impl Engine {
    #[must_use]
    pub const fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    /// Run every plugin in `registry` against the shared datasets and options.
    ///
    /// Never fails: plugin errors, panics and rejected shapes become warnings.
    pub async fn run(&self, registry: &Registry, data: Arc<DatasetMap>, options: Arc<Options>, progress: &dyn Progress) -> RunOutcome {
        let total = u64::try_from(registry.len()).unwrap_or(u64::MAX);
        let completed = Arc::new(AtomicU64::new(0));

        progress.set_phase("Evaluating");
        let counter = Arc::clone(&completed);
        progress.set_determinate(Box::new(move || {
            let done = counter.load(Ordering::Relaxed);
            (total, done, format!("{done} of {total} plugins"))
        }));

        log::info!(target: LOG_TARGET, "Running {} plugin(s) {}", registry.len(), if self.parallel { "in parallel" } else { "sequentially" });

        let invocations = registry
            .iter()
            .map(|entry| invoke(entry.clone(), Arc::clone(&data), Arc::clone(&options), Arc::clone(&completed)));

        let finished = if self.parallel {
            join_all(invocations).await
        } else {
            let mut finished = Vec::with_capacity(registry.len());
            for invocation in invocations {
                finished.push(invocation.await);
            }
            finished
        };

        let mut outcome = RunOutcome::default();
        for (entry, plugin_outcome, elapsed) in finished {
            outcome.runs.push(PluginRun {
                id: entry.id().to_string(),
                outcome: plugin_outcome.kind(),
                results: plugin_outcome.result_count(),
                elapsed,
            });

            match plugin_outcome {
                PluginOutcome::Contributed(results) => outcome.results.extend(results),
                PluginOutcome::Failed(error) => outcome.warnings.push(Warning::PluginFailed {
                    plugin: entry.id().to_string(),
                    error: error.to_string(),
                }),
                PluginOutcome::Rejected(shape) => outcome.warnings.push(Warning::ShapeRejected {
                    plugin: entry.id().to_string(),
                    shape,
                }),
            }
        }

        outcome
    }
}

async fn invoke(
    entry: RegisteredPlugin,
    data: Arc<DatasetMap>,
    options: Arc<Options>,
    completed: Arc<AtomicU64>,
) -> (RegisteredPlugin, PluginOutcome, Duration) {
    log::debug!(target: LOG_TARGET, "Evaluating '{}'", entry.id());

    let start = Instant::now();
    let plugin = Arc::clone(entry.plugin());
    let outcome = match spawn_blocking(move || plugin.evaluate_privacy(&data, &options)).await {
        Ok(Ok(evaluation)) => PluginOutcome::from_evaluation(evaluation),
        Ok(Err(error)) => PluginOutcome::Failed(error),
        Err(join_error) => {
            let message = panic_message(join_error);
            PluginOutcome::Failed(app_err!("panicked: {message}"))
        }
    };
    let elapsed = start.elapsed();

    let _ = completed.fetch_add(1, Ordering::Relaxed);
    log::debug!(
        target: LOG_TARGET,
        "'{}' {} with {} result(s) in {elapsed:.2?}",
        entry.id(),
        outcome.kind(),
        outcome.result_count()
    );

    (entry, outcome, elapsed)
}

fn panic_message(error: JoinError) -> String {
    match error.try_into_panic() {
        Ok(payload) => payload
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string()),
        Err(error) => error.to_string(),
    }
}
