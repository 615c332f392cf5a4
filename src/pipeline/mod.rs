//! Pipeline Orchestrator: discover → load → synthesize → write.
//!
//! Each stage is a pool of worker tasks with its own parallelism degree,
//! connected to the next stage by a bounded channel. Completion propagates by
//! closure: when a stage's workers finish draining their input, they drop
//! their senders and the downstream channel closes. The run completes when
//! the write pool finishes.
//!
//! Within a stage, items complete out of submission order whenever
//! parallelism is above 1; only per-item integrity is guaranteed. Faults are
//! isolated per item where possible (unreadable file, unparseable source,
//! failed write: reported, counted, the run continues). An unlistable input
//! directory or a panicked worker is a terminal fault.
//!
//! Output file names collide when two input classes share a simple name; the
//! last writer wins, nondeterministically. This is a documented gap, not a
//! contract.
//!
//! ## Modules
//!
//! - `config` - `PipelineConfig` validation and `ConfigError`

pub mod config;

pub use config::{ConfigError, PipelineConfig};

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::task::JoinHandle;

use crate::model::GeneratedTestClass;
use crate::synth;

/// Bound of every stage-to-stage queue. Deep enough to keep pools busy,
/// shallow enough that a lagging stage exerts backpressure on the stages
/// above it.
const STAGE_QUEUE_DEPTH: usize = 64;

/// A terminal pipeline fault. Per-item failures never surface here; they are
/// reported, counted in the summary, and the run continues.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot list input directory `{path}`: {source}")]
    Discover {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("pipeline stage `{0}` faulted")]
    StageFault(&'static str),
}

/// What a completed run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_discovered: usize,
    pub files_loaded: usize,
    pub classes_generated: usize,
    pub files_written: usize,
    /// Files or classes skipped over read, parse, bind, or write failures
    pub units_skipped: usize,
}

#[derive(Debug, Default)]
struct Counters {
    files_discovered: AtomicUsize,
    files_loaded: AtomicUsize,
    classes_generated: AtomicUsize,
    files_written: AtomicUsize,
    units_skipped: AtomicUsize,
}

impl Counters {
    fn snapshot(&self) -> RunSummary {
        RunSummary {
            files_discovered: self.files_discovered.load(Ordering::Relaxed),
            files_loaded: self.files_loaded.load(Ordering::Relaxed),
            classes_generated: self.classes_generated.load(Ordering::Relaxed),
            files_written: self.files_written.load(Ordering::Relaxed),
            units_skipped: self.units_skipped.load(Ordering::Relaxed),
        }
    }
}

/// Run the whole pipeline to completion.
///
/// Resolves once the write stage has finished every accepted item, or with
/// the first terminal fault.
#[tracing::instrument(skip_all, fields(input = %config.input_path.display()))]
pub async fn run(config: &PipelineConfig) -> Result<RunSummary, PipelineError> {
    let counters = Arc::new(Counters::default());

    let (path_tx, path_rx) = mpsc::channel::<PathBuf>(STAGE_QUEUE_DEPTH);
    let (text_tx, text_rx) = mpsc::channel::<String>(STAGE_QUEUE_DEPTH);
    let (class_tx, class_rx) = mpsc::channel::<GeneratedTestClass>(STAGE_QUEUE_DEPTH);

    // Discover is fixed at parallelism 1: one root in, many paths out.
    let discover = tokio::spawn(discover_stage(
        config.input_path.clone(),
        path_tx,
        Arc::clone(&counters),
    ));
    let loaders = spawn_loaders(config.input_parallelism, path_rx, text_tx, &counters);
    let synthesizers = spawn_synthesizers(
        config.processing_parallelism,
        text_rx,
        class_tx,
        &counters,
    );
    let writers = spawn_writers(
        config.output_parallelism,
        class_rx,
        config.output_path.clone(),
        &counters,
    );

    discover
        .await
        .map_err(|_| PipelineError::StageFault("discover"))??;
    join_stage("load", loaders).await?;
    join_stage("synthesize", synthesizers).await?;
    join_stage("write", writers).await?;

    let summary = counters.snapshot();
    tracing::info!(
        discovered = summary.files_discovered,
        generated = summary.classes_generated,
        written = summary.files_written,
        skipped = summary.units_skipped,
        "pipeline run complete"
    );
    Ok(summary)
}

/// List the immediate files of the input directory, non-recursive and with
/// no extension filtering: every file is one source unit.
async fn discover_stage(
    input: PathBuf,
    tx: Sender<PathBuf>,
    counters: Arc<Counters>,
) -> Result<(), PipelineError> {
    tracing::info!(path = %input.display(), "discovering source files");
    let mut entries =
        tokio::fs::read_dir(&input)
            .await
            .map_err(|source| PipelineError::Discover {
                path: input.clone(),
                source,
            })?;
    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(source) => {
                return Err(PipelineError::Discover {
                    path: input.clone(),
                    source,
                });
            }
        };
        let is_file = entry
            .file_type()
            .await
            .map(|ft| ft.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }
        counters.files_discovered.fetch_add(1, Ordering::Relaxed);
        if tx.send(entry.path()).await.is_err() {
            break;
        }
    }
    Ok(())
}

/// Load stage: path in, file text out, 1-to-1. Unreadable files are skipped.
fn spawn_loaders(
    parallelism: usize,
    rx: Receiver<PathBuf>,
    tx: Sender<String>,
    counters: &Arc<Counters>,
) -> Vec<JoinHandle<()>> {
    let rx = Arc::new(Mutex::new(rx));
    (0..parallelism)
        .map(|_| {
            let rx = Arc::clone(&rx);
            let tx = tx.clone();
            let counters = Arc::clone(counters);
            tokio::spawn(async move {
                loop {
                    let path = { rx.lock().await.recv().await };
                    let Some(path) = path else { break };
                    tracing::debug!(path = %path.display(), "loading source file");
                    match tokio::fs::read_to_string(&path).await {
                        Ok(text) => {
                            counters.files_loaded.fetch_add(1, Ordering::Relaxed);
                            if tx.send(text).await.is_err() {
                                break;
                            }
                        }
                        Err(error) => {
                            tracing::warn!(
                                path = %path.display(),
                                %error,
                                "skipping unreadable file"
                            );
                            counters.units_skipped.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            })
        })
        .collect()
}

/// Synthesize stage: text in, zero or more generated test classes out.
/// Unparseable files and unbindable classes are skipped and reported.
fn spawn_synthesizers(
    parallelism: usize,
    rx: Receiver<String>,
    tx: Sender<GeneratedTestClass>,
    counters: &Arc<Counters>,
) -> Vec<JoinHandle<()>> {
    let rx = Arc::new(Mutex::new(rx));
    (0..parallelism)
        .map(|_| {
            let rx = Arc::clone(&rx);
            let tx = tx.clone();
            let counters = Arc::clone(counters);
            tokio::spawn(async move {
                'work: loop {
                    let text = { rx.lock().await.recv().await };
                    let Some(text) = text else { break };
                    match synth::generate_tests(&text) {
                        Ok(generation) => {
                            for skip in &generation.skipped {
                                tracing::warn!(error = %skip, "skipping class");
                                counters.units_skipped.fetch_add(1, Ordering::Relaxed);
                            }
                            for class in generation.classes {
                                counters.classes_generated.fetch_add(1, Ordering::Relaxed);
                                if tx.send(class).await.is_err() {
                                    break 'work;
                                }
                            }
                        }
                        Err(error) => {
                            tracing::warn!(%error, "skipping unparseable source file");
                            counters.units_skipped.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            })
        })
        .collect()
}

/// Write stage: generated class in, file on disk out. An existing file of
/// the same name is overwritten; a failed write skips only that item.
fn spawn_writers(
    parallelism: usize,
    rx: Receiver<GeneratedTestClass>,
    output_path: PathBuf,
    counters: &Arc<Counters>,
) -> Vec<JoinHandle<()>> {
    let rx = Arc::new(Mutex::new(rx));
    (0..parallelism)
        .map(|_| {
            let rx = Arc::clone(&rx);
            let output_path = output_path.clone();
            let counters = Arc::clone(counters);
            tokio::spawn(async move {
                loop {
                    let class = { rx.lock().await.recv().await };
                    let Some(class) = class else { break };
                    let path = output_path.join(&class.file_name);
                    match tokio::fs::write(&path, class.source_text.as_bytes()).await {
                        Ok(()) => {
                            counters.files_written.fetch_add(1, Ordering::Relaxed);
                            tracing::info!(path = %path.display(), "wrote test class");
                        }
                        Err(error) => {
                            tracing::warn!(
                                path = %path.display(),
                                %error,
                                "skipping failed write"
                            );
                            counters.units_skipped.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            })
        })
        .collect()
}

async fn join_stage(
    stage: &'static str,
    handles: Vec<JoinHandle<()>>,
) -> Result<(), PipelineError> {
    for handle in handles {
        handle
            .await
            .map_err(|_| PipelineError::StageFault(stage))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_empty_input_directory() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let config = PipelineConfig::new(input.path(), output.path(), 1, 1, 1).unwrap();
        let summary = run(&config).await.unwrap();
        assert_eq!(summary, RunSummary::default());
    }

    #[tokio::test]
    async fn test_single_file_flows_through() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(
            input.path().join("Foo.cs"),
            "namespace N { public class Foo { public void Act() { } } }",
        )
        .unwrap();

        let config = PipelineConfig::new(input.path(), output.path(), 1, 1, 1).unwrap();
        let summary = run(&config).await.unwrap();
        assert_eq!(summary.files_discovered, 1);
        assert_eq!(summary.files_loaded, 1);
        assert_eq!(summary.classes_generated, 1);
        assert_eq!(summary.files_written, 1);
        assert_eq!(summary.units_skipped, 0);
        assert!(output.path().join("FooTests.cs").is_file());
    }

    #[tokio::test]
    async fn test_subdirectories_are_not_recursed_into() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let nested = input.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(
            nested.join("Hidden.cs"),
            "namespace N { public class Hidden { } }",
        )
        .unwrap();

        let config = PipelineConfig::new(input.path(), output.path(), 2, 2, 2).unwrap();
        let summary = run(&config).await.unwrap();
        assert_eq!(summary.files_discovered, 0);
        assert_eq!(summary.files_written, 0);
    }
}
