//! Pipeline configuration and startup validation.
//!
//! Validation happens before any pipeline work begins; a `ConfigError` is
//! fatal to the process.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why configuration was rejected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("input directory `{0}` does not exist")]
    MissingInputDir(PathBuf),

    #[error("output directory `{path}` does not exist and cannot be created: {source}")]
    UncreatableOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parallelism degree must be positive")]
    NonPositiveParallelism,
}

/// Validated run configuration.
///
/// Invariants established by [`PipelineConfig::new`]: the input directory
/// exists, the output directory exists (created on demand), and all three
/// parallelism degrees are at least 1.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub input_parallelism: usize,
    pub processing_parallelism: usize,
    pub output_parallelism: usize,
}

impl PipelineConfig {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        input_parallelism: usize,
        processing_parallelism: usize,
        output_parallelism: usize,
    ) -> Result<Self, ConfigError> {
        let input_path = input_path.into();
        let output_path = output_path.into();

        if input_parallelism == 0 || processing_parallelism == 0 || output_parallelism == 0 {
            return Err(ConfigError::NonPositiveParallelism);
        }
        if !input_path.is_dir() {
            return Err(ConfigError::MissingInputDir(input_path));
        }
        ensure_output_dir(&output_path)?;

        Ok(Self {
            input_path,
            output_path,
            input_parallelism,
            processing_parallelism,
            output_parallelism,
        })
    }
}

fn ensure_output_dir(path: &Path) -> Result<(), ConfigError> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| ConfigError::UncreatableOutputDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let config = PipelineConfig::new(input.path(), output.path(), 1, 2, 3).unwrap();
        assert_eq!(config.input_parallelism, 1);
        assert_eq!(config.processing_parallelism, 2);
        assert_eq!(config.output_parallelism, 3);
    }

    #[test]
    fn test_missing_input_dir_is_rejected() {
        let output = tempfile::tempdir().unwrap();
        let err = PipelineConfig::new("/definitely/not/a/real/dir", output.path(), 1, 1, 1)
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingInputDir(_)));
    }

    #[test]
    fn test_output_dir_is_created_when_absent() {
        let input = tempfile::tempdir().unwrap();
        let parent = tempfile::tempdir().unwrap();
        let output = parent.path().join("generated").join("tests");
        PipelineConfig::new(input.path(), &output, 1, 1, 1).unwrap();
        assert!(output.is_dir());
    }

    #[test]
    fn test_zero_parallelism_is_rejected() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        for (ip, pp, op) in [(0, 1, 1), (1, 0, 1), (1, 1, 0)] {
            let err = PipelineConfig::new(input.path(), output.path(), ip, pp, op).unwrap_err();
            assert!(matches!(err, ConfigError::NonPositiveParallelism));
        }
    }
}
