//! Command implementations.

use std::fs;
use std::path::Path;

use crate::cli::{CliError, CliResult, ExitCode};
use crate::extract;
use crate::frontend::SourceAnalyzer;
use crate::pipeline::{self, PipelineConfig};
use crate::synth;

/// Run the full pipeline. Blocks until the write stage completes.
pub fn generate(
    input: &Path,
    output: &Path,
    input_parallelism: usize,
    processing_parallelism: usize,
    output_parallelism: usize,
) -> CliResult<ExitCode> {
    let config = PipelineConfig::new(
        input,
        output,
        input_parallelism,
        processing_parallelism,
        output_parallelism,
    )
    .map_err(|e| CliError::failure(format!("Configuration error: {}", e)))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::failure(format!("Error starting async runtime: {}", e)))?;

    let summary = runtime
        .block_on(pipeline::run(&config))
        .map_err(|e| CliError::failure(format!("Pipeline error: {}", e)))?;

    println!(
        "{} file(s) discovered, {} test class(es) generated, {} file(s) written, {} unit(s) skipped",
        summary.files_discovered,
        summary.classes_generated,
        summary.files_written,
        summary.units_skipped,
    );
    Ok(ExitCode::SUCCESS)
}

/// Parse one file and dump its extracted class models.
pub fn inspect_file(file: &Path) -> CliResult<ExitCode> {
    let source = read_source(file)?;
    let analyzer = SourceAnalyzer::new();
    let unit = analyzer
        .parse(&source)
        .map_err(|e| CliError::failure(format!("Analysis error: {}", e)))?;
    let extraction = extract::extract(&unit, &analyzer.binder());

    for class in &extraction.classes {
        println!("{:#?}", class);
    }
    for skip in &extraction.skipped {
        eprintln!("skipped: {}", skip);
    }
    if extraction.classes.is_empty() {
        println!("no classes found in {}", file.display());
    }
    Ok(ExitCode::SUCCESS)
}

/// Generate test classes for one file and print them to stdout.
pub fn emit_file(file: &Path) -> CliResult<ExitCode> {
    let source = read_source(file)?;
    let generation = synth::generate_tests(&source)
        .map_err(|e| CliError::failure(format!("Analysis error: {}", e)))?;

    for class in &generation.classes {
        println!("// {}", class.file_name);
        print!("{}", class.source_text);
    }
    for skip in &generation.skipped {
        eprintln!("skipped: {}", skip);
    }
    Ok(ExitCode::SUCCESS)
}

fn read_source(file: &Path) -> CliResult<String> {
    fs::read_to_string(file)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file.display(), e)))
}
