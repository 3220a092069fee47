//! Load, compress, save and verify a PDF

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use lopdf::Document;

use crate::compress::compress_document;
use crate::config::Settings;
use crate::error::OptimizeError;
use crate::report::SizeReport;

/// Optimize `input` into `output` and report the size change.
///
/// Fails fast with [`OptimizeError::InputNotFound`] before touching the
/// filesystem. Missing parent directories of `output` are created. Page count
/// and order are preserved.
pub fn optimize(
    input: &Path,
    output: &Path,
    settings: &Settings,
) -> Result<SizeReport, OptimizeError> {
    if !input.exists() {
        return Err(OptimizeError::InputNotFound(input.to_path_buf()));
    }

    ensure_parent_dir(output)?;

    let mut doc = Document::load(input).map_err(|source| OptimizeError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let page_count = doc.get_pages().len();
    log::info!("Loaded {} ({} pages)", input.display(), page_count);

    let outcomes = compress_document(&mut doc, settings)?;
    let merged = outcomes.iter().filter(|o| o.merged).count();
    let encoded: usize = outcomes.iter().map(|o| o.encoded).sum();
    log::info!(
        "Compressed {} content stream(s), merged streams on {} page(s)",
        encoded,
        merged
    );

    if settings.prune_unused {
        let removed = doc.prune_objects();
        log::info!("Pruned {} unreferenced object(s)", removed.len());
    }

    write_document(&mut doc, output).map_err(|source| OptimizeError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    if !output.exists() {
        return Err(OptimizeError::VerificationFailed(output.to_path_buf()));
    }

    if settings.verify_pages {
        verify_page_count(output, page_count)?;
    }

    let input_bytes = file_size(input)?;
    let output_bytes = file_size(output)?;
    Ok(SizeReport::new(input_bytes, output_bytes, page_count))
}

/// Run [`optimize`] and print the outcome; returns whether it succeeded
pub fn optimize_pdf(input: &Path, output: &Path, settings: &Settings) -> bool {
    match optimize(input, output, settings) {
        Ok(report) => {
            println!("{}", report);
            true
        }
        Err(e) => {
            log::debug!("{:?}", e);
            if e.has_own_message() {
                println!("Error: {}", e);
            } else {
                println!("Error during optimization: {}", e);
            }
            false
        }
    }
}

fn ensure_parent_dir(output: &Path) -> Result<(), OptimizeError> {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            log::info!("Creating output directory {}", dir.display());
            fs::create_dir_all(dir).map_err(|source| OptimizeError::Write {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

fn write_document(doc: &mut Document, output: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(output)?);
    doc.save_to(&mut writer)?;
    writer.flush()
}

fn verify_page_count(output: &Path, expected: usize) -> Result<(), OptimizeError> {
    let written = Document::load(output).map_err(|source| OptimizeError::Read {
        path: output.to_path_buf(),
        source,
    })?;
    let actual = written.get_pages().len();
    if actual != expected {
        return Err(OptimizeError::PageCountMismatch { expected, actual });
    }
    Ok(())
}

fn file_size(path: &Path) -> Result<u64, OptimizeError> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|source| OptimizeError::Metadata {
            path: path.to_path_buf(),
            source,
        })
}
