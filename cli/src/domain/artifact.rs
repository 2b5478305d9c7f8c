//! Build artifact selection.

use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::domain::error::PreconditionError;

/// Extension of the packaged unit produced by the external build step.
pub const ARTIFACT_EXTENSION: &str = "whl";

/// Whether a directory entry name is a build artifact.
#[must_use]
pub fn is_artifact(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext == ARTIFACT_EXTENSION)
        && !file_name.starts_with('.')
}

/// Pick the one artifact among `candidates`.
///
/// Candidates are filtered with [`is_artifact`]; the result must contain
/// exactly one entry. The orchestrator never guesses between several.
///
/// # Errors
///
/// [`PreconditionError::NoArtifact`] when none match,
/// [`PreconditionError::MultipleArtifacts`] (sorted names) when more than one does.
pub fn select_single<I>(dir: &str, candidates: I) -> Result<String, PreconditionError>
where
    I: IntoIterator<Item = String>,
{
    let mut found: Vec<String> = candidates.into_iter().filter(|n| is_artifact(n)).collect();
    found.sort();
    match found.len() {
        0 => Err(PreconditionError::NoArtifact {
            dir: dir.to_string(),
            extension: ARTIFACT_EXTENSION,
        }),
        1 => Ok(found.remove(0)),
        _ => Err(PreconditionError::MultipleArtifacts {
            dir: dir.to_string(),
            extension: ARTIFACT_EXTENSION,
            found,
        }),
    }
}

/// Pack the artifact as the single entry of a gzipped tarball, built in memory.
///
/// The entry sits at the archive root under `file_name`, which is how the
/// requirements list refers to it once the runtime unpacks the archive.
///
/// # Errors
///
/// Returns an error if the archive cannot be written.
pub fn pack_dependencies(file_name: &str, contents: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut header = tar::Header::new_gnu();
    header.set_size(contents.len() as u64);
    header.set_mode(0o644);
    header.set_mtime(0);

    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    builder.append_data(&mut header, file_name, contents)?;
    builder.into_inner()?.finish()
}
