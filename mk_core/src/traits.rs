//! Core traits for conformance checks

use std::path::Path;

use errors::Defect;

/// Reads and writes one kind of configuration artifact.
///
/// `read` of a missing file yields an empty state where the format allows
/// it, so that checks can create the file from nothing. `write` always
/// replaces the whole file.
pub trait ArtifactAccessor {
    type State: Clone + PartialEq;

    fn read(&self, path: &Path) -> Result<Self::State, Defect>;

    fn write(&self, path: &Path, state: &Self::State) -> Result<(), Defect>;
}

/// Read an artifact, let `fix` bring it into canonical form and write it
/// back only if the state changed.
///
/// Returns what `fix` reported when the artifact was rewritten and `None`
/// when it already was canonical.
pub fn sync_artifact<A, F, T>(accessor: &A, path: &Path, fix: F) -> Result<Option<T>, Defect>
where
    A: ArtifactAccessor,
    F: FnOnce(&mut A::State) -> Result<T, Defect>
{
    let before = accessor.read(path)?;
    let mut after = before.clone();
    let report = fix(&mut after)?;
    if after == before {
        return Ok(None);
    }
    accessor.write(path, &after)?;
    tracing::info!("Rewrote {}", path.display());
    Ok(Some(report))
}
