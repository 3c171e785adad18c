//! ZIP extraction into per-archive work directories.

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::constants::STAGING_SUFFIX;

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("Failed to read archive {}: {source}", path.display())]
    Read { path: PathBuf, source: ZipError },
    #[error("Failed to extract {}: {source}", path.display())]
    Extract { path: PathBuf, source: ZipError },
    #[error("Failed to prepare {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Cannot derive an extraction directory from {}", path.display())]
    InvalidName { path: PathBuf },
}

/// Directory under `work_root` that `archive` is extracted into, named after
/// the archive's base name.
///
/// Base names that do not form a single plain path component (empty, `.`,
/// `..`) are rejected, since joining them would point at the work root itself
/// or outside of it.
pub fn extraction_dir(archive: &Path, work_root: &Path) -> Result<PathBuf, ArchiveError> {
    let invalid = || ArchiveError::InvalidName {
        path: archive.to_path_buf(),
    };
    let stem = archive.file_stem().ok_or_else(invalid)?;
    let mut components = Path::new(stem).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => Ok(work_root.join(name)),
        _ => Err(invalid()),
    }
}

/// Extracts `archive` into `dest`, replacing whatever `dest` held before.
///
/// Entries are first written into a sibling staging directory which is only
/// swapped in once the whole archive extracted cleanly, so a failed run
/// leaves the previous contents of `dest` untouched and a successful one
/// never merges with them.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<(), ArchiveError> {
    let file = File::open(archive).map_err(|source| ArchiveError::Open {
        path: archive.to_path_buf(),
        source,
    })?;
    let mut zip = ZipArchive::new(file).map_err(|source| ArchiveError::Read {
        path: archive.to_path_buf(),
        source,
    })?;

    let staging = staging_dir(dest);
    remove_path(&staging).map_err(|source| io_error(&staging, source))?;
    fs::create_dir_all(&staging).map_err(|source| io_error(&staging, source))?;

    log::debug!(
        "Extracting {} entries from {} into {}",
        zip.len(),
        archive.display(),
        staging.display()
    );

    if let Err(source) = zip.extract(&staging) {
        if let Err(e) = remove_path(&staging) {
            log::warn!("Failed to clean up {}: {}", staging.display(), e);
        }
        return Err(ArchiveError::Extract {
            path: archive.to_path_buf(),
            source,
        });
    }

    let swapped = remove_path(dest).and_then(|()| fs::rename(&staging, dest));
    if let Err(source) = swapped {
        if let Err(e) = remove_path(&staging) {
            log::warn!("Failed to clean up {}: {}", staging.display(), e);
        }
        return Err(io_error(dest, source));
    }
    Ok(())
}

fn staging_dir(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    dest.with_file_name(format!("{}.{}", name, STAGING_SUFFIX))
}

/// Removes a file or directory tree; a missing path is not an error.
fn remove_path(path: &Path) -> io::Result<()> {
    let result = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) => Err(e),
    };
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

fn io_error(path: &Path, source: io::Error) -> ArchiveError {
    ArchiveError::Io {
        path: path.to_path_buf(),
        source,
    }
}
