//! Recursive discovery of font files in an extracted archive.

use std::path::Path;

use walkdir::WalkDir;

use crate::font::FontCandidate;

/// Lazily yields every `.ttf`/`.otf` file below a root directory.
///
/// Directory entries are visited in file-name order, so the sequence is stable
/// for a given tree.
pub struct FontCandidates {
    walker: walkdir::IntoIter,
}

pub fn locate_fonts(root: &Path) -> FontCandidates {
    FontCandidates {
        walker: WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter(),
    }
}

impl Iterator for FontCandidates {
    type Item = FontCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(candidate) = FontCandidate::from_path(entry.into_path()) {
                log::debug!("Found font: {}", candidate.path.display());
                return Some(candidate);
            }
        }
    }
}
