//! Font candidates and the registry naming rule.

use std::path::{Path, PathBuf};

use crate::constants::{FONT_EXTENSIONS, TRUETYPE_EXTENSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    TrueType,
    OpenType,
}

impl FontKind {
    /// Classifies an extension without the leading dot, ignoring case.
    ///
    /// Returns `None` for anything that is not a recognised font extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        if !FONT_EXTENSIONS.contains(&ext.as_str()) {
            return None;
        }
        if ext == TRUETYPE_EXTENSION {
            Some(FontKind::TrueType)
        } else {
            Some(FontKind::OpenType)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontKind::TrueType => "TrueType",
            FontKind::OpenType => "OpenType",
        }
    }
}

/// A font file found in an extracted archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCandidate {
    pub path: PathBuf,
    pub kind: FontKind,
}

impl FontCandidate {
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let kind = FontKind::from_extension(path.extension()?.to_str()?)?;
        Some(Self { path, kind })
    }

    /// File name without its extension, case preserved.
    pub fn display_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn registry_name(&self) -> String {
        format!("{} ({})", self.display_name(), self.kind.label())
    }
}

/// Computes the name under which a font is recorded in the persistent font
/// registry: `"<stem> (TrueType)"` for `.ttf`, `"<stem> (OpenType)"` for any
/// other recognised font extension.
///
/// Returns `None` when the path does not carry a font extension.
pub fn registry_display_name(path: &Path) -> Option<String> {
    FontCandidate::from_path(path).map(|c| c.registry_name())
}

/// The durable result of a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledFontRecord {
    pub registry_name: String,
    pub file_name: String,
    /// Whether the registry entry that survives a reboot was written.
    pub persisted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truetype_name() {
        let name = registry_display_name(Path::new("fonts/MyFont.ttf"));
        assert_eq!(name.as_deref(), Some("MyFont (TrueType)"));
    }

    #[test]
    fn test_opentype_name() {
        let name = registry_display_name(Path::new("fonts/MyFont.otf"));
        assert_eq!(name.as_deref(), Some("MyFont (OpenType)"));
    }

    #[test]
    fn test_extension_case_does_not_change_kind() {
        assert_eq!(
            registry_display_name(Path::new("A.TTF")).as_deref(),
            Some("A (TrueType)")
        );
        assert_eq!(
            registry_display_name(Path::new("A.Otf")).as_deref(),
            Some("A (OpenType)")
        );
    }

    #[test]
    fn test_base_name_case_preserved() {
        let name = registry_display_name(Path::new("SourceCodePro-Bold.TtF"));
        assert_eq!(name.as_deref(), Some("SourceCodePro-Bold (TrueType)"));
    }

    #[test]
    fn test_dotted_stem() {
        let name = registry_display_name(Path::new("Fira.Code.v6.otf"));
        assert_eq!(name.as_deref(), Some("Fira.Code.v6 (OpenType)"));
    }

    #[test]
    fn test_non_font_rejected() {
        assert!(registry_display_name(Path::new("readme.txt")).is_none());
        assert!(registry_display_name(Path::new("noext")).is_none());
        assert!(FontCandidate::from_path("font.woff2").is_none());
    }

    #[test]
    fn test_candidate_parts() {
        let c = FontCandidate::from_path("x/y/Inter.OTF").unwrap();
        assert_eq!(c.kind, FontKind::OpenType);
        assert_eq!(c.display_name(), "Inter");
        assert_eq!(c.extension(), "OTF");
        assert_eq!(c.file_name(), "Inter.OTF");
    }
}
