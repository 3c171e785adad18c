use std::fmt;

use crate::platform::ErrorCode;

/// Progress reported by the installation pipeline, one per log line.
#[derive(Debug, Clone, PartialEq)]
pub enum InstallEvent {
    FolderUnreadable { folder: String, reason: String },
    ArchiveExtracted { archive: String },
    ArchiveFailed { archive: String, reason: String },
    NoFontsFound { archive: String },
    Font(FontEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FontEvent {
    Skipped { font: String },
    CopyFailed { font: String, reason: String },
    RegisterFailed { font: String, code: ErrorCode },
    Installed { font: String },
    PersistFailed { font: String, reason: String },
}

impl fmt::Display for InstallEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallEvent::FolderUnreadable { folder, reason } => {
                write!(f, "Error: cannot read {}: {}", folder, reason)
            }
            InstallEvent::ArchiveExtracted { archive } => write!(f, "Extracted: {}", archive),
            InstallEvent::ArchiveFailed { archive, reason } => {
                write!(f, "Error: {} ({})", reason, archive)
            }
            InstallEvent::NoFontsFound { archive } => write!(f, "No fonts found in {}", archive),
            InstallEvent::Font(event) => fmt::Display::fmt(event, f),
        }
    }
}

impl fmt::Display for FontEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontEvent::Skipped { font } => write!(f, "Skipped: {} is already installed", font),
            FontEvent::CopyFailed { font, reason } => {
                write!(f, "Failed to copy {}: {}", font, reason)
            }
            FontEvent::RegisterFailed { font, code } => {
                write!(f, "Failed to install {}: font registration returned 0 ({})", font, code)
            }
            FontEvent::Installed { font } => write!(f, "Installed: {}", font),
            FontEvent::PersistFailed { font, reason } => {
                write!(f, "Installed {} for this session only: {}", font, reason)
            }
        }
    }
}

impl From<FontEvent> for InstallEvent {
    fn from(event: FontEvent) -> Self {
        InstallEvent::Font(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_event_debug() {
        let event = InstallEvent::ArchiveExtracted {
            archive: "fonts.zip".into(),
        };
        assert!(format!("{:?}", event).contains("ArchiveExtracted"));
    }

    #[test]
    fn test_log_lines() {
        let extracted = InstallEvent::ArchiveExtracted {
            archive: "fonts.zip".into(),
        };
        assert_eq!(extracted.to_string(), "Extracted: fonts.zip");

        let installed: InstallEvent = FontEvent::Installed {
            font: "A.ttf".into(),
        }
        .into();
        assert_eq!(installed.to_string(), "Installed: A.ttf");

        let skipped = FontEvent::Skipped {
            font: "A.ttf".into(),
        };
        assert_eq!(skipped.to_string(), "Skipped: A.ttf is already installed");
    }

    #[test]
    fn test_register_failure_carries_code() {
        let event = FontEvent::RegisterFailed {
            font: "B.otf".into(),
            code: ErrorCode(87),
        };
        assert_eq!(
            event.to_string(),
            "Failed to install B.otf: font registration returned 0 (Win32 Error 87)"
        );
    }
}
