//! Per-font installation: place, register, record, announce.

use std::fs;
use std::io;

use crate::config::InstallScope;
use crate::event::FontEvent;
use crate::font::{FontCandidate, InstalledFontRecord};
use crate::platform::{ErrorCode, FontPlatform, PlatformError};

#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("{0}")]
    Copy(io::Error),
    #[error("font registration failed ({0})")]
    Register(ErrorCode),
}

#[derive(Debug)]
pub enum FontOutcome {
    Installed {
        record: InstalledFontRecord,
        /// Set when the font works for this session but the boot-time
        /// registry entry could not be written.
        persist_error: Option<PlatformError>,
    },
    /// A file with the same name is already in the font store.
    Skipped,
    Failed(InstallError),
}

impl FontOutcome {
    pub fn is_installed(&self) -> bool {
        matches!(self, FontOutcome::Installed { .. })
    }

    /// Log lines describing this outcome for `font`.
    pub fn events(&self, font: &str) -> Vec<FontEvent> {
        let font = font.to_string();
        match self {
            FontOutcome::Skipped => vec![FontEvent::Skipped { font }],
            FontOutcome::Failed(InstallError::Copy(e)) => vec![FontEvent::CopyFailed {
                font,
                reason: e.to_string(),
            }],
            FontOutcome::Failed(InstallError::Register(code)) => {
                vec![FontEvent::RegisterFailed { font, code: *code }]
            }
            FontOutcome::Installed { persist_error, .. } => {
                let mut events = vec![FontEvent::Installed { font: font.clone() }];
                if let Some(e) = persist_error {
                    events.push(FontEvent::PersistFailed {
                        font,
                        reason: e.to_string(),
                    });
                }
                events
            }
        }
    }
}

pub struct FontRegistrar<P> {
    platform: P,
    scope: InstallScope,
}

impl<P: FontPlatform> FontRegistrar<P> {
    pub fn new(platform: P, scope: InstallScope) -> Self {
        Self { platform, scope }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Installs one font. Never panics or aborts on I/O trouble; every
    /// failure is folded into the returned outcome.
    pub fn install(&self, candidate: &FontCandidate) -> FontOutcome {
        let file_name = candidate.file_name();
        let dest = self.platform.fonts_dir().join(&file_name);

        if dest.exists() {
            log::info!("{} is already installed, skipping", file_name);
            return FontOutcome::Skipped;
        }

        if let Err(e) = fs::copy(&candidate.path, &dest) {
            log::warn!("Failed to copy {} to {}: {}", file_name, dest.display(), e);
            return FontOutcome::Failed(InstallError::Copy(e));
        }

        // The copied file stays in the font store if registration fails.
        if let Err(code) = self.platform.register_font(&dest) {
            log::warn!("Failed to register {}: {}", dest.display(), code);
            return FontOutcome::Failed(InstallError::Register(code));
        }

        let registry_name = candidate.registry_name();
        // Private registrations end with the installing process, so they get
        // no boot-time registry entry.
        let (persisted, persist_error) = match self.scope {
            InstallScope::Private => (false, None),
            InstallScope::Persistent => {
                match self
                    .platform
                    .write_persistent_entry(&registry_name, &file_name)
                {
                    Ok(()) => (true, None),
                    Err(e) => {
                        log::warn!("{}", e);
                        (false, Some(e))
                    }
                }
            }
        };

        self.platform.broadcast_font_change();
        log::info!("Installed {} as {:?}", file_name, registry_name);

        FontOutcome::Installed {
            record: InstalledFontRecord {
                registry_name,
                file_name,
                persisted,
            },
            persist_error,
        }
    }
}
