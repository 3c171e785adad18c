//! The operating-system side of a font install.
//!
//! Everything that mutates machine-wide state (the font table, the
//! persistent font registry, other programs' font lists) goes through
//! [`FontPlatform`], so the rest of the crate can run against a fake.

use std::fmt;
use std::path::Path;

use crate::config::InstallScope;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub use windows::WindowsFontPlatform;

/// A raw OS error code, as reported by the platform's last-error facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode(pub u32);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Win32 Error {}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Failed to write registry entry {name:?}: {code}")]
    Persistence { name: String, code: ErrorCode },
    #[error("Font installation is not supported on {0}")]
    Unsupported(&'static str),
}

pub trait FontPlatform {
    /// Directory holding the installed font files.
    fn fonts_dir(&self) -> &Path;

    /// Makes the font at `path` usable by running applications.
    fn register_font(&self, path: &Path) -> Result<(), ErrorCode>;

    /// Records `registry_name -> file_name` so the font is reloaded at boot.
    fn write_persistent_entry(&self, registry_name: &str, file_name: &str)
        -> Result<(), PlatformError>;

    /// Tells every top-level window that the font table changed.
    fn broadcast_font_change(&self);
}

impl<P: FontPlatform + ?Sized> FontPlatform for Box<P> {
    fn fonts_dir(&self) -> &Path {
        (**self).fonts_dir()
    }

    fn register_font(&self, path: &Path) -> Result<(), ErrorCode> {
        (**self).register_font(path)
    }

    fn write_persistent_entry(
        &self,
        registry_name: &str,
        file_name: &str,
    ) -> Result<(), PlatformError> {
        (**self).write_persistent_entry(registry_name, file_name)
    }

    fn broadcast_font_change(&self) {
        (**self).broadcast_font_change()
    }
}

pub type SystemPlatform = Box<dyn FontPlatform + Send>;

/// Returns the font platform of the running system.
#[cfg(target_os = "windows")]
pub fn system_platform(scope: InstallScope) -> Result<SystemPlatform, PlatformError> {
    Ok(Box::new(WindowsFontPlatform::new(scope)))
}

#[cfg(not(target_os = "windows"))]
pub fn system_platform(_scope: InstallScope) -> Result<SystemPlatform, PlatformError> {
    Err(PlatformError::Unsupported(std::env::consts::OS))
}
