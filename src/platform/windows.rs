//! GDI font registration and the HKLM font registry.

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use windows_sys::Win32::Foundation::{GetLastError, ERROR_SUCCESS};
use windows_sys::Win32::Graphics::Gdi::AddFontResourceExW;
use windows_sys::Win32::System::Registry::{RegSetKeyValueW, HKEY_LOCAL_MACHINE, REG_SZ};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    SendMessageTimeoutW, HWND_BROADCAST, SMTO_ABORTIFHUNG, WM_FONTCHANGE,
};

use super::{ErrorCode, FontPlatform, PlatformError};
use crate::config::InstallScope;
use crate::constants::{BROADCAST_TIMEOUT_MS, FONTS_REGISTRY_KEY};

pub struct WindowsFontPlatform {
    fonts_dir: PathBuf,
    flags: u32,
}

impl WindowsFontPlatform {
    pub fn new(scope: InstallScope) -> Self {
        Self {
            fonts_dir: system_fonts_dir(),
            flags: scope.registration_flags(),
        }
    }
}

fn system_fonts_dir() -> PathBuf {
    std::env::var_os("WINDIR")
        .or_else(|| std::env::var_os("SystemRoot"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\Windows"))
        .join("Fonts")
}

fn to_wide(s: &OsStr) -> Vec<u16> {
    s.encode_wide().chain(std::iter::once(0)).collect()
}

impl FontPlatform for WindowsFontPlatform {
    fn fonts_dir(&self) -> &Path {
        &self.fonts_dir
    }

    fn register_font(&self, path: &Path) -> Result<(), ErrorCode> {
        let wide_path = to_wide(path.as_os_str());
        // SAFETY: `wide_path` is NUL-terminated and outlives the call; the
        // reserved pointer must be null.
        let added = unsafe { AddFontResourceExW(wide_path.as_ptr(), self.flags, std::ptr::null()) };
        if added == 0 {
            // SAFETY: reads the calling thread's last-error value, no arguments.
            let code = unsafe { GetLastError() };
            return Err(ErrorCode(code));
        }
        log::debug!("AddFontResourceExW added {} face(s) from {}", added, path.display());
        Ok(())
    }

    fn write_persistent_entry(
        &self,
        registry_name: &str,
        file_name: &str,
    ) -> Result<(), PlatformError> {
        let key = to_wide(OsStr::new(FONTS_REGISTRY_KEY));
        let value_name = to_wide(OsStr::new(registry_name));
        let data = to_wide(OsStr::new(file_name));
        let byte_len = (data.len() * std::mem::size_of::<u16>()) as u32;

        // SAFETY: `key` and `value_name` are NUL-terminated; `data` holds
        // exactly `byte_len` bytes including its terminator. All three live
        // until the call returns.
        let status = unsafe {
            RegSetKeyValueW(
                HKEY_LOCAL_MACHINE,
                key.as_ptr(),
                value_name.as_ptr(),
                REG_SZ,
                data.as_ptr().cast(),
                byte_len,
            )
        };
        if status != ERROR_SUCCESS {
            return Err(PlatformError::Persistence {
                name: registry_name.to_string(),
                code: ErrorCode(status),
            });
        }
        Ok(())
    }

    fn broadcast_font_change(&self) {
        let mut result = 0usize;
        // SAFETY: no pointers are passed besides `result`, a live local.
        let sent = unsafe {
            SendMessageTimeoutW(
                HWND_BROADCAST,
                WM_FONTCHANGE,
                0,
                0,
                SMTO_ABORTIFHUNG,
                BROADCAST_TIMEOUT_MS,
                &mut result,
            )
        };
        if sent == 0 {
            log::debug!("WM_FONTCHANGE broadcast timed out or was not delivered");
        }
    }
}
