//! Shared fixtures for unit tests.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::platform::{ErrorCode, FontPlatform, PlatformError};

pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    for (name, data) in entries {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Register(PathBuf),
    Persist(String, String),
    Broadcast,
}

/// Records platform calls instead of touching the OS.
pub struct FakePlatform {
    fonts_dir: PathBuf,
    register_error: Option<u32>,
    persist_error: Option<u32>,
    calls: RefCell<Vec<Call>>,
}

impl FakePlatform {
    pub fn new(fonts_dir: PathBuf) -> Self {
        fs::create_dir_all(&fonts_dir).unwrap();
        Self {
            fonts_dir,
            register_error: None,
            persist_error: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_register(mut self, code: u32) -> Self {
        self.register_error = Some(code);
        self
    }

    pub fn failing_persist(mut self, code: u32) -> Self {
        self.persist_error = Some(code);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl FontPlatform for FakePlatform {
    fn fonts_dir(&self) -> &Path {
        &self.fonts_dir
    }

    fn register_font(&self, path: &Path) -> Result<(), ErrorCode> {
        self.calls
            .borrow_mut()
            .push(Call::Register(path.to_path_buf()));
        match self.register_error {
            Some(code) => Err(ErrorCode(code)),
            None => Ok(()),
        }
    }

    fn write_persistent_entry(
        &self,
        registry_name: &str,
        file_name: &str,
    ) -> Result<(), PlatformError> {
        self.calls.borrow_mut().push(Call::Persist(
            registry_name.to_string(),
            file_name.to_string(),
        ));
        match self.persist_error {
            Some(code) => Err(PlatformError::Persistence {
                name: registry_name.to_string(),
                code: ErrorCode(code),
            }),
            None => Ok(()),
        }
    }

    fn broadcast_font_change(&self) {
        self.calls.borrow_mut().push(Call::Broadcast);
    }
}
