//! Batch installation of every font found in a folder of archives.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use crate::archive::{extract_archive, extraction_dir, ArchiveError};
use crate::config::InstallSettings;
use crate::event::InstallEvent;
use crate::locator::locate_fonts;
use crate::platform::FontPlatform;
use crate::registrar::{FontOutcome, FontRegistrar};

/// One archive and the directory it is extracted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveJob {
    pub archive: PathBuf,
    pub extract_dir: PathBuf,
}

impl ArchiveJob {
    pub fn new(archive: PathBuf, work_root: &Path) -> Result<Self, ArchiveError> {
        let extract_dir = extraction_dir(&archive, work_root)?;
        Ok(Self {
            archive,
            extract_dir,
        })
    }

    pub fn extract(&self) -> Result<(), ArchiveError> {
        extract_archive(&self.archive, &self.extract_dir)
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallationOutcome {
    /// True iff at least one font reached the installed state.
    pub any_installed: bool,
    pub log: Vec<String>,
    pub installed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub archive_failures: usize,
}

pub struct InstallationPipeline<P> {
    registrar: FontRegistrar<P>,
    work_root: PathBuf,
    archive_extensions: Vec<String>,
    events: Option<Sender<InstallEvent>>,
}

impl<P: FontPlatform> InstallationPipeline<P> {
    pub fn new(platform: P, settings: &InstallSettings) -> Self {
        Self {
            registrar: FontRegistrar::new(platform, settings.scope),
            work_root: settings.work_root(),
            archive_extensions: settings.archive_extensions.clone(),
            events: None,
        }
    }

    /// Streams every log line to `sender` as it is produced.
    pub fn with_events(mut self, sender: Sender<InstallEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    pub fn platform(&self) -> &P {
        self.registrar.platform()
    }

    pub fn work_root(&self) -> &Path {
        &self.work_root
    }

    /// Archives directly inside `folder`, sorted by path. Subdirectories are
    /// not searched; entries that cannot be read are logged and skipped.
    pub fn find_archives(&self, folder: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = fs::read_dir(folder)?.map(|entry| entry.map(|e| e.path()));
        Ok(self.collect_archives(entries))
    }

    fn collect_archives(
        &self,
        entries: impl Iterator<Item = io::Result<PathBuf>>,
    ) -> Vec<PathBuf> {
        let mut archives = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("Skipping unreadable folder entry: {}", e);
                    continue;
                }
            };
            if path.is_file() && self.is_archive(&path) {
                archives.push(path);
            }
        }
        archives.sort();
        archives
    }

    fn is_archive(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.archive_extensions
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    }

    pub fn run(&self, folder: &Path) -> InstallationOutcome {
        let mut outcome = InstallationOutcome::default();
        log::info!("Installing fonts from {}", folder.display());

        let archives = match self.find_archives(folder) {
            Ok(archives) => archives,
            Err(e) => {
                self.emit(
                    &mut outcome,
                    InstallEvent::FolderUnreadable {
                        folder: folder.display().to_string(),
                        reason: e.to_string(),
                    },
                );
                return outcome;
            }
        };

        if archives.is_empty() {
            log::info!("No archives found in {}", folder.display());
        }

        for archive in archives {
            self.process_archive(archive, &mut outcome);
        }

        log::info!(
            "Finished: {} installed, {} skipped, {} failed, {} archive error(s)",
            outcome.installed,
            outcome.skipped,
            outcome.failed,
            outcome.archive_failures
        );
        outcome
    }

    fn process_archive(&self, path: PathBuf, outcome: &mut InstallationOutcome) {
        let archive = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let extracted = ArchiveJob::new(path, &self.work_root).and_then(|job| {
            job.extract()?;
            Ok(job)
        });
        let job = match extracted {
            Ok(job) => job,
            Err(e) => {
                log::warn!("{}", e);
                outcome.archive_failures += 1;
                self.emit(
                    outcome,
                    InstallEvent::ArchiveFailed {
                        archive,
                        reason: e.to_string(),
                    },
                );
                return;
            }
        };
        self.emit(
            outcome,
            InstallEvent::ArchiveExtracted {
                archive: archive.clone(),
            },
        );

        let mut found = 0;
        for candidate in locate_fonts(&job.extract_dir) {
            found += 1;
            let result = self.registrar.install(&candidate);
            match &result {
                FontOutcome::Installed { .. } => {
                    outcome.installed += 1;
                    outcome.any_installed = true;
                }
                FontOutcome::Skipped => outcome.skipped += 1,
                FontOutcome::Failed(_) => outcome.failed += 1,
            }
            for event in result.events(&candidate.file_name()) {
                self.emit(outcome, event.into());
            }
        }

        if found == 0 {
            self.emit(outcome, InstallEvent::NoFontsFound { archive });
        }
    }

    fn emit(&self, outcome: &mut InstallationOutcome, event: InstallEvent) {
        outcome.log.push(event.to_string());
        if let Some(sender) = &self.events {
            if let Err(e) = sender.send(event) {
                log::warn!("Failed to send install event: {:?}", e);
            }
        }
    }
}
