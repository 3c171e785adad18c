pub mod archive;
pub mod cli;
pub mod config;
pub mod constants;
pub mod event;
pub mod font;
pub mod locator;
pub mod pipeline;
pub mod platform;
pub mod registrar;

#[cfg(test)]
mod test_support;

use std::path::Path;
use std::sync::mpsc::Sender;

use log::info;

use crate::config::InstallSettings;
use crate::event::InstallEvent;
use crate::pipeline::{InstallationOutcome, InstallationPipeline};
use crate::platform::{FontPlatform, PlatformError};

pub use crate::font::registry_display_name;

/// Installs every font from the archives in `folder` into the running system.
pub fn run(
    folder: &Path,
    settings: &InstallSettings,
    events: Sender<InstallEvent>,
) -> Result<InstallationOutcome, PlatformError> {
    let platform = platform::system_platform(settings.scope)?;
    info!(
        "Using font directory {} and work directory {}",
        platform.fonts_dir().display(),
        settings.work_root().display()
    );

    let pipeline = InstallationPipeline::new(platform, settings).with_events(events);
    Ok(pipeline.run(folder))
}
