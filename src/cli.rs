use clap::Parser;
use std::path::PathBuf;

use crate::config::{InstallScope, InstallSettings};

#[derive(Parser)]
#[command(name = "font-installer")]
#[command(version)]
#[command(about = "Install the fonts bundled in a folder of ZIP archives", long_about = None)]
#[command(after_help = "\
Every .zip directly inside FOLDER is extracted and each .ttf/.otf file found
in it is copied into the system font directory, registered, and recorded in
the font registry. Fonts that are already installed are skipped.

CONFIGURATION:
    Defaults are read from <config dir>/font-installer/config.toml:

    [install]
    work_dir = \"C:\\\\Temp\\\\FontInstallTemp\"
    archive_extensions = [\"zip\"]
    scope = \"persistent\"")]
pub struct Cli {
    /// Folder containing the font archives
    pub folder: PathBuf,

    /// Directory archives are extracted into
    #[arg(long, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Register fonts for the installing process only
    #[arg(long)]
    pub private: bool,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded settings.
    pub fn apply(&self, settings: &mut InstallSettings) {
        if let Some(dir) = &self.work_dir {
            settings.work_dir = Some(dir.clone());
        }
        if self.private {
            settings.scope = InstallScope::Private;
        }
    }
}
