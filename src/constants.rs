/// Directory created under the system temp dir to hold extracted archives.
pub const WORK_DIR_NAME: &str = "FontInstallTemp";

/// Suffix of the staging directory used while an archive is being extracted.
pub const STAGING_SUFFIX: &str = "partial";

pub const DEFAULT_ARCHIVE_EXTENSIONS: &[&str] = &["zip"];

pub const TRUETYPE_EXTENSION: &str = "ttf";
pub const OPENTYPE_EXTENSION: &str = "otf";
pub const FONT_EXTENSIONS: &[&str] = &[TRUETYPE_EXTENSION, OPENTYPE_EXTENSION];

// Windows font subsystem
pub const FONTS_REGISTRY_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion\Fonts";
pub const FR_PERSISTENT: u32 = 0;
pub const FR_PRIVATE: u32 = 0x10;
pub const BROADCAST_TIMEOUT_MS: u32 = 1000;

pub const SUCCESS_MESSAGE: &str = "Font installation complete!";
pub const FAILURE_MESSAGE: &str = "No fonts were installed. Check the log for errors.";
