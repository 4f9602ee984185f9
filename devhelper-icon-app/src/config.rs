//! Where the generated assets go and which sizes each pass renders.

use std::path::{Path, PathBuf};

use devhelper_icon_core::{SizeTable, ICO_SIZES};

/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_ROOT: &str = "icons";

/// Everything the export driver needs. Nothing is read from flags or disk;
/// [`ExportConfig::default`] is the built-in asset layout.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub output_root: PathBuf,
    /// Pass 1: loose PNGs written straight into the output root.
    pub flat_pngs: SizeTable,
    /// Pass 2: file name and resolutions of the Windows icon.
    pub ico_file_name: String,
    pub ico_sizes: Vec<u32>,
    /// Pass 3: macOS iconset directory and its contents.
    pub iconset_dir_name: String,
    pub iconset: SizeTable,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            flat_pngs: SizeTable::flat_png(),
            ico_file_name: "icon.ico".to_string(),
            ico_sizes: ICO_SIZES.to_vec(),
            iconset_dir_name: "icon.iconset".to_string(),
            iconset: SizeTable::iconset(),
        }
    }
}

impl ExportConfig {
    /// The default layout written under a different root.
    #[cfg(test)]
    pub fn with_output_root(root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: root.into(),
            ..Self::default()
        }
    }

    pub fn ico_path(&self) -> PathBuf {
        self.output_root.join(&self.ico_file_name)
    }

    pub fn iconset_dir(&self) -> PathBuf {
        self.output_root.join(&self.iconset_dir_name)
    }

    /// Shell command that turns the staged iconset into an `.icns`.
    pub fn icns_hint(&self) -> String {
        let icns = Path::new(&self.iconset_dir_name).with_extension("icns");
        format!(
            "iconutil -c icns {} -o {}",
            self.iconset_dir().display(),
            self.output_root.join(icns).display()
        )
    }
}
