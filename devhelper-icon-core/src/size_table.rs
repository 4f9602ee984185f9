//! Output size tables: which file gets rendered at which pixel size.

/// Resolutions embedded in the Windows `.ico`, smallest first.
pub const ICO_SIZES: [u32; 4] = [16, 32, 48, 256];

/// Logical point sizes of a macOS iconset. Each gets a 1x and a 2x file.
pub const ICONSET_LOGICAL_SIZES: [u32; 5] = [16, 32, 128, 256, 512];

/// One output file and the pixel size it is rendered at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeEntry {
    pub file_name: String,
    pub size: u32,
}

impl SizeEntry {
    pub fn new(file_name: impl Into<String>, size: u32) -> Self {
        Self {
            file_name: file_name.into(),
            size,
        }
    }
}

/// An ordered list of [`SizeEntry`]. Order is the order files are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SizeTable {
    entries: Vec<SizeEntry>,
}

impl SizeTable {
    pub fn new(entries: Vec<SizeEntry>) -> Self {
        Self { entries }
    }

    /// Flat PNGs consumed by the app bundler.
    pub fn flat_png() -> Self {
        Self::new(vec![
            SizeEntry::new("32x32.png", 32),
            SizeEntry::new("128x128.png", 128),
            SizeEntry::new("128x128@2x.png", 256),
            SizeEntry::new("256x256.png", 256),
        ])
    }

    /// The ten PNGs of a macOS iconset, 1x before 2x for each logical size.
    pub fn iconset() -> Self {
        let entries = ICONSET_LOGICAL_SIZES
            .iter()
            .flat_map(|&logical| {
                [1, 2].map(|scale| SizeEntry::new(iconset_file_name(logical, scale), logical * scale))
            })
            .collect();
        Self::new(entries)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SizeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SizeTable {
    type Item = &'a SizeEntry;
    type IntoIter = std::slice::Iter<'a, SizeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Iconset file name for a logical size at a pixel density, e.g.
/// `icon_32x32@2x.png`.
pub fn iconset_file_name(logical: u32, scale: u32) -> String {
    if scale > 1 {
        format!("icon_{logical}x{logical}@{scale}x.png")
    } else {
        format!("icon_{logical}x{logical}.png")
    }
}
