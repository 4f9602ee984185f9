//! The three export passes: flat PNGs, Windows `.ico`, macOS iconset.
//!
//! Each pass renders its table in order and writes as it goes. The first
//! failure aborts the run; files already written are left in place.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use devhelper_icon_core::SizeTable;
use devhelper_icon_render::{render, write_ico, write_png, RenderError, Result};

use crate::config::ExportConfig;

/// Files written by a completed run, in write order.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub artifacts: Vec<PathBuf>,
}

/// Run all three passes against `config`.
pub fn run(config: &ExportConfig) -> Result<ExportReport> {
    let mut report = ExportReport::default();
    ensure_dir(&config.output_root)?;

    export_pngs(&config.flat_pngs, &config.output_root, &mut report)?;
    export_ico(&config.ico_sizes, &config.ico_path(), &mut report)?;

    let iconset_dir = config.iconset_dir();
    ensure_dir(&iconset_dir)?;
    export_pngs(&config.iconset, &iconset_dir, &mut report)?;
    info!("  ✓ {} folder created", config.iconset_dir_name);

    Ok(report)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| RenderError::io(dir, e))
}

fn export_pngs(table: &SizeTable, dir: &Path, report: &mut ExportReport) -> Result<()> {
    for entry in table {
        let canvas = render(entry.size)?;
        let path = dir.join(&entry.file_name);
        write_png(&canvas, &path)?;
        info!("  ✓ {}", entry.file_name);
        report.artifacts.push(path);
    }
    Ok(())
}

fn export_ico(sizes: &[u32], path: &Path, report: &mut ExportReport) -> Result<()> {
    let canvases = sizes
        .iter()
        .map(|&size| render(size))
        .collect::<Result<Vec<_>>>()?;
    write_ico(&canvases, path)?;
    info!(
        "  ✓ {}",
        path.file_name().unwrap_or(path.as_os_str()).to_string_lossy()
    );
    report.artifacts.push(path.to_path_buf());
    Ok(())
}
