//! PNG and ICO encoding of rendered canvases.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::ExtendedColorType;
use tracing::debug;

use crate::canvas::Canvas;
use crate::error::RenderError;

/// Value of the `Software` tEXt chunk written into every PNG.
pub const SOFTWARE_TAG: &str = "Dev Helper icon generator";

fn create(path: &Path) -> crate::Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| RenderError::io(path, e))?;
    Ok(BufWriter::new(file))
}

/// Write a canvas as an RGBA PNG, replacing any existing file.
///
/// Uses the `png` crate directly (rather than `image`) so the file can carry
/// a `Software` tEXt chunk.
pub fn write_png(canvas: &Canvas, path: &Path) -> crate::Result<()> {
    canvas.validate()?;
    let writer = create(path)?;

    let mut encoder = png::Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);
    encoder.add_text_chunk("Software".to_string(), SOFTWARE_TAG.to_string())?;

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.pixels)?;
    png_writer.finish()?;

    debug!(
        "Exported PNG {}x{} to {}",
        canvas.width,
        canvas.height,
        path.display()
    );
    Ok(())
}

/// Write several canvases into one multi-resolution `.ico`.
///
/// Entries are stored smallest first so the smallest image is the base
/// image. Each entry is PNG-compressed at exactly its canvas size; sizes
/// above 256 are rejected by the encoder.
pub fn write_ico(canvases: &[Canvas], path: &Path) -> crate::Result<()> {
    if canvases.is_empty() {
        return Err(RenderError::EmptyIcon);
    }

    let mut ordered: Vec<&Canvas> = canvases.iter().collect();
    ordered.sort_by_key(|c| c.width);

    let mut frames = Vec::with_capacity(ordered.len());
    for canvas in ordered {
        canvas.validate()?;
        frames.push(IcoFrame::as_png(
            &canvas.pixels,
            canvas.width,
            canvas.height,
            ExtendedColorType::Rgba8,
        )?);
    }

    let mut writer = create(path)?;
    IcoEncoder::new(&mut writer).encode_images(&frames)?;
    writer.flush().map_err(|e| RenderError::io(path, e))?;

    debug!("Exported ICO with {} images to {}", frames.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    use crate::canvas::Surface;
    use devhelper_icon_core::PixelRect;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn export_creates_valid_png() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(PixelRect::new(0, 0, 1, 1), [10, 20, 30, 255]);
        let dir = scratch_dir("devhelper_icon_test_png");
        let path = dir.join("test_export.png");
        write_png(&canvas, &path).expect("export should succeed");

        let mut file = std::fs::File::open(&path).expect("file should exist");
        let mut header = [0u8; 8];
        file.read_exact(&mut header).expect("should read header");
        assert_eq!(&header, b"\x89PNG\r\n\x1a\n", "valid PNG signature");

        let decoder = png::Decoder::new(std::fs::File::open(&path).expect("file should exist"));
        let mut reader = decoder.read_info().expect("should read info");
        assert!(
            reader
                .info()
                .uncompressed_latin1_text
                .iter()
                .any(|t| t.keyword == "Software" && t.text == SOFTWARE_TAG),
            "Should contain Software text chunk"
        );
        let mut buf = vec![0u8; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf).expect("should decode");
        assert_eq!((frame.width, frame.height), (4, 4));
        assert_eq!(&buf[..frame.buffer_size()], canvas.pixels.as_slice());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn png_overwrites_existing_file() {
        let dir = scratch_dir("devhelper_icon_test_png_overwrite");
        let path = dir.join("icon.png");
        std::fs::write(&path, b"stale").unwrap();
        write_png(&Canvas::new(2, 2), &path).expect("export should succeed");
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn png_into_missing_directory_reports_path() {
        let path = std::env::temp_dir()
            .join("devhelper_icon_test_missing_dir")
            .join("nested")
            .join("icon.png");
        match write_png(&Canvas::new(2, 2), &path) {
            Err(RenderError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn ico_stores_every_size_smallest_first() {
        let dir = scratch_dir("devhelper_icon_test_ico");
        let path = dir.join("icon.ico");
        let canvases = vec![Canvas::new(48, 48), Canvas::new(16, 16), Canvas::new(32, 32)];
        write_ico(&canvases, &path).expect("export should succeed");

        let icon_dir = ico::IconDir::read(std::fs::File::open(&path).unwrap()).unwrap();
        let sizes: Vec<(u32, u32)> = icon_dir
            .entries()
            .iter()
            .map(|e| (e.width(), e.height()))
            .collect();
        assert_eq!(sizes, [(16, 16), (32, 32), (48, 48)]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_ico_is_rejected() {
        let path = std::env::temp_dir().join("devhelper_icon_test_empty.ico");
        assert!(matches!(write_ico(&[], &path), Err(RenderError::EmptyIcon)));
        assert!(!path.exists());
    }
}
