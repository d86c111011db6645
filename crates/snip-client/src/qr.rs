//! QR code generation for short URLs
//!
//! Two renderings of the same code: a unicode half-block string for the
//! terminal preview and a PNG written to disk for download.

use std::path::{Path, PathBuf};

use image::Luma;
use qrcode::render::unicode::Dense1x2;
use qrcode::QrCode;
use snip_core::prelude::*;

/// Minimum width/height of a saved PNG in pixels
pub const QR_PNG_SIZE: u32 = 200;

/// File name of the PNG for a short code
pub fn qr_file_name(code: &str) -> String {
    format!("qr-code-{code}.png")
}

fn encode(data: &str) -> Result<QrCode> {
    QrCode::new(data.as_bytes()).map_err(|e| Error::qr_code(e.to_string()))
}

/// Render `data` as text using half-block characters
///
/// Colors are inverted for dark terminal backgrounds, so the code scans
/// when the terminal draws light text on dark.
pub fn render_unicode(data: &str) -> Result<String> {
    let code = encode(data)?;
    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}

/// Write `data` as a PNG named `qr-code-{code}.png` into `dir`
///
/// Returns the written path. An existing file of the same name is replaced.
pub fn save_png(data: &str, code: &str, dir: &Path) -> Result<PathBuf> {
    let qr = encode(data)?;
    let image = qr
        .render::<Luma<u8>>()
        .min_dimensions(QR_PNG_SIZE, QR_PNG_SIZE)
        .quiet_zone(true)
        .build();

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create download directory {}", dir.display()))?;
    let path = dir.join(qr_file_name(code));
    image
        .save(&path)
        .map_err(|e| Error::qr_code(format!("failed to write {}: {}", path.display(), e)))?;
    info!("Saved QR code for {} to {}", code, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_contains_code() {
        assert_eq!(qr_file_name("abc123"), "qr-code-abc123.png");
    }

    #[test]
    fn test_render_unicode_is_square_block() {
        let text = render_unicode("http://localhost:8080/abc123").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.len() > 10);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_render_unicode_changes_with_data() {
        let a = render_unicode("http://localhost:8080/aaa").unwrap();
        let b = render_unicode("http://localhost:8080/bbb").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_save_png_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_png("http://localhost:8080/abc123", "abc123", dir.path()).unwrap();
        assert_eq!(path, dir.path().join("qr-code-abc123.png"));

        let bytes = std::fs::read(&path).unwrap();
        // PNG signature
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_save_png_meets_minimum_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_png("http://x.y/z", "z", dir.path()).unwrap();
        let img = image::open(&path).unwrap();
        assert!(img.width() >= QR_PNG_SIZE);
        assert!(img.height() >= QR_PNG_SIZE);
    }

    #[test]
    fn test_save_png_into_unusable_dir_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let err = save_png("http://x.y/z", "z", &blocker.join("qr")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_oversized_data_is_qr_error() {
        let data = "x".repeat(8000);
        assert!(matches!(
            render_unicode(&data),
            Err(Error::QrCode { .. })
        ));
    }
}
