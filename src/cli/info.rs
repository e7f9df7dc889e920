use std::fs;
use std::path::Path;

use crate::bitmap::{probe_bitmap, row_stride};
use crate::error::{Result, ShareError};

/// Renders the headers of a BMP file, including the repurposed reserved
/// fields. Works on any BMP the probe can parse, not only 8-bpp ones.
pub fn show_info(path: &Path) -> Result<String> {
    let probe = probe_bitmap(path)?.ok_or_else(|| ShareError::InvalidBmp {
        path: path.to_path_buf(),
    })?;
    let actual_size = fs::metadata(path)?.len();

    let mut output = String::new();

    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!(
        "Size: {} bytes in header, {} on disk\n",
        probe.bmp.size, actual_size
    ));
    output.push_str(&format!(
        "Pixel array offset: {}\n",
        probe.bmp.offset
    ));
    output.push_str(&format!("Permutation seed: {}\n", probe.bmp.seed));
    if probe.bmp.shadow_index == 0 {
        output.push_str("Shadow index: 0 (not a shadow)\n");
    } else {
        output.push_str(&format!("Shadow index: {}\n", probe.bmp.shadow_index));
    }
    output.push('\n');

    let orientation = if probe.dib.height < 0 {
        "top-down"
    } else {
        "bottom-up"
    };
    output.push_str(&format!("DIB header: {} bytes\n", probe.dib.size));
    output.push_str(&format!(
        "Dimensions: {} x {} ({})\n",
        probe.dib.width,
        probe.dib.height.unsigned_abs(),
        orientation
    ));
    output.push_str(&format!(
        "Planes: {}, depth: {} bpp, compression: {}\n",
        probe.dib.planes, probe.dib.depth, probe.dib.compression
    ));
    output.push_str(&format!(
        "Pixel array: {} bytes (row stride {})\n",
        probe.dib.pixel_array_size,
        row_stride(probe.dib.width)
    ));
    output.push_str(&format!(
        "Resolution: {} x {} px/m\n",
        probe.dib.hres, probe.dib.vres
    ));
    output.push_str(&format!(
        "Palette colors: {}, important: {}\n",
        probe.dib.ncolors, probe.dib.nimpcolors
    ));

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::{write_bitmap, Bitmap};
    use tempfile::tempdir;

    #[test]
    fn reports_shadow_metadata() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shadow.bmp");
        write_bitmap(&Bitmap::new_shadow(16, 8, 691, 2), &path).unwrap();

        let info = show_info(&path).unwrap();
        assert!(info.contains("Permutation seed: 691"));
        assert!(info.contains("Shadow index: 2"));
        assert!(info.contains("Dimensions: 16 x 8 (bottom-up)"));
        assert!(info.contains("depth: 8 bpp"));
    }

    #[test]
    fn marks_plain_bitmaps_as_non_shadows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.bmp");
        write_bitmap(&Bitmap::new(4, -4, 0), &path).unwrap();

        let info = show_info(&path).unwrap();
        assert!(info.contains("Shadow index: 0 (not a shadow)"));
        assert!(info.contains("top-down"));
    }

    #[test]
    fn refuses_foreign_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foreign");
        std::fs::write(&path, vec![1u8; 100]).unwrap();

        assert!(matches!(
            show_info(&path),
            Err(ShareError::InvalidBmp { .. })
        ));
    }
}
