use crate::compose::render_svg;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::grid::ModuleGrid;
use crate::qrcode::{QrCode, QrCodeEcc};

use image::{GrayImage, Luma};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/*---- Utilities ----*/

/// Encodes `content` and returns its module grid.
///
/// # Errors
///
/// Returns [`crate::Error::DataTooLong`] if the content does not fit in a version 40 symbol.
pub fn encode_grid(content: &str, ecl: QrCodeEcc) -> Result<ModuleGrid> {
    let qr = QrCode::encode_text(content, ecl)?;
    Ok(ModuleGrid::from(&qr))
}

/// Generates a styled QR Code SVG for `content`.
///
/// `config.content` is ignored; the error correction level, styles, fill and logo all come from
/// `config`.
///
/// # Example
///
/// ```
/// use qistyle::config::RenderConfig;
/// use qistyle::helper::generate_svg_string;
/// use qistyle::style::CodeStyle;
///
/// let config = RenderConfig { code_style: CodeStyle::Dot, ..RenderConfig::default() };
/// let svg = generate_svg_string("Hello, World!", &config).unwrap();
/// assert!(svg.contains("<circle"));
/// ```
pub fn generate_svg_string(content: &str, config: &RenderConfig) -> Result<String> {
    let grid = encode_grid(content, config.ecl)?;
    render_svg(&grid, config)
}

/// Renders `config.content` with `config`.
pub fn generate_from_config(config: &RenderConfig) -> Result<String> {
    generate_svg_string(&config.content, config)
}

/// Saves an SVG document to `directory_path/filename.svg`.
///
/// # Arguments
///
/// * `svg` - The document to write.
/// * `directory_path` - Optional. Defaults to "generated"; created if missing.
/// * `filename` - Optional. Defaults to a timestamp.
///
/// Returns the path that was written.
pub fn save_svg(svg: &str, directory_path: Option<&str>, filename: Option<&str>) -> Result<PathBuf> {
    let directory_path = directory_path.unwrap_or("generated");
    let filename = match filename {
        Some(name) => name.to_string(),
        None => {
            let since_the_epoch = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            since_the_epoch.as_millis().to_string()
        }
    };

    if !Path::new(directory_path).exists() {
        fs::create_dir_all(directory_path)?;
    }

    let file_path = Path::new(directory_path).join(format!("{}.svg", filename));
    fs::write(&file_path, svg)?;
    Ok(file_path)
}

/// Block-art preview of the grid, two characters per module, with `border` light modules around.
pub fn to_ascii(grid: &ModuleGrid, border: usize) -> String {
    let n = grid.size() as isize;
    let border = border as isize;
    let mut out = String::new();
    for y in -border..n + border {
        for x in -border..n + border {
            let dark = (0..n).contains(&x) && (0..n).contains(&y) && grid.get(x as usize, y as usize);
            let c: char = if dark { '█' } else { ' ' };
            out.push(c);
            out.push(c);
        }
        out.push('\n');
    }
    out
}

/// Prints the grid to the console.
pub fn print_qr(grid: &ModuleGrid) {
    println!("{}", to_ascii(grid, 4));
}

/// Plain raster of the grid, one pixel per module, with a light border.
///
/// Useful to check what the styled renderer is working from.
pub fn generate_image_buffer(grid: &ModuleGrid, border: u32) -> GrayImage {
    let n = grid.size() as u32;
    let size = n + 2 * border;
    let mut img = GrayImage::new(size, size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let inside = (border..border + n).contains(&x) && (border..border + n).contains(&y);
        let dark = inside && grid.get((x - border) as usize, (y - border) as usize);
        *pixel = if dark { Luma([0u8]) } else { Luma([255u8]) };
    }
    img
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_svg_string() {
        let svg = generate_svg_string("HELLO WORLD", &RenderConfig::default()).unwrap();
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_generate_image_buffer() {
        let grid = encode_grid("Hello, world!", QrCodeEcc::Low).unwrap();
        let img = generate_image_buffer(&grid, 4);

        // Version 1 is 21 modules, plus 4 on each side.
        assert_eq!(img.dimensions(), (29, 29));
        assert_eq!(img.get_pixel(4, 4), &Luma([0u8]));
        assert_eq!(img.get_pixel(0, 0), &Luma([255u8]));
    }

    #[test]
    fn test_to_ascii() {
        let grid = ModuleGrid::from_rows(&["#.", ".#"]).unwrap();
        assert_eq!(to_ascii(&grid, 1), "        \n  ██    \n    ██  \n        \n");
    }

    #[test]
    fn test_save_svg() {
        let dir = std::env::temp_dir().join("qistyle-save-test");
        let dir = dir.to_string_lossy().into_owned();
        let path = save_svg("<svg/>", Some(&dir), Some("qr")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
        assert!(path.ends_with("qr.svg"));
    }
}
