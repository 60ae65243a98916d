//! Turns a module grid into draw lists, and draw lists into an SVG document.

use std::io::Cursor;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;

use crate::config::{Fill, RenderConfig};
use crate::error::Result;
use crate::grid::ModuleGrid;
use crate::overlap::{overlaps, LogoBox};
use crate::piece::classify;
use crate::primitive::{escape_attr, Primitive};
use crate::style::{Cell, StyleSet};

/// Shapes for one render pass, in row-major scan order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawLists {
    /// One primitive per dark module.
    pub filled: Vec<Primitive>,
    /// One primitive per light module; punched out of the background image.
    pub unfilled: Vec<Primitive>,
}

/// Classifies and paints every module of `grid`.
///
/// When `config.logo` is set, modules under the logo box are left out of both lists.
pub fn draw_lists(grid: &ModuleGrid, config: &RenderConfig) -> DrawLists {
    let styles = StyleSet::from_config(config);
    let logo = config
        .logo
        .as_ref()
        .map(|_| LogoBox::centered(config.size, config.logo_size));
    let n = grid.size();
    let mut lists = DrawLists {
        filled: Vec::with_capacity(n * n),
        unfilled: Vec::new(),
    };

    for y in 0..n {
        for x in 0..n {
            if let Some(logo) = &logo {
                let cell = Cell::locate(x, y, grid, config);
                if overlaps(cell.px, cell.py, cell.width, cell.height, logo) {
                    continue;
                }
            }
            let descriptor = classify(x, y, grid);
            let piece = styles
                .painter_for(grid.region(x, y))
                .render(x, y, grid, &descriptor, config);
            if grid.get(x, y) {
                lists.filled.push(piece);
            } else {
                lists.unfilled.push(piece);
            }
        }
    }
    lists
}

/// Images the document embeds, already encoded as data URIs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbeddedImages {
    pub logo: Option<String>,
    pub background: Option<String>,
}

impl EmbeddedImages {
    /// Loads the logo and background image named in the config.
    pub fn load(config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            logo: config.logo.as_deref().map(data_uri).transpose()?,
            background: config.background_image.as_deref().map(data_uri).transpose()?,
        })
    }
}

/// Reads any format `image` understands and re-encodes it as a base64 PNG data URI.
pub fn data_uri(path: &Path) -> Result<String> {
    let img = image::open(path)?;
    let mut png: Vec<u8> = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

/// Validates the config, loads its images and renders the SVG document.
pub fn render_svg(grid: &ModuleGrid, config: &RenderConfig) -> Result<String> {
    config.validate()?;
    let images = EmbeddedImages::load(config)?;
    Ok(compose_svg(grid, config, &images))
}

/// Writes the SVG document for already loaded images.
///
/// The dark modules become a clip path over a full-canvas rectangle, so a single colour or a
/// gradient flows through all of them at once. With a background image the light modules are
/// clipped instead and painted white over the image.
pub fn compose_svg(grid: &ModuleGrid, config: &RenderConfig, images: &EmbeddedImages) -> String {
    let lists = draw_lists(grid, config);
    let size = config.size;
    let mut svg = String::new();

    svg += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    svg += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{0}\" height=\"{0}\" viewBox=\"0 0 {0} {0}\">\n",
        size
    );

    match (config.fill(), &images.background) {
        (Fill::BackgroundImage(_), Some(href)) => {
            let cell = Cell::locate(0, 0, grid, config);
            let inset_x = f64::from(config.padding) * cell.width;
            let inset_y = f64::from(config.padding) * cell.height;
            svg += "\t<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"white\"/>\n";
            svg += &format!(
                "\t<image href=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" preserveAspectRatio=\"none\"/>\n",
                href,
                inset_x,
                inset_y,
                size - 2.0 * inset_x,
                size - 2.0 * inset_y
            );
            write_clip(&mut svg, &lists.unfilled, None);
            svg += "\t<rect clip-path=\"url(#clip)\" x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"white\"/>\n";
        }
        (Fill::LinearGradient { from, to, direction }, _) => {
            write_background(&mut svg, &config.background_color);
            let gradient = format!(
                "\t\t<linearGradient id=\"grad\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">\n\
                 \t\t\t<stop offset=\"0\" stop-color=\"{}\" stop-opacity=\"1\"/>\n\
                 \t\t\t<stop offset=\"1\" stop-color=\"{}\" stop-opacity=\"1\"/>\n\
                 \t\t</linearGradient>\n",
                direction[0],
                direction[1],
                direction[2],
                direction[3],
                escape_attr(from),
                escape_attr(to)
            );
            write_clip(&mut svg, &lists.filled, Some(&gradient));
            svg += "\t<rect clip-path=\"url(#clip)\" x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"url(#grad)\"/>\n";
        }
        _ => {
            // Also reached when a background image is configured but was not loaded.
            write_background(&mut svg, &config.background_color);
            write_clip(&mut svg, &lists.filled, None);
            svg += &format!(
                "\t<rect clip-path=\"url(#clip)\" x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
                escape_attr(&config.color)
            );
        }
    }

    if let Some(href) = &images.logo {
        let logo = LogoBox::centered(size, config.logo_size);
        svg += &format!(
            "\t<image href=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>\n",
            href, logo.x, logo.y, logo.size, logo.size
        );
    }

    svg += "</svg>\n";
    svg
}

fn write_background(svg: &mut String, color: &str) {
    if color != "transparent" {
        *svg += &format!(
            "\t<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            escape_attr(color)
        );
    }
}

fn write_clip(svg: &mut String, pieces: &[Primitive], extra_defs: Option<&str>) {
    *svg += "\t<defs>\n\t\t<clipPath id=\"clip\">\n";
    for piece in pieces {
        *svg += "\t\t";
        piece.write_svg(svg);
    }
    *svg += "\t\t</clipPath>\n";
    if let Some(defs) = extra_defs {
        *svg += defs;
    }
    *svg += "\t</defs>\n";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Shape;
    use crate::style::CodeStyle;
    use std::path::PathBuf;

    fn checker() -> ModuleGrid {
        ModuleGrid::from_fn(9, |x, y| (x + y) % 2 == 0)
    }

    fn config() -> RenderConfig {
        RenderConfig { size: 110.0, padding: 1, ..RenderConfig::default() }
    }

    #[test]
    fn test_every_module_lands_in_one_list() {
        let grid = checker();
        let lists = draw_lists(&grid, &config());
        assert_eq!(lists.filled.len(), grid.dark_count());
        assert_eq!(lists.filled.len() + lists.unfilled.len(), 81);
        // Scan order is row by row.
        assert_eq!(lists.filled[0].key, "10:10");
        assert_eq!(lists.filled[1].key, "30:10");
        assert_eq!(lists.unfilled[0].key, "20:10");
    }

    #[test]
    fn test_logo_box_needs_a_logo() {
        let grid = checker();
        let without = draw_lists(&grid, &RenderConfig { logo_size: 50.0, ..config() });
        assert_eq!(without.filled.len() + without.unfilled.len(), 81);

        let with = draw_lists(
            &grid,
            &RenderConfig { logo: Some(PathBuf::from("logo.png")), logo_size: 50.0, ..config() },
        );
        let kept = with.filled.len() + with.unfilled.len();
        assert!(kept < 81);
        // The centre module (4, 4) sits at 50..60, inside the 30..80 box.
        assert!(with.filled.iter().all(|p| p.key != "50:50"));
    }

    #[test]
    fn test_eyes_use_their_own_painter() {
        let grid = ModuleGrid::from_fn(21, |_, _| true);
        let config = RenderConfig {
            size: 230.0,
            code_style: CodeStyle::Dot,
            ..RenderConfig::default()
        };
        let lists = draw_lists(&grid, &config);
        // (0, 0) is an outer eye module, drawn square by default.
        assert!(matches!(lists.filled[0].shape, Shape::Rect { .. }));
        // (10, 10) is body.
        let body = lists.filled.iter().find(|p| p.key == "110:110").unwrap();
        assert!(matches!(body.shape, Shape::Circle { .. }));
    }

    #[test]
    fn test_solid_document() {
        let svg = compose_svg(&checker(), &config(), &EmbeddedImages::default());
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("viewBox=\"0 0 110 110\""));
        assert!(svg.contains("<clipPath id=\"clip\">"));
        assert!(svg.contains("fill=\"black\"/>\n</svg>"));
        assert_eq!(svg.matches("data-key=").count(), checker().dark_count());
    }

    #[test]
    fn test_gradient_document() {
        let config = RenderConfig {
            linear_gradient: Some(vec!["#f00".into(), "#00f".into()]),
            ..config()
        };
        let svg = compose_svg(&checker(), &config, &EmbeddedImages::default());
        assert!(svg.contains("x1=\"0\" y1=\"0\" x2=\"170\" y2=\"0\""));
        assert!(svg.contains("stop-color=\"#f00\""));
        assert!(svg.contains("fill=\"url(#grad)\""));
    }

    #[test]
    fn test_background_image_document() {
        let config = RenderConfig {
            background_image: Some(PathBuf::from("bg.png")),
            ..config()
        };
        let images = EmbeddedImages {
            logo: Some("data:image/png;base64,AAAA".into()),
            background: Some("data:image/png;base64,BBBB".into()),
        };
        let svg = compose_svg(&checker(), &config, &images);
        assert!(svg.contains("href=\"data:image/png;base64,BBBB\" x=\"10\" y=\"10\" width=\"90\" height=\"90\""));
        // Light modules are the clip.
        let light = 81 - checker().dark_count();
        assert_eq!(svg.matches("data-key=").count(), light);
        assert!(svg.contains("href=\"data:image/png;base64,AAAA\" x=\"5\" y=\"5\" width=\"100\" height=\"100\""));
    }
}
