//! Piece painters: one geometry vocabulary per visual style.
//!
//! Style names from the configuration are resolved into a [`Painter`] once per render pass
//! (see [`StyleSet`]); the per-module loop then only matches on a closed enum. Every painter
//! takes the same inputs and works out the module's cell on its own, so they are interchangeable.

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::grid::{ModuleGrid, Region};
use crate::piece::{PieceDescriptor, PieceType};
use crate::primitive::{Primitive, Shape};

/// Style of the body modules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStyle {
    #[default]
    Square,
    Circle,
    Diamond,
    Dot,
    Ninja,
    Sharp,
}

/// Style of the inner or outer finder eye modules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeStyle {
    #[default]
    Square,
    Circle,
    Diamond,
}

/// Pixel placement of one module.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Top left corner.
    pub px: f64,
    pub py: f64,
    pub width: f64,
    pub height: f64,
}

impl Cell {
    /// `cell = size / (N + 2 * padding)`, offset by `padding` cells on each side.
    pub fn locate(x: usize, y: usize, grid: &ModuleGrid, config: &RenderConfig) -> Self {
        let modules = (grid.size() + 2 * config.padding as usize) as f64;
        let width = config.size / modules;
        let height = config.size / modules;
        let padding = f64::from(config.padding);
        Self {
            px: x as f64 * width + padding * width,
            py: y as f64 * height + padding * height,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.px + self.width / 2.0, self.py + self.height / 2.0)
    }

    fn rect(&self) -> Shape {
        Shape::Rect { x: self.px, y: self.py, width: self.width, height: self.height }
    }

    fn circle(&self, r: f64) -> Shape {
        let (cx, cy) = self.center();
        Shape::Circle { cx, cy, r }
    }
}

/// The distinct geometry families behind the style names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Painter {
    /// Full-cell rectangle. Every other painter falls back to this.
    Square,
    /// Circle of radius `cell / 3`.
    Dot,
    /// Inscribed circle, radius `cell / 2`.
    Circle,
    /// Full-cell rectangle turned 45 degrees about the cell centre.
    Diamond,
    /// Reads the piece type: isolated modules become inscribed circles, the rest full-cell
    /// rectangles. Connected pieces share one outline whatever their orientation.
    Sharp,
}

impl From<CodeStyle> for Painter {
    fn from(style: CodeStyle) -> Self {
        match style {
            CodeStyle::Square => Painter::Square,
            CodeStyle::Circle => Painter::Circle,
            CodeStyle::Diamond => Painter::Diamond,
            CodeStyle::Dot => Painter::Dot,
            CodeStyle::Ninja | CodeStyle::Sharp => Painter::Sharp,
        }
    }
}

impl From<EyeStyle> for Painter {
    fn from(style: EyeStyle) -> Self {
        match style {
            EyeStyle::Square => Painter::Square,
            EyeStyle::Circle => Painter::Circle,
            EyeStyle::Diamond => Painter::Diamond,
        }
    }
}

impl Painter {
    /// Draws the module at `(x, y)` as one primitive filled with `config.color`.
    pub fn render(
        self,
        x: usize,
        y: usize,
        grid: &ModuleGrid,
        descriptor: &PieceDescriptor,
        config: &RenderConfig,
    ) -> Primitive {
        let cell = Cell::locate(x, y, grid, config);
        let shape = match self {
            Painter::Square => cell.rect(),
            Painter::Dot => cell.circle(cell.width / 3.0),
            Painter::Circle => cell.circle(cell.width / 2.0),
            Painter::Diamond => {
                let (cx, cy) = cell.center();
                Shape::RotatedRect {
                    cx,
                    cy,
                    width: cell.width,
                    height: cell.height,
                    rotation: 45.0,
                }
            }
            Painter::Sharp => match descriptor.piece_type {
                PieceType::Isolated => cell.circle(cell.width / 2.0),
                _ => cell.rect(),
            },
        };
        Primitive::new(cell.px, cell.py, shape, &config.color).oriented(descriptor.orientation)
    }
}

/// Painters for the three regions of the symbol, resolved once per render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleSet {
    pub body: Painter,
    pub inner_eye: Painter,
    pub outer_eye: Painter,
}

impl StyleSet {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            body: config.code_style.into(),
            inner_eye: config.inner_eye_style.into(),
            outer_eye: config.outer_eye_style.into(),
        }
    }

    pub fn painter_for(&self, region: Region) -> Painter {
        match region {
            Region::Body => self.body,
            Region::InnerEye => self.inner_eye,
            Region::OuterEye => self.outer_eye,
        }
    }
}
