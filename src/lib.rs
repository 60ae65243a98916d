//! # qistyle
//!
//! Styled QR code rendering. Each dark module is drawn as a piece whose shape depends on its
//! neighbours, and the pieces are composed into a single SVG document with optional eye styles,
//! gradient fill, background image and centred logo.
//!
//! ## Features
//!
//! - Encode text into QR Code Model 2 symbols (versions 1–40, four error correction levels).
//! - Classify every module by its 8-neighbourhood into one of seven piece types at four
//!   orientations.
//! - Body styles: square, circle, diamond, dot, ninja, sharp. Eye styles: square, circle, diamond.
//! - Solid, linear gradient or background image fill, and a logo overlay that clears the modules
//!   beneath it.
//! - Configuration from JSON, with the same camelCase field names.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Example
//!
//! ```rust
//! use qistyle::config::RenderConfig;
//! use qistyle::helper::generate_svg_string;
//! use qistyle::style::{CodeStyle, EyeStyle};
//!
//! let config = RenderConfig {
//!     size: 300.0,
//!     code_style: CodeStyle::Sharp,
//!     outer_eye_style: EyeStyle::Diamond,
//!     linear_gradient: Some(vec!["#ff8800".into(), "#aa00ff".into()]),
//!     ..RenderConfig::default()
//! };
//! let svg = generate_svg_string("https://example.com", &config).unwrap();
//! assert!(svg.contains("url(#grad)"));
//! ```
//!
//! Working from a grid and looking at the pieces directly:
//!
//! ```rust
//! use qistyle::grid::ModuleGrid;
//! use qistyle::piece::{classify, Orientation, PieceType};
//!
//! let grid = ModuleGrid::from_rows(&[
//!     "...",
//!     ".##",
//!     ".#.",
//! ]).unwrap();
//! let piece = classify(1, 1, &grid);
//! assert_eq!(piece.piece_type, PieceType::Corner);
//! assert_eq!(piece.orientation, Orientation::Deg180);
//! ```
//!
//! ## Modules
//!
//! - [`qrcode`]: QR code encoding.
//! - [`grid`]: The module grid and finder eye regions.
//! - [`piece`]: Neighbour classification.
//! - [`style`]: Piece painters for each style.
//! - [`overlap`]: Logo exclusion test.
//! - [`compose`]: Draw lists and SVG output.
//! - [`config`]: Render configuration.
//! - [`helper`]: One-call generation, saving and previews.

pub mod compose;
pub mod config;
pub mod error;
pub mod grid;
pub mod helper;
pub mod overlap;
pub mod piece;
pub mod primitive;
pub mod qrcode;
pub mod style;

pub use error::{Error, Result};
