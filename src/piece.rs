//! Neighbour classification.
//!
//! Every module is described by the dark modules around it. Instead of enumerating all raw
//! neighbour patterns, the pattern is reduced to one of seven piece shapes plus a rotation: the
//! same physical piece is reused at four orientations.
//!
//! Piece names follow the classic module-piece naming: the digits count neighbours and the
//! letters tell them apart, so `2a1b` is two adjacent sides with the corner between them empty.

use core::fmt;
use core::str::FromStr;

use crate::grid::ModuleGrid;

/// The eight neighbours of one module. Off-grid neighbours are `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborMask {
    pub top_left: bool,
    pub top: bool,
    pub top_right: bool,
    pub left: bool,
    pub right: bool,
    pub bottom_left: bool,
    pub bottom: bool,
    pub bottom_right: bool,
}

impl NeighborMask {
    /// Reads the neighbourhood of `(x, y)`. `y` grows downwards, so `top` is `(x, y - 1)`.
    pub fn around(x: usize, y: usize, grid: &ModuleGrid) -> Self {
        Self {
            top_left: grid.neighbor(x, y, -1, -1),
            top: grid.neighbor(x, y, 0, -1),
            top_right: grid.neighbor(x, y, 1, -1),
            left: grid.neighbor(x, y, -1, 0),
            right: grid.neighbor(x, y, 1, 0),
            bottom_left: grid.neighbor(x, y, -1, 1),
            bottom: grid.neighbor(x, y, 0, 1),
            bottom_right: grid.neighbor(x, y, 1, 1),
        }
    }

    /// Number of dark edge neighbours (top, left, right, bottom). Corners are not counted.
    pub fn surrounding_count(&self) -> u8 {
        [self.top, self.left, self.right, self.bottom]
            .iter()
            .filter(|&&n| n)
            .count() as u8
    }
}

/// The seven piece shapes a module can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    /// `1a`: no edge neighbours.
    Isolated,
    /// `2b`: a single edge neighbour.
    End,
    /// `1b3b`: two opposite edge neighbours.
    Straight,
    /// `2a1b`: two adjacent edge neighbours, the corner between them light.
    Corner,
    /// `2a1b1a`: two adjacent edge neighbours with the corner between them dark.
    FilledCorner,
    /// `2a1b2c`: three edge neighbours.
    Tee,
    /// `2a1b2c3b`: all four edge neighbours.
    Cross,
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::Isolated,
        PieceType::End,
        PieceType::Straight,
        PieceType::Corner,
        PieceType::FilledCorner,
        PieceType::Tee,
        PieceType::Cross,
    ];

    /// The short piece code, e.g. `"2a1b"`.
    pub fn code(self) -> &'static str {
        match self {
            PieceType::Isolated => "1a",
            PieceType::End => "2b",
            PieceType::Straight => "1b3b",
            PieceType::Corner => "2a1b",
            PieceType::FilledCorner => "2a1b1a",
            PieceType::Tee => "2a1b2c",
            PieceType::Cross => "2a1b2c3b",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a piece code is not one of the seven known codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown piece code {0:?}")]
pub struct UnknownPiece(pub String);

impl FromStr for PieceType {
    type Err = UnknownPiece;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceType::ALL
            .iter()
            .copied()
            .find(|p| p.code() == s)
            .ok_or_else(|| UnknownPiece(s.to_string()))
    }
}

/// Clockwise rotation applied to a piece's canonical shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    pub fn degrees(self) -> u16 {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 90,
            Orientation::Deg180 => 180,
            Orientation::Deg270 => 270,
        }
    }

    /// The orientation a quarter turn clockwise from this one.
    pub fn rotate_cw(self) -> Self {
        match self {
            Orientation::Deg0 => Orientation::Deg90,
            Orientation::Deg90 => Orientation::Deg180,
            Orientation::Deg180 => Orientation::Deg270,
            Orientation::Deg270 => Orientation::Deg0,
        }
    }
}

/// What to draw for one module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceDescriptor {
    pub piece_type: PieceType,
    pub orientation: Orientation,
}

impl PieceDescriptor {
    pub fn new(piece_type: PieceType, orientation: Orientation) -> Self {
        Self { piece_type, orientation }
    }
}

/// Classifies the module at `(x, y)` from its 8-neighbourhood.
///
/// Pure function of the grid contents around the coordinate; the module's own value does not
/// matter. `x` and `y` must lie in `[0, grid.size())`.
pub fn classify(x: usize, y: usize, grid: &ModuleGrid) -> PieceDescriptor {
    classify_mask(&NeighborMask::around(x, y, grid))
}

/// Classification proper, on an already read neighbourhood.
pub fn classify_mask(n: &NeighborMask) -> PieceDescriptor {
    use Orientation::*;
    use PieceType::*;

    let (piece_type, orientation) = match n.surrounding_count() {
        0 => {
            // With no edge neighbours these never fire; kept so the rule reads the same as the
            // other counts.
            let orientation = if n.right {
                Deg90
            } else if n.bottom {
                Deg180
            } else if n.left {
                Deg270
            } else {
                Deg0
            };
            (Isolated, orientation)
        }
        1 => (End, Deg0),
        2 if n.top && n.bottom => (Straight, Deg0),
        2 if n.left && n.right => (Straight, Deg90),
        2 => {
            let (orientation, corner) = if n.top && n.right {
                (Deg90, n.top_right)
            } else if n.right && n.bottom {
                (Deg180, n.bottom_right)
            } else if n.left && n.bottom {
                (Deg270, n.bottom_left)
            } else {
                (Deg0, n.top_left)
            };
            (if corner { FilledCorner } else { Corner }, orientation)
        }
        3 => {
            let orientation = if n.top && n.right && n.bottom {
                Deg90
            } else if n.right && n.bottom && n.left {
                Deg180
            } else if n.bottom && n.left && n.top {
                Deg270
            } else {
                Deg0
            };
            (Tee, orientation)
        }
        _ => (Cross, Deg0),
    };
    PieceDescriptor::new(piece_type, orientation)
}
