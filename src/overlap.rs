//! Logo exclusion zone.
//!
//! Modules under the logo are dropped from both draw lists. The test only looks at two corners
//! of the cell, so a cell whose edge crosses the box with neither corner inside it is kept. Changing
//! that would change which modules survive near a logo, and with them scannability.

/// Square exclusion box centred on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoBox {
    /// Top left corner.
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl LogoBox {
    pub fn centered(canvas_size: f64, logo_size: f64) -> Self {
        let offset = canvas_size / 2.0 - logo_size / 2.0;
        Self { x: offset, y: offset, size: logo_size }
    }

    /// Whether the point lies strictly inside the box; points on the border are outside.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px > self.x && px < self.x + self.size && py > self.y && py < self.y + self.size
    }
}

/// Whether the cell's top left or bottom right corner falls strictly inside `logo`.
pub fn overlaps(px: f64, py: f64, cell_width: f64, cell_height: f64, logo: &LogoBox) -> bool {
    logo.contains(px, py) || logo.contains(px + cell_width, py + cell_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_box() {
        assert_eq!(LogoBox::centered(250.0, 100.0), LogoBox { x: 75.0, y: 75.0, size: 100.0 });
    }

    #[test]
    fn test_inside_and_outside() {
        let logo = LogoBox::centered(110.0, 30.0); // 40..70
        assert!(overlaps(50.0, 50.0, 10.0, 10.0, &logo));
        assert!(!overlaps(0.0, 0.0, 10.0, 10.0, &logo));
        assert!(!overlaps(80.0, 50.0, 10.0, 10.0, &logo));
    }

    #[test]
    fn test_single_corner_is_enough() {
        let logo = LogoBox::centered(110.0, 30.0);
        // Bottom right at (45, 45)
        assert!(overlaps(35.0, 35.0, 10.0, 10.0, &logo));
        // Top left at (65, 65)
        assert!(overlaps(65.0, 65.0, 10.0, 10.0, &logo));
    }

    #[test]
    fn test_border_touch_is_not_inside() {
        let logo = LogoBox::centered(110.0, 30.0);
        // Cell ending exactly on the box edge
        assert!(!overlaps(30.0, 30.0, 10.0, 10.0, &logo));
    }

    #[test]
    fn test_edge_crossing_without_corner_is_missed() {
        // The cell straddles the box's left edge, but its top left corner is left of it
        // and its bottom right corner is below it.
        let logo = LogoBox { x: 40.0, y: 40.0, size: 30.0 };
        assert!(!overlaps(35.0, 65.0, 10.0, 10.0, &logo));
    }

    #[test]
    fn test_cell_larger_than_logo() {
        let logo = LogoBox { x: 42.0, y: 42.0, size: 6.0 };
        assert!(!overlaps(40.0, 40.0, 10.0, 10.0, &logo));
    }
}
