//! Drawable shapes produced by the piece painters.

use crate::piece::Orientation;

/// Geometry of one primitive, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle with its top left corner at `(x, y)`.
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
    /// Rectangle centred on `(cx, cy)` and rotated `rotation` degrees about that centre.
    RotatedRect { cx: f64, cy: f64, width: f64, height: f64, rotation: f64 },
}

/// An axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Whether `other` lies inside `self`, allowing `epsilon` of floating point slack.
    pub fn contains(&self, other: &Bounds, epsilon: f64) -> bool {
        other.min_x >= self.min_x - epsilon &&
            other.min_y >= self.min_y - epsilon &&
            other.max_x <= self.max_x + epsilon &&
            other.max_y <= self.max_y + epsilon
    }
}

/// One filled shape in a draw list.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    /// `"{px}:{py}"` of the module's top left pixel; unique within one draw list.
    pub key: String,
    pub shape: Shape,
    pub fill: String,
    /// Orientation of the piece the module was classified as. Geometry does not depend on it.
    pub orientation: Orientation,
}

impl Primitive {
    pub fn new(px: f64, py: f64, shape: Shape, fill: &str) -> Self {
        Self {
            key: format!("{}:{}", px, py),
            shape,
            fill: fill.to_string(),
            orientation: Orientation::Deg0,
        }
    }

    pub fn oriented(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn bounds(&self) -> Bounds {
        match self.shape {
            Shape::Rect { x, y, width, height } => Bounds {
                min_x: x,
                min_y: y,
                max_x: x + width,
                max_y: y + height,
            },
            Shape::Circle { cx, cy, r } => Bounds {
                min_x: cx - r,
                min_y: cy - r,
                max_x: cx + r,
                max_y: cy + r,
            },
            Shape::RotatedRect { cx, cy, width, height, rotation } => {
                let (sin, cos) = rotation.to_radians().sin_cos();
                let half_w = (width * cos.abs() + height * sin.abs()) / 2.0;
                let half_h = (width * sin.abs() + height * cos.abs()) / 2.0;
                Bounds {
                    min_x: cx - half_w,
                    min_y: cy - half_h,
                    max_x: cx + half_w,
                    max_y: cy + half_h,
                }
            }
        }
    }

    /// Appends this primitive as an SVG element.
    pub fn write_svg(&self, out: &mut String) {
        let fill = escape_attr(&self.fill);
        *out += &match self.shape {
            Shape::Rect { x, y, width, height } => format!(
                "\t<rect data-key=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
                self.key, x, y, width, height, fill
            ),
            Shape::Circle { cx, cy, r } => format!(
                "\t<circle data-key=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
                self.key, cx, cy, r, fill
            ),
            Shape::RotatedRect { cx, cy, width, height, rotation } => format!(
                "\t<rect data-key=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" transform=\"translate({} {}) rotate({})\" fill=\"{}\"/>\n",
                self.key,
                -width / 2.0,
                -height / 2.0,
                width,
                height,
                cx,
                cy,
                rotation,
                fill
            ),
        };
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.write_svg(&mut out);
        out
    }
}

/// Escapes a value for use inside a double-quoted XML attribute.
pub(crate) fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_svg() {
        let p = Primitive::new(10.0, 20.0, Shape::Rect { x: 10.0, y: 20.0, width: 10.0, height: 10.0 }, "black");
        assert_eq!(p.key, "10:20");
        assert_eq!(
            p.to_svg(),
            "\t<rect data-key=\"10:20\" x=\"10\" y=\"20\" width=\"10\" height=\"10\" fill=\"black\"/>\n"
        );
    }

    #[test]
    fn test_rotated_bounds_reach_the_diagonal() {
        let p = Primitive::new(
            0.0,
            0.0,
            Shape::RotatedRect { cx: 5.0, cy: 5.0, width: 10.0, height: 10.0, rotation: 45.0 },
            "black",
        );
        let b = p.bounds();
        let half_diagonal = 50f64.sqrt();
        assert!((b.max_x - (5.0 + half_diagonal)).abs() < 1e-9);
        assert!((b.min_y - (5.0 - half_diagonal)).abs() < 1e-9);
        assert!(p.to_svg().contains("transform=\"translate(5 5) rotate(45)\""));
    }

    #[test]
    fn test_fill_is_escaped() {
        let p = Primitive::new(0.0, 0.0, Shape::Circle { cx: 1.0, cy: 1.0, r: 1.0 }, "\"><script>");
        assert!(p.to_svg().contains("fill=\"&quot;&gt;&lt;script&gt;\""));
    }
}
