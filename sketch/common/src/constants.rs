//! Typed mirrors of the p5 mode constants.
//!
//! Each enum maps to the exact string (or number) p5 compares against, so the
//! web host can pass `as_str()` straight through.

pub const PI: f64 = std::f64::consts::PI;
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;
pub const QUARTER_PI: f64 = std::f64::consts::FRAC_PI_4;
pub const TWO_PI: f64 = std::f64::consts::TAU;
pub const TAU: f64 = TWO_PI;

macro_rules! string_mode {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_mode!(Renderer {
    P2D => "p2d",
    WebGl => "webgl",
});

string_mode!(Cursor {
    Arrow => "default",
    Cross => "crosshair",
    Hand => "pointer",
    Move => "move",
    Text => "text",
    Wait => "wait",
});

string_mode!(AngleMode {
    Degrees => "degrees",
    Radians => "radians",
});

string_mode!(ColorMode {
    Rgb => "rgb",
    Hsb => "hsb",
    Hsl => "hsl",
});

string_mode!(
    /// Interpretation of the coordinates passed to `rect`, `ellipse` and `image`.
    DrawMode {
        Corner => "corner",
        Corners => "corners",
        Radius => "radius",
        Center => "center",
    }
);

string_mode!(HorizontalAlign {
    Left => "left",
    Center => "center",
    Right => "right",
});

string_mode!(VerticalAlign {
    Top => "top",
    Center => "center",
    Bottom => "bottom",
    Baseline => "alphabetic",
});

string_mode!(ArcMode {
    Open => "open",
    Chord => "chord",
    Pie => "pie",
});

// p5 names these after the visual result, not the canvas value.
string_mode!(StrokeCap {
    Round => "round",
    Square => "butt",
    Project => "square",
});

string_mode!(StrokeJoin {
    Miter => "miter",
    Bevel => "bevel",
    Round => "round",
});

string_mode!(BlendMode {
    Blend => "source-over",
    Remove => "destination-out",
    Add => "lighter",
    Darkest => "darken",
    Lightest => "lighten",
    Difference => "difference",
    Subtract => "subtract",
    Exclusion => "exclusion",
    Multiply => "multiply",
    Screen => "screen",
    Replace => "copy",
    Overlay => "overlay",
    HardLight => "hard-light",
    SoftLight => "soft-light",
    Dodge => "color-dodge",
    Burn => "color-burn",
});

string_mode!(Filter {
    Threshold => "threshold",
    Gray => "gray",
    Opaque => "opaque",
    Invert => "invert",
    Posterize => "posterize",
    Dilate => "dilate",
    Erode => "erode",
    Blur => "blur",
});

string_mode!(TextStyle {
    Normal => "normal",
    Italic => "italic",
    Bold => "bold",
    BoldItalic => "bold italic",
});

string_mode!(EndShape {
    Close => "close",
});

/// A raw p5 constant value: WebGL primitive codes are numbers, the rest strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeValue {
    Code(u32),
    Name(&'static str),
}

/// Argument to `beginShape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleFan,
    TriangleStrip,
    Quads,
    QuadStrip,
    Tess,
}

impl ShapeKind {
    pub fn value(self) -> ModeValue {
        match self {
            ShapeKind::Points => ModeValue::Code(0x0000),
            ShapeKind::Lines => ModeValue::Code(0x0001),
            ShapeKind::LineLoop => ModeValue::Code(0x0002),
            ShapeKind::LineStrip => ModeValue::Code(0x0003),
            ShapeKind::Triangles => ModeValue::Code(0x0004),
            ShapeKind::TriangleStrip => ModeValue::Code(0x0005),
            ShapeKind::TriangleFan => ModeValue::Code(0x0006),
            ShapeKind::Quads => ModeValue::Name("quads"),
            ShapeKind::QuadStrip => ModeValue::Name("quad_strip"),
            ShapeKind::Tess => ModeValue::Name("tess"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_cap_values_are_swapped() {
        assert_eq!(StrokeCap::Square.as_str(), "butt");
        assert_eq!(StrokeCap::Project.as_str(), "square");
    }

    #[test]
    fn test_shape_kind_values() {
        assert_eq!(ShapeKind::TriangleFan.value(), ModeValue::Code(6));
        assert_eq!(ShapeKind::QuadStrip.value(), ModeValue::Name("quad_strip"));
    }

    #[test]
    fn test_display_uses_p5_value() {
        assert_eq!(BlendMode::Dodge.to_string(), "color-dodge");
        assert_eq!(VerticalAlign::Baseline.to_string(), "alphabetic");
    }
}
