use js_sys::Array;
use wasm_bindgen::JsValue;

/// A color argument for `background`, `fill` and `stroke`.
///
/// Channel values are interpreted by the sketch's current color mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Gray(f64),
    GrayAlpha(f64, f64),
    Rgb(f64, f64, f64),
    Rgba(f64, f64, f64, f64),
    /// Any CSS color string, e.g. `"white"` or `"hsb(120, 100%, 100%)"`.
    Css(String),
}

impl Color {
    pub(crate) fn to_args(&self) -> Array {
        let values: Vec<JsValue> = match self {
            Color::Gray(v) => vec![(*v).into()],
            Color::GrayAlpha(v, a) => vec![(*v).into(), (*a).into()],
            Color::Rgb(r, g, b) => vec![(*r).into(), (*g).into(), (*b).into()],
            Color::Rgba(r, g, b, a) => vec![(*r).into(), (*g).into(), (*b).into(), (*a).into()],
            Color::Css(s) => vec![JsValue::from_str(s)],
        };
        values.into_iter().collect()
    }
}

impl From<f64> for Color {
    fn from(v: f64) -> Self {
        Color::Gray(v)
    }
}

impl From<i32> for Color {
    fn from(v: i32) -> Self {
        Color::Gray(v as f64)
    }
}

impl From<(f64, f64, f64)> for Color {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<(i32, i32, i32)> for Color {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Color::Rgb(r as f64, g as f64, b as f64)
    }
}

impl From<(f64, f64, f64, f64)> for Color {
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        Color::Rgba(r, g, b, a)
    }
}

impl From<(i32, i32, i32, i32)> for Color {
    fn from((r, g, b, a): (i32, i32, i32, i32)) -> Self {
        Color::Rgba(r as f64, g as f64, b as f64, a as f64)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::Css(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::Css(s)
    }
}

impl From<&String> for Color {
    fn from(s: &String) -> Self {
        Color::Css(s.clone())
    }
}
