//! Raw bindings to the global `p5` class.
//!
//! These mirror the p5.js instance API one-to-one; [`crate::Canvas`] wraps
//! them with Rust types.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = p5)]
    #[derive(Debug, Clone)]
    pub type P5;

    #[wasm_bindgen(constructor, js_class = "p5", catch)]
    pub fn new(sketch: &js_sys::Function, node: &web_sys::Element) -> Result<P5, JsValue>;

    // ─── Canvas ───

    #[wasm_bindgen(method, js_name = createCanvas)]
    pub fn create_canvas(this: &P5, width: f64, height: f64) -> JsValue;

    #[wasm_bindgen(method, js_name = createCanvas)]
    pub fn create_canvas_with_renderer(this: &P5, width: f64, height: f64, renderer: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = resizeCanvas)]
    pub fn resize_canvas(this: &P5, width: f64, height: f64);

    #[wasm_bindgen(method)]
    pub fn clear(this: &P5);

    #[wasm_bindgen(method, js_name = saveCanvas)]
    pub fn save_canvas(this: &P5, filename: &str, extension: &str);

    #[wasm_bindgen(method, js_name = saveGif)]
    pub fn save_gif(this: &P5, filename: &str, seconds: f64);

    #[wasm_bindgen(method, js_name = frameRate)]
    pub fn frame_rate(this: &P5, fps: f64);

    #[wasm_bindgen(method, js_name = loop)]
    pub fn resume_loop(this: &P5);

    #[wasm_bindgen(method, js_name = noLoop)]
    pub fn no_loop(this: &P5);

    #[wasm_bindgen(method)]
    pub fn redraw(this: &P5);

    #[wasm_bindgen(method)]
    pub fn cursor(this: &P5, kind: &str);

    #[wasm_bindgen(method, js_name = noCursor)]
    pub fn no_cursor(this: &P5);

    // ─── Attributes ───

    #[wasm_bindgen(method, js_name = noFill)]
    pub fn no_fill(this: &P5);

    #[wasm_bindgen(method, js_name = noStroke)]
    pub fn no_stroke(this: &P5);

    #[wasm_bindgen(method, js_name = strokeWeight)]
    pub fn stroke_weight(this: &P5, weight: f64);

    #[wasm_bindgen(method, js_name = strokeCap)]
    pub fn stroke_cap(this: &P5, cap: &str);

    #[wasm_bindgen(method, js_name = strokeJoin)]
    pub fn stroke_join(this: &P5, join: &str);

    #[wasm_bindgen(method, js_name = colorMode)]
    pub fn color_mode(this: &P5, mode: &str);

    #[wasm_bindgen(method, js_name = angleMode)]
    pub fn angle_mode(this: &P5, mode: &str);

    #[wasm_bindgen(method, js_name = rectMode)]
    pub fn rect_mode(this: &P5, mode: &str);

    #[wasm_bindgen(method, js_name = ellipseMode)]
    pub fn ellipse_mode(this: &P5, mode: &str);

    #[wasm_bindgen(method, js_name = imageMode)]
    pub fn image_mode(this: &P5, mode: &str);

    #[wasm_bindgen(method, js_name = blendMode)]
    pub fn blend_mode(this: &P5, mode: &str);

    #[wasm_bindgen(method)]
    pub fn filter(this: &P5, kind: &str);

    // ─── Shapes ───

    #[wasm_bindgen(method)]
    pub fn ellipse(this: &P5, x: f64, y: f64, w: f64, h: f64);

    #[wasm_bindgen(method)]
    pub fn circle(this: &P5, x: f64, y: f64, d: f64);

    #[wasm_bindgen(method)]
    pub fn rect(this: &P5, x: f64, y: f64, w: f64, h: f64);

    #[wasm_bindgen(method)]
    pub fn line(this: &P5, x1: f64, y1: f64, x2: f64, y2: f64);

    #[wasm_bindgen(method)]
    pub fn triangle(this: &P5, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64);

    #[wasm_bindgen(method)]
    pub fn quad(this: &P5, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64);

    #[wasm_bindgen(method)]
    pub fn point(this: &P5, x: f64, y: f64);

    #[wasm_bindgen(method)]
    pub fn arc(this: &P5, x: f64, y: f64, w: f64, h: f64, start: f64, stop: f64);

    #[wasm_bindgen(method, js_name = arc)]
    pub fn arc_with_mode(this: &P5, x: f64, y: f64, w: f64, h: f64, start: f64, stop: f64, mode: &str);

    #[wasm_bindgen(method)]
    pub fn bezier(this: &P5, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64);

    #[wasm_bindgen(method)]
    pub fn curve(this: &P5, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64);

    // ─── Vertices ───

    #[wasm_bindgen(method, js_name = beginShape)]
    pub fn begin_shape(this: &P5);

    #[wasm_bindgen(method, js_name = beginShape)]
    pub fn begin_shape_with_kind(this: &P5, kind: &JsValue);

    #[wasm_bindgen(method, js_name = endShape)]
    pub fn end_shape(this: &P5);

    #[wasm_bindgen(method, js_name = endShape)]
    pub fn end_shape_with_mode(this: &P5, mode: &str);

    #[wasm_bindgen(method)]
    pub fn vertex(this: &P5, x: f64, y: f64);

    #[wasm_bindgen(method, js_name = bezierVertex)]
    pub fn bezier_vertex(this: &P5, cx1: f64, cy1: f64, cx2: f64, cy2: f64, x: f64, y: f64);

    #[wasm_bindgen(method, js_name = quadraticVertex)]
    pub fn quadratic_vertex(this: &P5, cx: f64, cy: f64, x: f64, y: f64);

    #[wasm_bindgen(method, js_name = curveVertex)]
    pub fn curve_vertex(this: &P5, x: f64, y: f64);

    #[wasm_bindgen(method, js_name = beginContour)]
    pub fn begin_contour(this: &P5);

    #[wasm_bindgen(method, js_name = endContour)]
    pub fn end_contour(this: &P5);

    // ─── Typography ───

    #[wasm_bindgen(method)]
    pub fn text(this: &P5, text: &str, x: f64, y: f64);

    #[wasm_bindgen(method, js_name = textSize)]
    pub fn text_size(this: &P5, size: f64);

    #[wasm_bindgen(method, js_name = textAlign)]
    pub fn text_align(this: &P5, horizontal: &str);

    #[wasm_bindgen(method, js_name = textAlign)]
    pub fn text_align_both(this: &P5, horizontal: &str, vertical: &str);

    #[wasm_bindgen(method, js_name = textStyle)]
    pub fn text_style(this: &P5, style: &str);

    // ─── Transform ───

    #[wasm_bindgen(method)]
    pub fn push(this: &P5);

    #[wasm_bindgen(method)]
    pub fn pop(this: &P5);

    #[wasm_bindgen(method)]
    pub fn translate(this: &P5, x: f64, y: f64);

    #[wasm_bindgen(method)]
    pub fn rotate(this: &P5, angle: f64);

    #[wasm_bindgen(method)]
    pub fn scale(this: &P5, s: f64);

    // ─── Images ───

    #[wasm_bindgen(method, js_name = loadImage)]
    pub fn load_image(this: &P5, path: &str) -> JsValue;

    #[wasm_bindgen(method)]
    pub fn image(this: &P5, img: &JsValue, x: f64, y: f64, w: f64, h: f64);

    // ─── Math ───

    #[wasm_bindgen(method)]
    pub fn random(this: &P5, min: f64, max: f64) -> f64;

    #[wasm_bindgen(method)]
    pub fn map(this: &P5, value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64;

    #[wasm_bindgen(method)]
    pub fn atan2(this: &P5, y: f64, x: f64) -> f64;

    #[wasm_bindgen(method)]
    pub fn dist(this: &P5, x1: f64, y1: f64, x2: f64, y2: f64) -> f64;

    // ─── State ───

    #[wasm_bindgen(method, getter)]
    pub fn width(this: &P5) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn height(this: &P5) -> f64;

    #[wasm_bindgen(method, getter, js_name = frameCount)]
    pub fn frame_count(this: &P5) -> f64;

    #[wasm_bindgen(method, getter, js_name = deltaTime)]
    pub fn delta_time(this: &P5) -> f64;

    #[wasm_bindgen(method, getter, js_name = mouseX)]
    pub fn mouse_x(this: &P5) -> f64;

    #[wasm_bindgen(method, getter, js_name = mouseY)]
    pub fn mouse_y(this: &P5) -> f64;

    #[wasm_bindgen(method, getter, js_name = pmouseX)]
    pub fn pmouse_x(this: &P5) -> f64;

    #[wasm_bindgen(method, getter, js_name = pmouseY)]
    pub fn pmouse_y(this: &P5) -> f64;

    // p5 starts these at 0 / undefined before the first event.
    #[wasm_bindgen(method, getter, js_name = mouseButton)]
    pub fn mouse_button(this: &P5) -> JsValue;

    #[wasm_bindgen(method, getter, js_name = mouseIsPressed)]
    pub fn mouse_is_pressed(this: &P5) -> JsValue;

    #[wasm_bindgen(method, getter)]
    pub fn key(this: &P5) -> JsValue;

    #[wasm_bindgen(method, getter, js_name = keyCode)]
    pub fn key_code(this: &P5) -> f64;

    #[wasm_bindgen(method, getter, js_name = keyIsPressed)]
    pub fn key_is_pressed(this: &P5) -> JsValue;
}
