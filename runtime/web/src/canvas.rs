use crate::color::Color;
use crate::describe;
use crate::p5::P5;
use js_sys::{Array, Function, Reflect};
use log::error;
use p5rs_common::constants::{
    AngleMode, ArcMode, BlendMode, ColorMode, Cursor, DrawMode, EndShape, Filter, HorizontalAlign,
    ModeValue, Renderer, ShapeKind, StrokeCap, StrokeJoin, TextStyle, VerticalAlign,
};
use p5rs_common::{HookName, KeyState, MouseButton, PointerState, SketchError};
use p5rs_core::{HandlerAdapter, Instance};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// The live p5 instance a sketch draws with.
///
/// Every method forwards to the p5.js method of the same name. Clones refer
/// to the same instance.
#[derive(Debug, Clone)]
pub struct Canvas {
    p5: P5,
}

impl Canvas {
    pub(crate) fn new(p5: P5) -> Self {
        Self { p5 }
    }

    /// The underlying binding, for calls this wrapper does not cover.
    pub fn raw(&self) -> &P5 {
        &self.p5
    }

    /// Calls `method` with a runtime-built argument list.
    fn apply(&self, method: &str, args: &Array) -> Option<JsValue> {
        let result = Reflect::get(&self.p5, &JsValue::from_str(method))
            .and_then(|f| f.dyn_into::<Function>())
            .and_then(|f| f.apply(&self.p5, args));
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                error!("p5.{method} failed: {}", describe(&err));
                None
            }
        }
    }

    // ─── Canvas ───

    pub fn create_canvas(&self, width: f64, height: f64) {
        self.p5.create_canvas(width, height);
    }

    pub fn create_canvas_with(&self, width: f64, height: f64, renderer: Renderer) {
        self.p5.create_canvas_with_renderer(width, height, renderer.as_str());
    }

    pub fn resize_canvas(&self, width: f64, height: f64) {
        self.p5.resize_canvas(width, height);
    }

    pub fn clear(&self) {
        self.p5.clear();
    }

    pub fn save_canvas(&self, filename: &str, extension: &str) {
        self.p5.save_canvas(filename, extension);
    }

    pub fn save_gif(&self, filename: &str, seconds: f64) {
        self.p5.save_gif(filename, seconds);
    }

    pub fn frame_rate(&self, fps: f64) {
        self.p5.frame_rate(fps);
    }

    pub fn resume_loop(&self) {
        self.p5.resume_loop();
    }

    pub fn no_loop(&self) {
        self.p5.no_loop();
    }

    pub fn redraw(&self) {
        self.p5.redraw();
    }

    pub fn cursor(&self, cursor: Cursor) {
        self.p5.cursor(cursor.as_str());
    }

    pub fn no_cursor(&self) {
        self.p5.no_cursor();
    }

    // ─── Color ───

    pub fn background(&self, color: impl Into<Color>) {
        self.apply("background", &color.into().to_args());
    }

    pub fn fill(&self, color: impl Into<Color>) {
        self.apply("fill", &color.into().to_args());
    }

    pub fn stroke(&self, color: impl Into<Color>) {
        self.apply("stroke", &color.into().to_args());
    }

    pub fn no_fill(&self) {
        self.p5.no_fill();
    }

    pub fn no_stroke(&self) {
        self.p5.no_stroke();
    }

    pub fn color_mode(&self, mode: ColorMode) {
        self.p5.color_mode(mode.as_str());
    }

    // ─── Attributes ───

    pub fn stroke_weight(&self, weight: f64) {
        self.p5.stroke_weight(weight);
    }

    pub fn stroke_cap(&self, cap: StrokeCap) {
        self.p5.stroke_cap(cap.as_str());
    }

    pub fn stroke_join(&self, join: StrokeJoin) {
        self.p5.stroke_join(join.as_str());
    }

    pub fn angle_mode(&self, mode: AngleMode) {
        self.p5.angle_mode(mode.as_str());
    }

    pub fn rect_mode(&self, mode: DrawMode) {
        self.p5.rect_mode(mode.as_str());
    }

    pub fn ellipse_mode(&self, mode: DrawMode) {
        self.p5.ellipse_mode(mode.as_str());
    }

    pub fn image_mode(&self, mode: DrawMode) {
        self.p5.image_mode(mode.as_str());
    }

    pub fn blend_mode(&self, mode: BlendMode) {
        self.p5.blend_mode(mode.as_str());
    }

    pub fn filter(&self, filter: Filter) {
        self.p5.filter(filter.as_str());
    }

    // ─── Shapes ───

    pub fn ellipse(&self, x: f64, y: f64, w: f64, h: f64) {
        self.p5.ellipse(x, y, w, h);
    }

    pub fn circle(&self, x: f64, y: f64, d: f64) {
        self.p5.circle(x, y, d);
    }

    pub fn rect(&self, x: f64, y: f64, w: f64, h: f64) {
        self.p5.rect(x, y, w, h);
    }

    pub fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.p5.line(x1, y1, x2, y2);
    }

    pub fn triangle(&self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.p5.triangle(x1, y1, x2, y2, x3, y3);
    }

    pub fn quad(&self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) {
        self.p5.quad(x1, y1, x2, y2, x3, y3, x4, y4);
    }

    pub fn point(&self, x: f64, y: f64) {
        self.p5.point(x, y);
    }

    pub fn arc(&self, x: f64, y: f64, w: f64, h: f64, start: f64, stop: f64) {
        self.p5.arc(x, y, w, h, start, stop);
    }

    pub fn arc_with_mode(&self, x: f64, y: f64, w: f64, h: f64, start: f64, stop: f64, mode: ArcMode) {
        self.p5.arc_with_mode(x, y, w, h, start, stop, mode.as_str());
    }

    pub fn bezier(&self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) {
        self.p5.bezier(x1, y1, x2, y2, x3, y3, x4, y4);
    }

    pub fn curve(&self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) {
        self.p5.curve(x1, y1, x2, y2, x3, y3, x4, y4);
    }

    // ─── Vertices ───

    pub fn begin_shape(&self) {
        self.p5.begin_shape();
    }

    pub fn begin_shape_with(&self, kind: ShapeKind) {
        let kind = match kind.value() {
            ModeValue::Code(code) => JsValue::from(code),
            ModeValue::Name(name) => JsValue::from_str(name),
        };
        self.p5.begin_shape_with_kind(&kind);
    }

    pub fn end_shape(&self, mode: Option<EndShape>) {
        match mode {
            Some(mode) => self.p5.end_shape_with_mode(mode.as_str()),
            None => self.p5.end_shape(),
        }
    }

    pub fn vertex(&self, x: f64, y: f64) {
        self.p5.vertex(x, y);
    }

    pub fn bezier_vertex(&self, cx1: f64, cy1: f64, cx2: f64, cy2: f64, x: f64, y: f64) {
        self.p5.bezier_vertex(cx1, cy1, cx2, cy2, x, y);
    }

    pub fn quadratic_vertex(&self, cx: f64, cy: f64, x: f64, y: f64) {
        self.p5.quadratic_vertex(cx, cy, x, y);
    }

    pub fn curve_vertex(&self, x: f64, y: f64) {
        self.p5.curve_vertex(x, y);
    }

    pub fn begin_contour(&self) {
        self.p5.begin_contour();
    }

    pub fn end_contour(&self) {
        self.p5.end_contour();
    }

    /// Closes the current shape.
    pub fn close(&self) {
        self.p5.end_shape_with_mode(EndShape::Close.as_str());
    }

    // ─── Typography ───

    pub fn text(&self, text: &str, x: f64, y: f64) {
        self.p5.text(text, x, y);
    }

    pub fn text_size(&self, size: f64) {
        self.p5.text_size(size);
    }

    pub fn text_align(&self, horizontal: HorizontalAlign, vertical: Option<VerticalAlign>) {
        match vertical {
            Some(vertical) => self.p5.text_align_both(horizontal.as_str(), vertical.as_str()),
            None => self.p5.text_align(horizontal.as_str()),
        }
    }

    pub fn text_style(&self, style: TextStyle) {
        self.p5.text_style(style.as_str());
    }

    // ─── Transform ───

    pub fn push(&self) {
        self.p5.push();
    }

    pub fn pop(&self) {
        self.p5.pop();
    }

    pub fn translate(&self, x: f64, y: f64) {
        self.p5.translate(x, y);
    }

    pub fn rotate(&self, angle: f64) {
        self.p5.rotate(angle);
    }

    pub fn scale(&self, s: f64) {
        self.p5.scale(s);
    }

    // ─── Images ───

    /// Starts loading an image. Call from `preload` to have it ready by `setup`.
    pub fn load_image(&self, path: &str) -> JsValue {
        self.p5.load_image(path)
    }

    pub fn image(&self, img: &JsValue, x: f64, y: f64, w: f64, h: f64) {
        self.p5.image(img, x, y, w, h);
    }

    // ─── Math ───

    pub fn random(&self, min: f64, max: f64) -> f64 {
        self.p5.random(min, max)
    }

    pub fn map(&self, value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
        self.p5.map(value, start1, stop1, start2, stop2)
    }

    pub fn atan2(&self, y: f64, x: f64) -> f64 {
        self.p5.atan2(y, x)
    }

    pub fn dist(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        self.p5.dist(x1, y1, x2, y2)
    }

    // ─── State ───

    pub fn width(&self) -> f64 {
        self.p5.width()
    }

    pub fn height(&self) -> f64 {
        self.p5.height()
    }

    pub fn frame_count(&self) -> u64 {
        self.p5.frame_count() as u64
    }

    /// Milliseconds since the previous frame.
    pub fn delta_time(&self) -> f64 {
        self.p5.delta_time()
    }

    pub fn mouse_x(&self) -> f64 {
        self.p5.mouse_x()
    }

    pub fn mouse_y(&self) -> f64 {
        self.p5.mouse_y()
    }

    pub fn pmouse_x(&self) -> f64 {
        self.p5.pmouse_x()
    }

    pub fn pmouse_y(&self) -> f64 {
        self.p5.pmouse_y()
    }

    pub fn mouse_button(&self) -> Option<MouseButton> {
        self.p5.mouse_button().as_string().and_then(|b| MouseButton::from_name(&b))
    }

    pub fn mouse_is_pressed(&self) -> bool {
        self.p5.mouse_is_pressed().as_bool().unwrap_or(false)
    }

    pub fn key(&self) -> String {
        self.p5.key().as_string().unwrap_or_default()
    }

    pub fn key_code(&self) -> u32 {
        let code = self.p5.key_code();
        if code.is_finite() { code as u32 } else { 0 }
    }

    pub fn key_is_pressed(&self) -> bool {
        self.p5.key_is_pressed().as_bool().unwrap_or(false)
    }
}

/// Scroll amount from the event p5 passes to `mouseWheel`.
fn wheel_delta(event: &JsValue) -> f64 {
    if !event.is_object() {
        return 0.0;
    }
    ["delta", "deltaY"]
        .iter()
        .find_map(|name| Reflect::get(event, &JsValue::from_str(name)).ok()?.as_f64())
        .unwrap_or(0.0)
}

impl Instance for Canvas {
    fn pointer(&self) -> PointerState {
        PointerState {
            x: self.mouse_x(),
            y: self.mouse_y(),
            button: self.mouse_button(),
            pressed: self.mouse_is_pressed(),
        }
    }

    fn keys(&self) -> KeyState {
        KeyState {
            key: self.key(),
            key_code: self.key_code(),
        }
    }

    fn install(&self, hook: HookName, adapter: Rc<HandlerAdapter<Self>>) -> Result<(), SketchError> {
        let canvas = self.clone();
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            adapter.invoke(&canvas, wheel_delta(&event));
        });

        let installed = Reflect::set(&self.p5, &JsValue::from_str(hook.as_str()), handler.as_ref())
            .map_err(|err| SketchError::HookInstall { hook, message: describe(&err) })?;
        if !installed {
            return Err(SketchError::HookInstall {
                hook,
                message: "property is read-only".to_string(),
            });
        }

        // p5 keeps calling the handler until the page unloads.
        handler.forget();
        Ok(())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::Registration;
    use crate::hooks::{key_pressed, mouse_pressed, mouse_wheel};
    use js_sys::Object;
    use p5rs_common::{KeyEvent, MouseEvent, WheelEvent};
    use p5rs_core::HandlerRegistry;
    use std::cell::RefCell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// A plain object standing in for a p5 instance.
    fn stub() -> (Object, Canvas) {
        let object = Object::new();
        let canvas = Canvas::new(object.clone().unchecked_into::<P5>());
        (object, canvas)
    }

    fn set(object: &Object, name: &str, value: JsValue) {
        Reflect::set(object, &JsValue::from_str(name), &value).unwrap();
    }

    fn install(canvas: &Canvas, registration: Registration) -> Result<(), SketchError> {
        let mut registry = HandlerRegistry::new();
        registration.apply(&mut registry);
        registry.install_all(canvas)
    }

    /// Calls the installed property the way p5 does.
    fn fire(object: &Object, hook: &str, event: &JsValue) {
        let handler = Reflect::get(object, &JsValue::from_str(hook))
            .unwrap()
            .dyn_into::<Function>()
            .unwrap();
        handler.call1(object, event).unwrap();
    }

    fn wheel_event(fields: &[(&str, f64)]) -> JsValue {
        let event = Object::new();
        for (name, value) in fields {
            set(&event, name, JsValue::from_f64(*value));
        }
        event.into()
    }

    #[wasm_bindgen_test]
    fn test_mouse_pressed_reads_pointer_from_instance() {
        let (object, canvas) = stub();
        let seen = Rc::new(RefCell::new(Vec::<MouseEvent>::new()));
        let sink = Rc::clone(&seen);
        install(&canvas, mouse_pressed(move |_, event| sink.borrow_mut().push(*event))).unwrap();

        set(&object, "mouseX", JsValue::from_f64(12.0));
        set(&object, "mouseY", JsValue::from_f64(34.0));
        set(&object, "mouseButton", JsValue::from_str("left"));
        set(&object, "mouseIsPressed", JsValue::TRUE);
        fire(&object, "mousePressed", &JsValue::UNDEFINED);

        set(&object, "mouseButton", JsValue::from_f64(0.0));
        fire(&object, "mousePressed", &JsValue::UNDEFINED);

        set(&object, "mouseButton", JsValue::UNDEFINED);
        set(&object, "mouseIsPressed", JsValue::FALSE);
        fire(&object, "mousePressed", &JsValue::UNDEFINED);

        let seen = seen.borrow();
        assert_eq!(
            seen[0],
            MouseEvent { x: 12.0, y: 34.0, button: Some(MouseButton::Left), pressed: true }
        );
        assert_eq!(seen[1].button, None);
        assert_eq!(seen[2].button, None);
        assert!(!seen[2].pressed);
    }

    #[wasm_bindgen_test]
    fn test_mouse_wheel_decodes_delta() {
        let (object, canvas) = stub();
        set(&object, "mouseX", JsValue::from_f64(5.0));
        set(&object, "mouseY", JsValue::from_f64(6.0));
        let seen = Rc::new(RefCell::new(Vec::<WheelEvent>::new()));
        let sink = Rc::clone(&seen);
        install(&canvas, mouse_wheel(move |_, event| sink.borrow_mut().push(*event))).unwrap();

        fire(&object, "mouseWheel", &wheel_event(&[("deltaY", 3.0)]));
        fire(&object, "mouseWheel", &wheel_event(&[("delta", -2.0), ("deltaY", 3.0)]));
        fire(&object, "mouseWheel", &JsValue::from_f64(7.0));

        let deltas: Vec<f64> = seen.borrow().iter().map(|e| e.delta).collect();
        assert_eq!(deltas, vec![3.0, -2.0, 0.0]);
        assert_eq!(seen.borrow()[0].pointer.x, 5.0);
        assert_eq!(seen.borrow()[0].pointer.y, 6.0);
    }

    #[wasm_bindgen_test]
    fn test_key_pressed_tolerates_non_string_key() {
        let (object, canvas) = stub();
        let seen = Rc::new(RefCell::new(Vec::<KeyEvent>::new()));
        let sink = Rc::clone(&seen);
        install(&canvas, key_pressed(move |_, event| sink.borrow_mut().push(event.clone()))).unwrap();

        set(&object, "key", JsValue::from_str("a"));
        set(&object, "keyCode", JsValue::from_f64(65.0));
        fire(&object, "keyPressed", &JsValue::UNDEFINED);

        set(&object, "key", JsValue::from_f64(65.0));
        fire(&object, "keyPressed", &JsValue::UNDEFINED);

        let seen = seen.borrow();
        assert_eq!((seen[0].key.as_str(), seen[0].key_code), ("a", 65));
        assert_eq!((seen[1].key.as_str(), seen[1].key_code), ("", 65));
    }

    #[wasm_bindgen_test]
    fn test_frozen_instance_rejects_install() {
        let (object, canvas) = stub();
        Object::freeze(&object);

        let err = install(&canvas, mouse_pressed(|_, _| {})).unwrap_err();
        assert_eq!(
            err,
            SketchError::HookInstall {
                hook: HookName::MousePressed,
                message: "property is read-only".to_string(),
            }
        );
    }
}
