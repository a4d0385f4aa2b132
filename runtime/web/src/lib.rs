//! p5rs web runtime: drive p5.js sketches from Rust compiled to wasm.
//!
//! ```ignore
//! use p5rs_web::{draw, setup};
//!
//! #[wasm_bindgen(start)]
//! pub fn start() -> Result<(), JsError> {
//!     p5rs_web::init_logging(log::Level::Info);
//!     p5rs_web::run(
//!         "main",
//!         vec![
//!             setup(|p| {
//!                 p.create_canvas(400.0, 400.0);
//!                 p.background((128, 200, 128));
//!             }),
//!             draw(|p| p.ellipse(200.0, 200.0, 50.0, 50.0)),
//!         ],
//!     )?;
//!     Ok(())
//! }
//! ```

mod canvas;
mod color;
mod dom;
mod hooks;
mod library;
pub mod p5;

pub use canvas::Canvas;
pub use color::Color;
pub use dom::{WebDocument, WebMount};
pub use hooks::*;
pub use library::{P5Library, ScriptSource, sleep};

pub use p5rs_common::constants;
pub use p5rs_common::{
    Event, HookKind, HookName, KeyEvent, LoadConfig, MouseButton, MouseEvent, SketchError,
    WheelEvent,
};

use wasm_bindgen::prelude::*;

pub type Registration = p5rs_core::Registration<Canvas>;
pub type Sketch = p5rs_core::Sketch<Canvas>;

/// Routes `log` output to the browser console and reports panics there.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already initialized");
    }
}

/// Mounts a sketch in the element matching `selector`. p5.js must already be
/// loaded on the page.
pub fn run(selector: &str, registrations: Vec<Registration>) -> Result<Sketch, SketchError> {
    let document = WebDocument::current()?;
    p5rs_core::bootstrap(&document, &P5Library, selector, registrations)
}

/// Mounts a sketch, first loading p5.js from `config.url` if the page has
/// not.
pub async fn run_with_loader(
    selector: &str,
    registrations: Vec<Registration>,
    config: &LoadConfig,
) -> Result<Sketch, SketchError> {
    let document = WebDocument::current()?;
    let source = ScriptSource::new(document.clone());
    p5rs_core::bootstrap_with_loader(&document, &source, config, sleep, selector, registrations).await
}

/// Runs [`run_with_loader`] in the background for synchronous entry points.
/// Failures are logged.
pub fn spawn_with_loader(selector: &str, registrations: Vec<Registration>, config: LoadConfig) {
    let selector = selector.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        match run_with_loader(&selector, registrations, &config).await {
            Ok(sketch) => log::info!("sketch running with hooks {:?}", sketch.hooks()),
            Err(err) => log::error!("sketch failed to start: {err}"),
        }
    });
}

/// Never resolves. Await it at the end of an async entry point to keep the
/// sketch running until the page goes away.
pub async fn run_forever() {
    futures::future::pending::<()>().await;
}

pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}
