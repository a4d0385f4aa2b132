//! Getting hold of the `p5` constructor, loading it from the network if the
//! page did not include it.

use crate::canvas::Canvas;
use crate::describe;
use crate::dom::{WebDocument, WebMount};
use crate::p5::P5;
use futures::channel::oneshot;
use js_sys::Reflect;
use log::debug;
use p5rs_common::{LoadConfig, SketchError};
use p5rs_core::{Library, LibrarySource, LoadSignal};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// The global `p5` constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct P5Library;

impl P5Library {
    pub fn is_loaded() -> bool {
        Reflect::get(&js_sys::global(), &JsValue::from_str("p5"))
            .map(|ctor| ctor.is_function())
            .unwrap_or(false)
    }

    pub fn detect() -> Option<Self> {
        Self::is_loaded().then_some(P5Library)
    }
}

impl Library<WebMount> for P5Library {
    type Instance = Canvas;

    fn construct(&self, mount: &WebMount, entry: Box<dyn FnOnce(Canvas)>) -> Result<(), SketchError> {
        if !Self::is_loaded() {
            return Err(SketchError::LibraryUnavailable {
                reason: "global `p5` is not defined".to_string(),
            });
        }

        let sketch = Closure::once_into_js(move |p5: P5| entry(Canvas::new(p5)));
        P5::new(sketch.unchecked_ref(), mount.element())
            .map_err(|err| SketchError::host(format!("new p5() threw: {}", describe(&err))))?;
        Ok(())
    }
}

/// Loads p5.js by appending a `<script>` tag to the page's head.
#[derive(Debug, Clone)]
pub struct ScriptSource {
    document: WebDocument,
}

impl ScriptSource {
    pub fn new(document: WebDocument) -> Self {
        Self { document }
    }
}

impl LibrarySource<WebMount> for ScriptSource {
    type Library = P5Library;

    fn present(&self) -> Option<P5Library> {
        P5Library::detect()
    }

    fn request(&self, config: &LoadConfig, done: LoadSignal) -> Result<(), SketchError> {
        let document = self.document.inner();
        let script = document
            .create_element("script")
            .map_err(|err| SketchError::host(describe(&err)))?
            .dyn_into::<web_sys::HtmlScriptElement>()
            .map_err(|_| SketchError::host("<script> is not an HTMLScriptElement"))?;
        script.set_src(&config.url);

        // Whichever of load/error fires first takes the signal.
        let done = Rc::new(RefCell::new(Some(done)));
        let on_load = {
            let done = Rc::clone(&done);
            Closure::once_into_js(move || {
                if let Some(done) = done.borrow_mut().take() {
                    let _ = done.send(Ok(()));
                }
            })
        };
        let url = config.url.clone();
        let on_error = Closure::once_into_js(move || {
            if let Some(done) = done.borrow_mut().take() {
                let _ = done.send(Err(SketchError::LibraryUnavailable {
                    reason: format!("failed to load {url}"),
                }));
            }
        });
        script.set_onload(Some(on_load.unchecked_ref()));
        script.set_onerror(Some(on_error.unchecked_ref()));

        let head = document
            .head()
            .ok_or_else(|| SketchError::host("document has no <head>"))?;
        head.append_child(&script)
            .map_err(|err| SketchError::host(describe(&err)))?;
        debug!("requested {}", config.url);
        Ok(())
    }
}

/// Resolves after `duration` using `setTimeout`. Never resolves outside a
/// window context.
pub async fn sleep(duration: Duration) {
    let Some(window) = web_sys::window() else {
        return futures::future::pending().await;
    };

    let (tx, rx) = oneshot::channel::<()>();
    let fire = Closure::once_into_js(move || {
        let _ = tx.send(());
    });
    let millis = duration.as_millis().min(i32::MAX as u128) as i32;
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(fire.unchecked_ref(), millis)
        .is_err()
    {
        return futures::future::pending().await;
    }
    let _ = rx.await;
}
