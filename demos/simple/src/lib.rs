//! Build: wasm-pack build --target web demos/simple
//! Serve: p5rs serve demos/simple

use p5rs_web::{draw, setup};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsError> {
    p5rs_web::init_logging(log::Level::Info);
    p5rs_web::run(
        "main",
        vec![
            setup(|p| {
                p.create_canvas(400.0, 400.0);
                p.background((128, 200, 128));
            }),
            draw(|p| {
                p.fill(0);
                p.ellipse(200.0, 200.0, 50.0, 50.0);
                p.text("Hello, p5rs", 50.0, 20.0);
            }),
        ],
    )?;
    Ok(())
}
