//! A grid of faces whose eyes follow the pointer. Press `s` to record a GIF.
//!
//! Build: wasm-pack build --target web demos/playground
//! Serve: p5rs serve demos/playground

use p5rs_web::constants::{ColorMode, PI};
use p5rs_web::{Canvas, LoadConfig, draw, key_pressed, setup};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

const SIZE: f64 = 400.0;
const CELL: f64 = 100.0;

struct Face {
    x: f64,
    y: f64,
    size: f64,
    color: String,
}

impl Face {
    fn draw(&self, p: &Canvas) {
        p.fill(&self.color);
        p.rect(self.x, self.y, self.size, self.size);

        self.eye(p, self.x + 0.375 * self.size, self.y + 0.5 * self.size);
        self.eye(p, self.x + 0.625 * self.size, self.y + 0.5 * self.size);
        self.mouth(p);
    }

    fn eye(&self, p: &Canvas, x: f64, y: f64) {
        let angle = p.atan2(p.mouse_y() - y, p.mouse_x() - x);
        p.no_stroke();

        p.push();
        p.translate(x, y);
        p.fill("white");
        p.ellipse(0.0, 0.0, 0.25 * self.size, 0.25 * self.size);

        p.rotate(angle);
        p.fill(&self.color);
        p.ellipse(0.0625 * self.size, 0.0, 0.125 * self.size, 0.125 * self.size);
        p.pop();
    }

    /// Opens wider as the pointer gets closer.
    fn mouth(&self, p: &Canvas) {
        let cx = self.x + self.size / 2.0;
        let cy = self.y + self.size / 2.0;
        let distance = (p.mouse_x() - cx).hypot(p.mouse_y() - cy).clamp(0.0, 200.0);
        let ratio = 1.0 - distance / 200.0;

        p.push();
        p.no_stroke();
        p.translate(cx, self.y + 0.75 * self.size);
        p.fill("white");
        p.arc(0.0, 0.0, 0.5 * self.size, 0.25 * self.size * ratio, 0.0, PI);
        p.pop();
    }
}

#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsError> {
    p5rs_web::init_logging(log::Level::Debug);

    let faces: Rc<RefCell<Vec<Face>>> = Rc::default();
    let grid = Rc::clone(&faces);
    let scene = Rc::clone(&faces);

    let _sketch = p5rs_web::run_with_loader(
        "main",
        vec![
            setup(move |p| {
                p.create_canvas(SIZE, SIZE);
                p.color_mode(ColorMode::Hsb);
                let mut grid = grid.borrow_mut();
                let steps = (SIZE / CELL) as usize;
                for col in 0..steps {
                    for row in 0..steps {
                        let hue = p.random(0.0, 360.0).floor();
                        grid.push(Face {
                            x: col as f64 * CELL,
                            y: row as f64 * CELL,
                            size: CELL,
                            color: format!("hsb({hue}, 100%, 100%)"),
                        });
                    }
                }
            }),
            draw(move |p| {
                for face in scene.borrow().iter() {
                    face.draw(p);
                }
            }),
            key_pressed(|p, key| {
                if key.key == "s" {
                    p.save_gif("output.gif", 4.0);
                }
            }),
        ],
        &LoadConfig::default(),
    )
    .await?;

    p5rs_web::run_forever().await;
    Ok(())
}
