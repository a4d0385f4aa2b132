//! Hook builders fixed to [`Canvas`], so sketch closures need no type
//! annotations.

use crate::Registration;
use crate::canvas::Canvas;
use p5rs_common::{KeyEvent, MouseEvent, WheelEvent};

pub fn preload(f: impl FnMut(&Canvas) + 'static) -> Registration {
    p5rs_core::preload(f)
}

pub fn setup(f: impl FnMut(&Canvas) + 'static) -> Registration {
    p5rs_core::setup(f)
}

pub fn draw(f: impl FnMut(&Canvas) + 'static) -> Registration {
    p5rs_core::draw(f)
}

pub fn mouse_moved(f: impl FnMut(&Canvas, &MouseEvent) + 'static) -> Registration {
    p5rs_core::mouse_moved(f)
}

pub fn mouse_dragged(f: impl FnMut(&Canvas, &MouseEvent) + 'static) -> Registration {
    p5rs_core::mouse_dragged(f)
}

pub fn mouse_pressed(f: impl FnMut(&Canvas, &MouseEvent) + 'static) -> Registration {
    p5rs_core::mouse_pressed(f)
}

pub fn mouse_released(f: impl FnMut(&Canvas, &MouseEvent) + 'static) -> Registration {
    p5rs_core::mouse_released(f)
}

pub fn mouse_clicked(f: impl FnMut(&Canvas, &MouseEvent) + 'static) -> Registration {
    p5rs_core::mouse_clicked(f)
}

pub fn double_clicked(f: impl FnMut(&Canvas, &MouseEvent) + 'static) -> Registration {
    p5rs_core::double_clicked(f)
}

pub fn mouse_wheel(f: impl FnMut(&Canvas, &WheelEvent) + 'static) -> Registration {
    p5rs_core::mouse_wheel(f)
}

pub fn key_pressed(f: impl FnMut(&Canvas, &KeyEvent) + 'static) -> Registration {
    p5rs_core::key_pressed(f)
}

pub fn key_released(f: impl FnMut(&Canvas, &KeyEvent) + 'static) -> Registration {
    p5rs_core::key_released(f)
}

pub fn key_typed(f: impl FnMut(&Canvas, &KeyEvent) + 'static) -> Registration {
    p5rs_core::key_typed(f)
}
