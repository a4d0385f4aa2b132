//! Host-independent sketch bootstrap: hook registration, binding onto a live
//! p5 instance, and validation of the result.

pub mod bootstrap;
pub mod host;
pub mod loader;
pub mod registry;
pub mod sketch;

pub use bootstrap::{bootstrap, bootstrap_with_loader, construct, resolve};
pub use host::{Document, Instance, Library, LibrarySource, LoadSignal, MountPoint};
pub use loader::acquire;
pub use registry::{
    HandlerAdapter, HandlerRegistry, Registration, double_clicked, draw, key_pressed, key_released,
    key_typed, mouse_clicked, mouse_dragged, mouse_moved, mouse_pressed, mouse_released,
    mouse_wheel, preload, setup,
};
pub use sketch::Sketch;

pub use p5rs_common::{
    Event, HookKind, HookName, KeyEvent, KeyState, LoadConfig, MouseButton, MouseEvent,
    PointerState, SketchError, WheelEvent,
};
