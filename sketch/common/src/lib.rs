pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod hook;

pub use config::LoadConfig;
pub use error::SketchError;
pub use event::{Event, KeyEvent, KeyState, MouseButton, MouseEvent, PointerState, WheelEvent};
pub use hook::{HookKind, HookName};
