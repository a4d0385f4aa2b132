//! Event payloads handed to sketch callbacks.
//!
//! p5 calls hooks with loosely typed arguments and exposes input state as
//! instance properties. The host reads that state once per call into a
//! [`PointerState`] / [`KeyState`] snapshot and [`Event::capture`] turns it
//! into the payload for the hook's kind.

use crate::hook::{HookKind, HookName};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
    Center,
}

impl MouseButton {
    /// Parses the value of p5's `mouseButton` property.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(MouseButton::Left),
            "right" => Some(MouseButton::Right),
            "center" => Some(MouseButton::Center),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
            MouseButton::Center => "center",
        }
    }
}

/// Pointer state read from the instance at call time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub button: Option<MouseButton>,
    pub pressed: bool,
}

/// Keyboard state read from the instance at call time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub key: String,
    pub key_code: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MouseEvent {
    pub x: f64,
    pub y: f64,
    pub button: Option<MouseButton>,
    pub pressed: bool,
}

impl From<PointerState> for MouseEvent {
    fn from(state: PointerState) -> Self {
        MouseEvent {
            x: state.x,
            y: state.y,
            button: state.button,
            pressed: state.pressed,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub pointer: MouseEvent,
    /// Vertical scroll amount; positive when scrolling down.
    pub delta: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    pub key_code: u32,
}

impl From<KeyState> for KeyEvent {
    fn from(state: KeyState) -> Self {
        KeyEvent { key: state.key, key_code: state.key_code }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Lifecycle,
    Mouse(MouseEvent),
    Wheel(WheelEvent),
    Key(KeyEvent),
}

impl Event {
    /// Builds the payload for `hook` from the host's input snapshots.
    pub fn capture(hook: HookName, pointer: PointerState, keys: KeyState, wheel_delta: f64) -> Self {
        match hook.kind() {
            HookKind::Lifecycle => Event::Lifecycle,
            HookKind::Mouse => Event::Mouse(pointer.into()),
            HookKind::Wheel => Event::Wheel(WheelEvent {
                pointer: pointer.into(),
                delta: wheel_delta,
            }),
            HookKind::Key => Event::Key(keys.into()),
        }
    }

    pub fn kind(&self) -> HookKind {
        match self {
            Event::Lifecycle => HookKind::Lifecycle,
            Event::Mouse(_) => HookKind::Mouse,
            Event::Wheel(_) => HookKind::Wheel,
            Event::Key(_) => HookKind::Key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer() -> PointerState {
        PointerState { x: 12.0, y: 34.0, button: Some(MouseButton::Right), pressed: true }
    }

    fn keys() -> KeyState {
        KeyState { key: "s".into(), key_code: 83 }
    }

    #[test]
    fn test_capture_matches_hook_kind() {
        for hook in HookName::ALL {
            let event = Event::capture(hook, pointer(), keys(), 0.0);
            assert_eq!(event.kind(), hook.kind(), "hook {hook}");
        }
    }

    #[test]
    fn test_capture_mouse_copies_pointer() {
        let event = Event::capture(HookName::MousePressed, pointer(), keys(), 0.0);
        assert_eq!(
            event,
            Event::Mouse(MouseEvent { x: 12.0, y: 34.0, button: Some(MouseButton::Right), pressed: true })
        );
    }

    #[test]
    fn test_capture_wheel_keeps_delta() {
        let Event::Wheel(wheel) = Event::capture(HookName::MouseWheel, pointer(), keys(), -120.0) else {
            panic!("expected wheel event");
        };
        assert_eq!(wheel.delta, -120.0);
        assert_eq!(wheel.pointer.x, 12.0);
    }

    #[test]
    fn test_capture_key() {
        let event = Event::capture(HookName::KeyTyped, pointer(), keys(), 0.0);
        assert_eq!(event, Event::Key(KeyEvent { key: "s".into(), key_code: 83 }));
    }

    #[test]
    fn test_mouse_button_names() {
        assert_eq!(MouseButton::from_name("center"), Some(MouseButton::Center));
        assert_eq!(MouseButton::from_name("0"), None);
    }
}
