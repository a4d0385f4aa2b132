use crate::error::SketchError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A lifecycle or input callback name recognized by the p5 runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HookName {
    Preload,
    Setup,
    Draw,
    MouseMoved,
    MouseDragged,
    MousePressed,
    MouseReleased,
    MouseClicked,
    DoubleClicked,
    MouseWheel,
    KeyPressed,
    KeyReleased,
    KeyTyped,
}

/// Which event payload a hook receives when p5 calls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookKind {
    Lifecycle,
    Mouse,
    Wheel,
    Key,
}

impl HookName {
    pub const ALL: [HookName; 13] = [
        HookName::Preload,
        HookName::Setup,
        HookName::Draw,
        HookName::MouseMoved,
        HookName::MouseDragged,
        HookName::MousePressed,
        HookName::MouseReleased,
        HookName::MouseClicked,
        HookName::DoubleClicked,
        HookName::MouseWheel,
        HookName::KeyPressed,
        HookName::KeyReleased,
        HookName::KeyTyped,
    ];

    /// Hooks a sketch cannot run without.
    pub const REQUIRED: [HookName; 2] = [HookName::Setup, HookName::Draw];

    /// The property name p5 looks up on the sketch instance.
    pub fn as_str(self) -> &'static str {
        match self {
            HookName::Preload => "preload",
            HookName::Setup => "setup",
            HookName::Draw => "draw",
            HookName::MouseMoved => "mouseMoved",
            HookName::MouseDragged => "mouseDragged",
            HookName::MousePressed => "mousePressed",
            HookName::MouseReleased => "mouseReleased",
            HookName::MouseClicked => "mouseClicked",
            HookName::DoubleClicked => "doubleClicked",
            HookName::MouseWheel => "mouseWheel",
            HookName::KeyPressed => "keyPressed",
            HookName::KeyReleased => "keyReleased",
            HookName::KeyTyped => "keyTyped",
        }
    }

    pub fn kind(self) -> HookKind {
        match self {
            HookName::Preload | HookName::Setup | HookName::Draw => HookKind::Lifecycle,
            HookName::MouseMoved
            | HookName::MouseDragged
            | HookName::MousePressed
            | HookName::MouseReleased
            | HookName::MouseClicked
            | HookName::DoubleClicked => HookKind::Mouse,
            HookName::MouseWheel => HookKind::Wheel,
            HookName::KeyPressed | HookName::KeyReleased | HookName::KeyTyped => HookKind::Key,
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

impl std::fmt::Display for HookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for HookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookKind::Lifecycle => write!(f, "lifecycle"),
            HookKind::Mouse => write!(f, "mouse"),
            HookKind::Wheel => write!(f, "wheel"),
            HookKind::Key => write!(f, "key"),
        }
    }
}

impl FromStr for HookName {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookName::ALL
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| SketchError::UnknownHook { name: s.to_string() })
    }
}
