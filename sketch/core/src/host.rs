//! Capability boundary between the bootstrap logic and the page it runs in.
//!
//! The web runtime implements these over the DOM and the global `p5`
//! constructor; tests implement them in memory.

use crate::registry::HandlerAdapter;
use futures::channel::oneshot;
use p5rs_common::{HookName, KeyState, LoadConfig, PointerState, SketchError};
use std::rc::Rc;

/// Completion signal for an asynchronous library load.
pub type LoadSignal = oneshot::Sender<Result<(), SketchError>>;

/// A live drawing-context instance owned by the external library.
///
/// Handles are cheap clones pointing at the same instance; p5rs never
/// controls the instance's lifetime.
pub trait Instance: Clone + 'static {
    /// Pointer position and button state right now.
    fn pointer(&self) -> PointerState;

    /// Last key seen by the instance.
    fn keys(&self) -> KeyState;

    /// Makes `adapter` the instance's callback for `hook`, replacing any
    /// previous one.
    fn install(&self, hook: HookName, adapter: Rc<HandlerAdapter<Self>>) -> Result<(), SketchError>;
}

pub trait MountPoint {
    /// Removes all children. Clearing an empty mount is a no-op.
    fn clear(&self);
}

pub trait Document {
    type Mount: MountPoint;

    /// Finds the first element matching `selector`.
    fn query(&self, selector: &str) -> Result<Option<Self::Mount>, SketchError>;
}

/// The external library's constructor.
pub trait Library<M> {
    type Instance: Instance;

    /// Builds a new instance inside `mount`. The library calls `entry` once
    /// with the fresh instance, either before returning or later.
    fn construct(
        &self,
        mount: &M,
        entry: Box<dyn FnOnce(Self::Instance)>,
    ) -> Result<(), SketchError>;
}

/// Where the library comes from when the page has not loaded it.
pub trait LibrarySource<M> {
    type Library: Library<M>;

    /// The library if it is already available.
    fn present(&self) -> Option<Self::Library>;

    /// Starts loading the library from `config.url`. `done` fires once the
    /// load finishes or fails.
    fn request(&self, config: &LoadConfig, done: LoadSignal) -> Result<(), SketchError>;
}
