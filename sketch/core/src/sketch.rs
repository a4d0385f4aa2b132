use crate::host::Instance;
use crate::registry::{HandlerRegistry, Registration};
use log::debug;
use p5rs_common::{HookName, SketchError};
use std::cell::RefCell;
use std::rc::Rc;

struct SketchState<I> {
    instance: Option<I>,
    registry: HandlerRegistry<I>,
    bind_error: Option<SketchError>,
}

/// Handle to one bootstrapped sketch: the external instance plus the
/// handlers bound to it. Clones share the same session.
pub struct Sketch<I> {
    state: Rc<RefCell<SketchState<I>>>,
}

impl<I> Clone for Sketch<I> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}

impl<I: Instance> Sketch<I> {
    pub(crate) fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SketchState {
                instance: None,
                registry: HandlerRegistry::new(),
                bind_error: None,
            })),
        }
    }

    /// The live instance, once the library has handed it over.
    pub fn instance(&self) -> Option<I> {
        self.state.borrow().instance.clone()
    }

    pub fn hooks(&self) -> Vec<HookName> {
        self.state.borrow().registry.hooks().collect()
    }

    pub fn contains(&self, hook: HookName) -> bool {
        self.state.borrow().registry.contains(hook)
    }

    /// Entry point handed to the library: applies registrations in order,
    /// then installs every handler onto `instance`.
    pub(crate) fn bind(&self, instance: I, registrations: Vec<Registration<I>>) {
        let mut state = self.state.borrow_mut();
        for registration in registrations {
            registration.apply(&mut state.registry);
        }
        debug!("binding {} hook(s) onto new instance", state.registry.len());

        let result = state.registry.install_all(&instance);
        state.instance = Some(instance);
        if let Err(err) = result {
            state.bind_error = Some(err);
        }
    }

    /// Checks the minimum runnable configuration. Reports only the first
    /// problem found.
    pub fn validate(&self) -> Result<(), SketchError> {
        let state = self.state.borrow();
        if state.instance.is_none() {
            return Err(SketchError::InstanceNotInitialized);
        }
        if let Some(err) = &state.bind_error {
            return Err(err.clone());
        }
        for hook in HookName::REQUIRED {
            if !state.registry.contains(hook) {
                return Err(SketchError::MissingRequiredHook { hook });
            }
        }
        Ok(())
    }
}

impl<I: Instance> std::fmt::Debug for Sketch<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Sketch")
            .field("bound", &state.instance.is_some())
            .field("hooks", &state.registry.len())
            .finish()
    }
}
