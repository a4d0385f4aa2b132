use crate::host::Instance;
use indexmap::IndexMap;
use log::warn;
use p5rs_common::{Event, HookKind, HookName, KeyEvent, KeyState, MouseEvent, PointerState, SketchError, WheelEvent};
use std::cell::RefCell;
use std::rc::Rc;

type Callback<I> = Box<dyn FnMut(&I, &Event)>;

/// A caller's callback bound to one hook, in the shape the host calls it.
pub struct HandlerAdapter<I> {
    hook: HookName,
    callback: RefCell<Callback<I>>,
}

impl<I: Instance> HandlerAdapter<I> {
    pub fn new(hook: HookName, callback: impl FnMut(&I, &Event) + 'static) -> Self {
        Self {
            hook,
            callback: RefCell::new(Box::new(callback)),
        }
    }

    pub fn hook(&self) -> HookName {
        self.hook
    }

    /// Called by the host when p5 fires the hook. Input state is read from
    /// `instance` at call time; `wheel_delta` is only used by `mouseWheel`.
    pub fn invoke(&self, instance: &I, wheel_delta: f64) {
        let event = match self.hook.kind() {
            HookKind::Lifecycle => Event::Lifecycle,
            HookKind::Key => Event::capture(self.hook, PointerState::default(), instance.keys(), 0.0),
            HookKind::Mouse | HookKind::Wheel => {
                Event::capture(self.hook, instance.pointer(), KeyState::default(), wheel_delta)
            }
        };
        self.dispatch(instance, &event);
    }

    pub fn dispatch(&self, instance: &I, event: &Event) {
        match self.callback.try_borrow_mut() {
            Ok(mut callback) => callback(instance, event),
            Err(_) => warn!("skipping re-entrant {} callback", self.hook),
        }
    }
}

impl<I> std::fmt::Debug for HandlerAdapter<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerAdapter").field("hook", &self.hook).finish_non_exhaustive()
    }
}

/// Hook name to adapter. Registering a hook twice keeps the later adapter.
pub struct HandlerRegistry<I> {
    handlers: IndexMap<HookName, Rc<HandlerAdapter<I>>>,
}

impl<I: Instance> HandlerRegistry<I> {
    pub fn new() -> Self {
        Self { handlers: IndexMap::new() }
    }

    pub fn insert(&mut self, adapter: HandlerAdapter<I>) {
        self.handlers.insert(adapter.hook(), Rc::new(adapter));
    }

    pub fn get(&self, hook: HookName) -> Option<&Rc<HandlerAdapter<I>>> {
        self.handlers.get(&hook)
    }

    pub fn contains(&self, hook: HookName) -> bool {
        self.handlers.contains_key(&hook)
    }

    pub fn hooks(&self) -> impl Iterator<Item = HookName> + '_ {
        self.handlers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Installs every adapter onto `instance`, stopping at the first failure.
    pub fn install_all(&self, instance: &I) -> Result<(), SketchError> {
        for adapter in self.handlers.values() {
            instance.install(adapter.hook(), Rc::clone(adapter))?;
        }
        Ok(())
    }
}

impl<I: Instance> Default for HandlerRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// One pending hook binding, produced by a builder such as [`setup`].
pub struct Registration<I> {
    hook: HookName,
    callback: Callback<I>,
}

impl<I: Instance> Registration<I> {
    pub fn new(hook: HookName, callback: impl FnMut(&I, &Event) + 'static) -> Self {
        Self {
            hook,
            callback: Box::new(callback),
        }
    }

    pub fn hook(&self) -> HookName {
        self.hook
    }

    pub fn apply(self, registry: &mut HandlerRegistry<I>) {
        registry.insert(HandlerAdapter {
            hook: self.hook,
            callback: RefCell::new(self.callback),
        });
    }
}

impl<I> std::fmt::Debug for Registration<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration").field("hook", &self.hook).finish_non_exhaustive()
    }
}

// ─── Builders ───

fn lifecycle<I: Instance>(hook: HookName, mut f: impl FnMut(&I) + 'static) -> Registration<I> {
    Registration::new(hook, move |p, _| f(p))
}

fn mouse<I: Instance>(hook: HookName, mut f: impl FnMut(&I, &MouseEvent) + 'static) -> Registration<I> {
    Registration::new(hook, move |p, event| {
        if let Event::Mouse(mouse) = event {
            f(p, mouse);
        }
    })
}

fn key<I: Instance>(hook: HookName, mut f: impl FnMut(&I, &KeyEvent) + 'static) -> Registration<I> {
    Registration::new(hook, move |p, event| {
        if let Event::Key(key) = event {
            f(p, key);
        }
    })
}

pub fn preload<I: Instance>(f: impl FnMut(&I) + 'static) -> Registration<I> {
    lifecycle(HookName::Preload, f)
}

pub fn setup<I: Instance>(f: impl FnMut(&I) + 'static) -> Registration<I> {
    lifecycle(HookName::Setup, f)
}

pub fn draw<I: Instance>(f: impl FnMut(&I) + 'static) -> Registration<I> {
    lifecycle(HookName::Draw, f)
}

pub fn mouse_moved<I: Instance>(f: impl FnMut(&I, &MouseEvent) + 'static) -> Registration<I> {
    mouse(HookName::MouseMoved, f)
}

pub fn mouse_dragged<I: Instance>(f: impl FnMut(&I, &MouseEvent) + 'static) -> Registration<I> {
    mouse(HookName::MouseDragged, f)
}

pub fn mouse_pressed<I: Instance>(f: impl FnMut(&I, &MouseEvent) + 'static) -> Registration<I> {
    mouse(HookName::MousePressed, f)
}

pub fn mouse_released<I: Instance>(f: impl FnMut(&I, &MouseEvent) + 'static) -> Registration<I> {
    mouse(HookName::MouseReleased, f)
}

pub fn mouse_clicked<I: Instance>(f: impl FnMut(&I, &MouseEvent) + 'static) -> Registration<I> {
    mouse(HookName::MouseClicked, f)
}

pub fn double_clicked<I: Instance>(f: impl FnMut(&I, &MouseEvent) + 'static) -> Registration<I> {
    mouse(HookName::DoubleClicked, f)
}

pub fn mouse_wheel<I: Instance>(mut f: impl FnMut(&I, &WheelEvent) + 'static) -> Registration<I> {
    Registration::new(HookName::MouseWheel, move |p, event| {
        if let Event::Wheel(wheel) = event {
            f(p, wheel);
        }
    })
}

pub fn key_pressed<I: Instance>(f: impl FnMut(&I, &KeyEvent) + 'static) -> Registration<I> {
    key(HookName::KeyPressed, f)
}

pub fn key_released<I: Instance>(f: impl FnMut(&I, &KeyEvent) + 'static) -> Registration<I> {
    key(HookName::KeyReleased, f)
}

pub fn key_typed<I: Instance>(f: impl FnMut(&I, &KeyEvent) + 'static) -> Registration<I> {
    key(HookName::KeyTyped, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Default)]
    struct Probe {
        pointer: Rc<Cell<PointerState>>,
    }

    impl Instance for Probe {
        fn pointer(&self) -> PointerState {
            self.pointer.get()
        }

        fn keys(&self) -> KeyState {
            KeyState { key: "a".into(), key_code: 65 }
        }

        fn install(&self, _hook: HookName, _adapter: Rc<HandlerAdapter<Self>>) -> Result<(), SketchError> {
            Ok(())
        }
    }

    #[test]
    fn test_later_registration_overwrites() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = HandlerRegistry::new();
        let first = Rc::clone(&calls);
        setup(move |_: &Probe| first.borrow_mut().push("a")).apply(&mut registry);
        let second = Rc::clone(&calls);
        setup(move |_: &Probe| second.borrow_mut().push("b")).apply(&mut registry);

        assert_eq!(registry.len(), 1);
        registry.get(HookName::Setup).unwrap().invoke(&Probe::default(), 0.0);
        assert_eq!(*calls.borrow(), vec!["b"]);
    }

    #[test]
    fn test_distinct_hooks_accumulate() {
        let mut registry = HandlerRegistry::new();
        draw(|_: &Probe| {}).apply(&mut registry);
        setup(|_: &Probe| {}).apply(&mut registry);
        key_typed(|_: &Probe, _| {}).apply(&mut registry);

        let mut hooks: Vec<_> = registry.hooks().collect();
        hooks.sort_by_key(|h| h.as_str());
        assert_eq!(hooks, vec![HookName::Draw, HookName::KeyTyped, HookName::Setup]);
    }

    #[test]
    fn test_empty_registry() {
        let registry: HandlerRegistry<Probe> = HandlerRegistry::default();
        assert!(registry.is_empty());
        assert!(!registry.contains(HookName::Setup));
        assert!(registry.install_all(&Probe::default()).is_ok());
    }

    #[test]
    fn test_mouse_adapter_reads_pointer_at_call_time() {
        let seen = Rc::new(Cell::new((0.0, 0.0)));
        let sink = Rc::clone(&seen);
        let mut registry = HandlerRegistry::new();
        mouse_dragged(move |_: &Probe, e| sink.set((e.x, e.y))).apply(&mut registry);

        let probe = Probe::default();
        probe.pointer.set(PointerState { x: 5.0, y: 6.0, ..Default::default() });
        registry.get(HookName::MouseDragged).unwrap().invoke(&probe, 0.0);
        assert_eq!(seen.get(), (5.0, 6.0));
    }

    #[test]
    fn test_key_adapter_receives_key() {
        let seen = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&seen);
        let mut registry = HandlerRegistry::new();
        key_pressed(move |_: &Probe, e| *sink.borrow_mut() = e.key.clone()).apply(&mut registry);

        registry.get(HookName::KeyPressed).unwrap().invoke(&Probe::default(), 0.0);
        assert_eq!(*seen.borrow(), "a");
    }

    #[test]
    fn test_reentrant_dispatch_is_skipped() {
        let depth = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Rc<HandlerAdapter<Probe>>>>> = Rc::new(RefCell::new(None));

        let counter = Rc::clone(&depth);
        let inner = Rc::clone(&slot);
        let adapter = Rc::new(HandlerAdapter::new(HookName::Draw, move |p: &Probe, _| {
            counter.set(counter.get() + 1);
            if let Some(me) = inner.borrow().as_ref() {
                me.invoke(p, 0.0);
            }
        }));
        *slot.borrow_mut() = Some(Rc::clone(&adapter));

        adapter.invoke(&Probe::default(), 0.0);
        assert_eq!(depth.get(), 1);
        slot.borrow_mut().take();
    }
}
