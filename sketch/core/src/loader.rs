use crate::host::LibrarySource;
use futures::channel::oneshot;
use futures::future::{self, Either};
use log::{debug, warn};
use p5rs_common::{LoadConfig, SketchError};
use std::future::Future;
use std::time::Duration;

/// Returns the library, loading it first if the page does not have it.
///
/// The wait is a one-shot signal from [`LibrarySource::request`]. With a
/// timeout configured, `timer(timeout)` races the signal; without one the
/// wait never gives up.
pub async fn acquire<M, S, T>(
    source: &S,
    config: &LoadConfig,
    timer: impl FnOnce(Duration) -> T,
) -> Result<S::Library, SketchError>
where
    S: LibrarySource<M>,
    T: Future<Output = ()>,
{
    if let Some(library) = source.present() {
        debug!("p5.js already present");
        return Ok(library);
    }

    debug!("loading p5.js from {}", config.url);
    let (done, loaded) = oneshot::channel();
    source.request(config, done)?;

    let outcome = match config.timeout() {
        Some(timeout) => match future::select(loaded, Box::pin(timer(timeout))).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => {
                warn!("p5.js did not load within {} ms", timeout.as_millis());
                return Err(SketchError::LibraryUnavailable {
                    reason: format!("timed out after {} ms loading {}", timeout.as_millis(), config.url),
                });
            }
        },
        None => loaded.await,
    };

    outcome.map_err(|_| SketchError::LibraryUnavailable {
        reason: "load signal was dropped".to_string(),
    })??;

    source.present().ok_or_else(|| SketchError::LibraryUnavailable {
        reason: format!("{} loaded but did not define `p5`", config.url),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Instance, Library, LoadSignal};
    use crate::registry::HandlerAdapter;
    use futures::executor::block_on;
    use p5rs_common::{HookName, KeyState, PointerState};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone)]
    struct Nothing;

    impl Instance for Nothing {
        fn pointer(&self) -> PointerState {
            PointerState::default()
        }

        fn keys(&self) -> KeyState {
            KeyState::default()
        }

        fn install(&self, _: HookName, _: Rc<HandlerAdapter<Self>>) -> Result<(), SketchError> {
            Ok(())
        }
    }

    struct Lib;

    impl Library<()> for Lib {
        type Instance = Nothing;

        fn construct(&self, _: &(), entry: Box<dyn FnOnce(Nothing)>) -> Result<(), SketchError> {
            entry(Nothing);
            Ok(())
        }
    }

    #[derive(Default)]
    struct Source {
        present: Cell<bool>,
        defines_library: bool,
        requests: Cell<usize>,
        pending: RefCell<Option<LoadSignal>>,
    }

    impl Source {
        fn loading() -> Self {
            Self { defines_library: true, ..Default::default() }
        }

        fn finish(&self, outcome: Result<(), SketchError>) {
            if outcome.is_ok() && self.defines_library {
                self.present.set(true);
            }
            if let Some(done) = self.pending.borrow_mut().take() {
                let _ = done.send(outcome);
            }
        }
    }

    impl LibrarySource<()> for Source {
        type Library = Lib;

        fn present(&self) -> Option<Lib> {
            self.present.get().then_some(Lib)
        }

        fn request(&self, _: &LoadConfig, done: LoadSignal) -> Result<(), SketchError> {
            self.requests.set(self.requests.get() + 1);
            *self.pending.borrow_mut() = Some(done);
            Ok(())
        }
    }

    fn never(_: Duration) -> future::Pending<()> {
        future::pending()
    }

    #[test]
    fn test_present_library_skips_loading() {
        let source = Source::loading();
        source.present.set(true);
        let result = block_on(acquire::<(), _, _>(&source, &LoadConfig::default(), never));
        assert!(result.is_ok());
        assert_eq!(source.requests.get(), 0);
    }

    #[test]
    fn test_load_signal_unblocks_waiter() {
        let source = Source::loading();
        let config = LoadConfig::default().with_timeout(None);
        let (result, ()) = block_on(future::join(acquire::<(), _, _>(&source, &config, never), async {
            source.finish(Ok(()));
        }));
        assert!(result.is_ok());
        assert_eq!(source.requests.get(), 1);
    }

    #[test]
    fn test_failed_load_is_unavailable() {
        let source = Source::loading();
        let (result, ()) = block_on(future::join(acquire::<(), _, _>(&source, &LoadConfig::default(), never), async {
            source.finish(Err(SketchError::LibraryUnavailable { reason: "404".into() }));
        }));
        assert_eq!(result.err(), Some(SketchError::LibraryUnavailable { reason: "404".into() }));
    }

    #[test]
    fn test_script_without_p5_is_unavailable() {
        let source = Source::default();
        let (result, ()) = block_on(future::join(acquire::<(), _, _>(&source, &LoadConfig::default(), never), async {
            source.finish(Ok(()));
        }));
        assert!(matches!(result, Err(SketchError::LibraryUnavailable { .. })));
    }

    #[test]
    fn test_timeout_fires_first() {
        let source = Source::loading();
        let config = LoadConfig::default().with_timeout(Some(Duration::from_millis(250)));
        let result = block_on(acquire::<(), _, _>(&source, &config, |_| future::ready(())));
        let Err(SketchError::LibraryUnavailable { reason }) = result else {
            panic!("expected timeout");
        };
        assert!(reason.starts_with("timed out after 250 ms"), "{reason}");
    }

    #[test]
    fn test_dropped_signal_is_unavailable() {
        let source = Source::loading();
        let (result, ()) = block_on(future::join(acquire::<(), _, _>(&source, &LoadConfig::default(), never), async {
            source.pending.borrow_mut().take();
        }));
        assert!(matches!(result, Err(SketchError::LibraryUnavailable { .. })));
    }
}
