use crate::host::{Document, Library, LibrarySource, MountPoint};
use crate::loader::acquire;
use crate::registry::Registration;
use crate::sketch::Sketch;
use log::debug;
use p5rs_common::{LoadConfig, SketchError};
use std::future::Future;
use std::time::Duration;

type InstanceOf<S, M> = <<S as LibrarySource<M>>::Library as Library<M>>::Instance;

/// Looks up the mount point. Nothing on the page changes here.
pub fn resolve<D: Document>(document: &D, selector: &str) -> Result<D::Mount, SketchError> {
    document
        .query(selector)?
        .ok_or_else(|| SketchError::MountNotFound { selector: selector.to_string() })
}

/// Asks the library for a new instance inside `mount` and binds
/// `registrations` to it when the library hands it over.
pub fn construct<M, L: Library<M>>(
    library: &L,
    mount: &M,
    registrations: Vec<Registration<L::Instance>>,
) -> Result<Sketch<L::Instance>, SketchError> {
    let sketch = Sketch::new();
    let session = sketch.clone();
    library.construct(mount, Box::new(move |instance| session.bind(instance, registrations)))?;
    Ok(sketch)
}

/// Mounts a sketch on a page that already has the library loaded.
///
/// Steps run in order and stop at the first error: resolve the mount point,
/// clear it, construct the instance (binding every registration), validate.
pub fn bootstrap<D, L>(
    document: &D,
    library: &L,
    selector: &str,
    registrations: Vec<Registration<L::Instance>>,
) -> Result<Sketch<L::Instance>, SketchError>
where
    D: Document,
    L: Library<D::Mount>,
{
    let mount = resolve(document, selector)?;
    debug!("mounting sketch on `{selector}`");
    mount.clear();

    let sketch = construct(library, &mount, registrations)?;
    sketch.validate()?;
    debug!("sketch ready with hooks {:?}", sketch.hooks());
    Ok(sketch)
}

/// Like [`bootstrap`], but loads the library through `source` first when the
/// page does not have it. The mount point is resolved before any loading.
pub async fn bootstrap_with_loader<D, S, T>(
    document: &D,
    source: &S,
    config: &LoadConfig,
    timer: impl FnOnce(Duration) -> T,
    selector: &str,
    registrations: Vec<Registration<InstanceOf<S, D::Mount>>>,
) -> Result<Sketch<InstanceOf<S, D::Mount>>, SketchError>
where
    D: Document,
    S: LibrarySource<D::Mount>,
    T: Future<Output = ()>,
{
    let mount = resolve(document, selector)?;
    debug!("mounting sketch on `{selector}`");
    mount.clear();

    let library = acquire::<D::Mount, S, T>(source, config, timer).await?;
    let sketch = construct(&library, &mount, registrations)?;
    sketch.validate()?;
    debug!("sketch ready with hooks {:?}", sketch.hooks());
    Ok(sketch)
}
