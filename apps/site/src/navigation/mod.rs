// Section navigation: catalog, router state machine, gesture and keyboard input,
// render-surface projection and the best-effort sinks it reports to.

pub mod catalog;
pub mod gesture;
pub mod handlers;
pub mod router;
pub mod sinks;
pub mod surface;

pub use catalog::{CatalogError, SectionCatalog};
pub use gesture::GestureClassifier;
pub use router::{NavSource, RouterSinks, SectionRouter};
pub use surface::MemorySurface;
