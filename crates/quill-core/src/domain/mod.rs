//! Domain entities - the core business objects.

mod collection;
mod draft;
mod post;
mod view;

pub use collection::PostCollection;
pub use draft::{Draft, ValidDraft};
pub use post::{Post, PostId};
pub use view::{EditMode, ParseViewError, View};
