pub mod node;
pub mod path;
pub mod tree;

pub use node::{NodeKind, TocNode};
pub use path::{NodePath, ParsePathError};
pub use tree::{PreOrder, TocTree};
