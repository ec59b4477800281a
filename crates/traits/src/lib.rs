pub mod store;
pub mod view;

pub use store::{InMemoryScrollStore, ScrollStore, StoreError};
pub use view::SidebarView;
