//! Helpline directory state: entries, grouping, and the responsive view
//! controller.
//!
//! ARCHITECTURE
//! ============
//! `store` holds the canonical list, `index` derives per-category groups,
//! `controller` owns the flat/grouped state machine, and `render` projects
//! that state into a model the DOM layer applies.

pub mod controller;
pub mod entry;
pub mod index;
pub mod render;
pub mod store;

pub use controller::{Filter, Mode, SortMode, Transition, ViewModeController, ViewState};
pub use entry::{Category, CategoryDescriptor, Entry, EntryId};
pub use index::CategoryIndex;
pub use render::RenderModel;
pub use store::CardStore;
