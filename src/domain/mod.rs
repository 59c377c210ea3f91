pub mod duration;
pub mod enums;
pub mod error;
pub mod event;
pub mod item;
pub mod modal;
pub mod search;
pub mod store;

pub use enums::{Tab, UiMode};
pub use event::{AppEvent, Key};
pub use item::{Assignment, Note, ReadingMaterial, Timer};
pub use modal::{ModalState, SearchState};
pub use store::{ItemStore, ListCursor};
