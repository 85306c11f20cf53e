// Data Models
pub mod file_entry;
pub mod item_counts;
pub mod pane_state;
pub mod preferences;

pub use item_counts::ItemCountCache;
pub use pane_state::{PaneState, ScrollPosition};
pub use preferences::{PreferenceStore, Preferences};
