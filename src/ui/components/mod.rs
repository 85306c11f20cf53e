// UI Components
pub mod command_bar;
pub mod pane;
pub mod pane_menu;
pub mod settings_screen;
pub mod status_bar;
pub mod warning;

// Re-export components for convenience
pub use command_bar::CommandBar;
pub use pane::{Pane, PaneStatus, RowMetrics};
pub use pane_menu::{build_pane_menu, PaneMenu, PaneMenuState};
pub use settings_screen::{SettingsRow, SettingsScreen};
pub use status_bar::StatusBar;
pub use warning::{AccessScreen, WarningScreen};
