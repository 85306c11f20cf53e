// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{ActivePane, LayoutManager, LayoutMode};

// Re-export theme types
pub use theme::{Theme, ThemeManager};

// Re-export components
pub use components::{
    build_pane_menu, AccessScreen, CommandBar, Pane, PaneMenu, PaneMenuState, PaneStatus,
    RowMetrics, SettingsRow, SettingsScreen, StatusBar, WarningScreen,
};
