use super::super::*;
use crate::ui::layout::SPLIT_RATIO_STEP;

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action {
        Action::TogglePane => app.toggle_pane(),
        Action::ToggleSplit => app.toggle_split(),
        Action::GrowUpperPane => app.resize_split(SPLIT_RATIO_STEP),
        Action::ShrinkUpperPane => app.resize_split(-SPLIT_RATIO_STEP),
        Action::OpenPaneMenu => app.open_pane_menu(),
        Action::OpenSettings => app.open_settings(),
        _ => unreachable!("non-view action: {:?}", action),
    }
}
