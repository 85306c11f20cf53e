use super::super::*;

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action {
        Action::Copy => app.start_copy(),
        Action::ToggleSelection => app.toggle_selection(),
        Action::ClearSelection => app.clear_selection(),
        Action::Refresh => app.refresh_current(),
        _ => unreachable!("non-operation action: {:?}", action),
    }
}
