pub(super) mod operation_controller;
pub(super) mod view_controller;
