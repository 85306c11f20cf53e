use super::controllers;
use super::*;

impl App {
    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::MoveDown => self.move_cursor_down(),
            Action::MoveUp => self.move_cursor_up(),
            Action::GoToParent => self.go_to_parent(self.active_pane()),
            Action::EnterSelected => self.enter_selected(),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::PageUp => self.move_cursor_page_up(),
            Action::PageDown => self.move_cursor_page_down(),
            Action::TogglePane
            | Action::ToggleSplit
            | Action::GrowUpperPane
            | Action::ShrinkUpperPane
            | Action::OpenPaneMenu
            | Action::OpenSettings => controllers::view_controller::execute(self, action),
            Action::Copy
            | Action::ToggleSelection
            | Action::ClearSelection
            | Action::Refresh => controllers::operation_controller::execute(self, action),
        }
    }

    /// 메뉴 액션 실행 (action_id → Action 변환 후 위임)
    pub fn execute_menu_action(&mut self, action_id: &str) {
        if let Some(action) = Action::from_id(action_id) {
            self.execute_action(action);
        }
    }

    // === 패인 메뉴 ===

    /// 패인 메뉴가 열려 있는지
    pub fn is_menu_active(&self) -> bool {
        self.pane_menu.is_some()
    }

    /// 활성 패인 상황에 맞는 메뉴 열기
    pub fn open_pane_menu(&mut self) {
        let items = build_pane_menu(
            self.layout.is_split(),
            self.active_pane_state().selected_entry().is_some(),
            self.active_pane(),
        );
        self.pane_menu = Some(PaneMenuState::new(items));
    }

    pub fn close_pane_menu(&mut self) {
        self.pane_menu = None;
    }

    pub fn next_menu_item(&mut self) {
        if let Some(menu) = self.pane_menu.as_mut() {
            menu.next_item();
        }
    }

    pub fn prev_menu_item(&mut self) {
        if let Some(menu) = self.pane_menu.as_mut() {
            menu.prev_item();
        }
    }

    /// 선택된 메뉴 항목 실행 후 메뉴 닫기
    pub fn confirm_menu_item(&mut self) {
        let Some(menu) = self.pane_menu.take() else {
            return;
        };
        if let Some(id) = menu.selected_action_id() {
            let id = id.to_string();
            self.execute_menu_action(&id);
        }
    }

    // === 패인 / 분할 ===

    /// 활성 패인 전환 (분할 모드에서만)
    pub fn toggle_pane(&mut self) {
        self.layout.toggle_pane();
    }

    /// 분할 모드 토글
    ///
    /// 켤 때 아래 패인 목록을 다시 읽는다. 끄면 위 패인만 보이고 활성화된다.
    pub fn toggle_split(&mut self) {
        let split = !self.layout.is_split();
        self.layout.set_split(split);
        self.relayout();
        if split {
            let filesystem = self.filesystem;
            self.lower.reload(&filesystem);
            self.adjust_scroll_offset(ActivePane::Lower);
            self.schedule_item_counts();
        }
        self.adjust_scroll_offset(ActivePane::Upper);
    }

    /// 위 패인 비율 조정 (분할 모드에서만)
    pub fn resize_split(&mut self, delta: f32) {
        if !self.layout.is_split() {
            return;
        }
        self.layout.adjust_split_ratio(delta);
        self.relayout();
        self.adjust_scroll_offset(ActivePane::Upper);
        self.adjust_scroll_offset(ActivePane::Lower);
    }

    // === 디렉토리 이동 ===

    /// 디렉토리 진입
    ///
    /// 떠나는 경로의 스크롤 위치를 저장하고, 새 경로에 저장된 위치가 있으면 복원한다.
    /// 목록이 바뀌므로 선택은 해제된다.
    pub fn enter_directory(&mut self, which: ActivePane, path: PathBuf) {
        let leaving = self.pane(which).current_path.clone();
        let position = self.pane(which).scroll_position();
        self.scroll_positions.insert(leaving, position);
        let restored = self.scroll_positions.get(&path).copied();

        let filesystem = self.filesystem;
        let pane = self.pane_mut(which);
        pane.load(path, &filesystem);
        pane.restore_scroll(restored);

        self.adjust_scroll_offset(which);
        self.schedule_item_counts();
    }

    /// 상위 디렉토리로 이동할 수 있는지 (저장소 루트 안쪽에서만)
    pub fn can_go_to_parent(&self, path: &Path) -> bool {
        path != self.storage_root
            && path.starts_with(&self.storage_root)
            && path.parent().is_some()
    }

    /// 상위 디렉토리로 이동 (루트에서는 아무 일도 하지 않음)
    pub fn go_to_parent(&mut self, which: ActivePane) {
        let current = self.pane(which).current_path.clone();
        if !self.can_go_to_parent(&current) {
            return;
        }
        if let Some(parent) = current.parent() {
            self.enter_directory(which, parent.to_path_buf());
        }
    }

    /// 커서 항목 실행 (디렉토리: 진입, 파일: 선택 토글)
    pub fn enter_selected(&mut self) {
        let which = self.active_pane();
        let Some((is_dir, path)) = self
            .pane(which)
            .cursor_entry()
            .map(|e| (e.is_directory(), e.path.clone()))
        else {
            return;
        };

        if is_dir {
            self.enter_directory(which, path);
        } else {
            self.toggle_selection();
        }
    }

    // === 커서 이동 ===

    pub fn move_cursor_down(&mut self) {
        let pane = self.active_pane_state_mut();
        if pane.cursor + 1 < pane.entries.len() {
            pane.cursor += 1;
        }
        self.adjust_scroll_offset(self.active_pane());
    }

    pub fn move_cursor_up(&mut self) {
        let pane = self.active_pane_state_mut();
        pane.cursor = pane.cursor.saturating_sub(1);
        self.adjust_scroll_offset(self.active_pane());
    }

    pub fn go_to_top(&mut self) {
        self.active_pane_state_mut().cursor = 0;
        self.adjust_scroll_offset(self.active_pane());
    }

    pub fn go_to_bottom(&mut self) {
        let pane = self.active_pane_state_mut();
        pane.cursor = pane.entries.len().saturating_sub(1);
        self.adjust_scroll_offset(self.active_pane());
    }

    /// 반 페이지 위로 (Ctrl+U)
    pub fn move_cursor_page_up(&mut self) {
        let step = self.half_page(self.active_pane());
        let pane = self.active_pane_state_mut();
        pane.cursor = pane.cursor.saturating_sub(step);
        self.adjust_scroll_offset(self.active_pane());
    }

    /// 반 페이지 아래로 (Ctrl+D)
    pub fn move_cursor_page_down(&mut self) {
        let step = self.half_page(self.active_pane());
        let pane = self.active_pane_state_mut();
        let last = pane.entries.len().saturating_sub(1);
        pane.cursor = (pane.cursor + step).min(last);
        self.adjust_scroll_offset(self.active_pane());
    }

    /// 패인 한 화면에 보이는 항목 수
    pub(super) fn entries_per_page(&self, which: ActivePane) -> usize {
        let height = self.layout.pane_area(which).height;
        self.row_metrics().entries_per_page(height)
    }

    fn half_page(&self, which: ActivePane) -> usize {
        (self.entries_per_page(which) / 2).max(1)
    }

    /// 커서가 보이도록 스크롤 오프셋 조정
    pub(super) fn adjust_scroll_offset(&mut self, which: ActivePane) {
        let per_page = self.entries_per_page(which);
        let pane = self.pane_mut(which);
        if pane.cursor < pane.scroll_offset {
            pane.scroll_offset = pane.cursor;
        } else if pane.cursor >= pane.scroll_offset + per_page {
            pane.scroll_offset = pane.cursor + 1 - per_page;
        }
    }

    /// 터미널 크기가 바뀐 뒤 보이는 패인들의 스크롤 보정
    pub fn adjust_all_scroll_offsets(&mut self) {
        for which in self.visible_panes() {
            self.adjust_scroll_offset(which);
        }
    }
}
