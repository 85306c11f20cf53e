use super::*;

impl App {
    // === 선택 ===

    /// 커서 항목 선택 토글 (이미 선택된 항목이면 해제)
    pub fn toggle_selection(&mut self) {
        self.active_pane_state_mut().toggle_selection_at_cursor();
    }

    /// 활성 패인 선택 해제
    pub fn clear_selection(&mut self) {
        self.active_pane_state_mut().clear_selection();
    }

    // === 새로고침 ===

    /// 활성 패인 다시 읽기 (Ctrl+R)
    pub fn refresh_current(&mut self) {
        let which = self.active_pane();
        let filesystem = self.filesystem;
        self.pane_mut(which).reload(&filesystem);
        self.adjust_scroll_offset(which);
        self.schedule_item_counts();
    }

    /// 두 패인 모두 다시 읽기
    pub fn refresh_both_panes(&mut self) {
        let filesystem = self.filesystem;
        self.upper.reload(&filesystem);
        self.lower.reload(&filesystem);
        self.adjust_scroll_offset(ActivePane::Upper);
        self.adjust_scroll_offset(ActivePane::Lower);
        self.schedule_item_counts();
    }

    // === 복사 ===

    /// 선택 항목을 반대쪽 패인의 디렉토리로 복사 시작
    ///
    /// 분할 모드에서 활성 패인에 선택 항목이 있을 때만 동작한다.
    /// 결과는 워커 이벤트로 도착한다.
    pub fn start_copy(&mut self) {
        if !self.layout.is_split() {
            self.set_toast("Copy needs split view");
            return;
        }
        let Some(source) = self.active_pane_state().selected_entry().map(|e| e.path.clone()) else {
            self.set_toast("Nothing selected");
            return;
        };
        let dest_dir = self.pane(self.active_pane().other()).current_path.clone();

        info!(
            source = %source.display(),
            dest = %dest_dir.display(),
            "copy requested"
        );
        self.pending_copies += 1;
        self.worker.spawn_copy(source, dest_dir);
    }

    // === 워커 이벤트 ===

    /// 도착한 워커 이벤트 반영 (메인 루프에서 매 프레임 호출)
    ///
    /// 복사 완료 시 성공 여부와 관계없이 두 패인을 다시 읽는다.
    /// 처리한 이벤트 수를 반환한다.
    pub fn process_worker_events(&mut self) -> usize {
        let events = self.worker.drain();
        let processed = events.len();
        for event in events {
            match event {
                WorkerEvent::CopyFinished { success, .. } => {
                    self.pending_copies = self.pending_copies.saturating_sub(1);
                    self.set_toast(if success {
                        "Copied successfully"
                    } else {
                        "Copy failed"
                    });
                    self.refresh_both_panes();
                }
                WorkerEvent::ItemCounted { path, count } => {
                    self.item_counts.complete(path, count);
                }
            }
        }
        processed
    }

    // === 항목 개수 ===

    /// 보이는 패인의 폴더 중 캐시에 없는 것의 개수 계산 요청
    ///
    /// 한 번 등록된 경로(계산 중 포함)는 다시 요청하지 않는다.
    pub fn schedule_item_counts(&mut self) {
        if !self.preferences.show_item_count {
            return;
        }
        let dirs: Vec<PathBuf> = self
            .visible_panes()
            .into_iter()
            .flat_map(|which| {
                self.pane(which)
                    .entries
                    .iter()
                    .filter(|e| e.is_directory())
                    .map(|e| e.path.clone())
                    .collect::<Vec<_>>()
            })
            .collect();

        for path in dirs {
            if self.item_counts.begin(&path) {
                self.worker.spawn_count(path);
            }
        }
    }
}
