use crate::models::file_entry::FileEntry;
use crate::system::filesystem::FileSystem;
use std::path::PathBuf;

/// 디렉토리별로 저장되는 스크롤 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollPosition {
    /// 커서 인덱스
    pub cursor: usize,
    /// 스크롤 오프셋 (첫 번째로 보이는 항목)
    pub offset: usize,
}

/// 패인 상태
///
/// 하나의 탐색 컨텍스트. 선택은 항상 현재 목록의 항목을 가리키며,
/// 목록이 교체되면 (이동이든 새로고침이든) 해제된다.
#[derive(Debug, Clone)]
pub struct PaneState {
    /// 현재 경로
    pub current_path: PathBuf,
    /// 파일 목록 (디렉토리 우선, 이름순)
    pub entries: Vec<FileEntry>,
    /// 커서 위치
    pub cursor: usize,
    /// 스크롤 오프셋
    pub scroll_offset: usize,
    /// 선택된 항목 인덱스
    selected: Option<usize>,
}

impl PaneState {
    /// 새 패인 상태 생성 (목록은 비어 있음)
    pub fn new(path: PathBuf) -> Self {
        Self {
            current_path: path,
            entries: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            selected: None,
        }
    }

    /// 주어진 경로로 목록 교체
    ///
    /// 선택은 항상 해제되고 커서는 새 목록 범위로 보정된다.
    pub fn load(&mut self, path: PathBuf, filesystem: &FileSystem) {
        self.entries = filesystem.list_directory(&path);
        self.current_path = path;
        self.selected = None;
        self.clamp_cursor();
    }

    /// 현재 경로 다시 읽기
    pub fn reload(&mut self, filesystem: &FileSystem) {
        let path = self.current_path.clone();
        self.load(path, filesystem);
    }

    /// 현재 스크롤 위치
    pub fn scroll_position(&self) -> ScrollPosition {
        ScrollPosition {
            cursor: self.cursor,
            offset: self.scroll_offset,
        }
    }

    /// 저장된 스크롤 위치 복원 (없으면 맨 위)
    pub fn restore_scroll(&mut self, position: Option<ScrollPosition>) {
        let position = position.unwrap_or_default();
        self.cursor = position.cursor;
        self.scroll_offset = position.offset;
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let last = self.entries.len().saturating_sub(1);
        self.cursor = self.cursor.min(last);
        self.scroll_offset = self.scroll_offset.min(self.cursor);
    }

    /// 커서 위치의 항목
    pub fn cursor_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor)
    }

    /// 선택된 항목
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected.and_then(|idx| self.entries.get(idx))
    }

    /// 선택된 항목 인덱스
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// 해당 인덱스가 선택되어 있는지 확인
    #[cfg(test)]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// 커서 위치 항목 선택 토글 (이미 선택된 항목이면 해제)
    pub fn toggle_selection_at_cursor(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = if self.selected == Some(self.cursor) {
            None
        } else {
            Some(self.cursor)
        };
    }

    /// 선택 해제
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// 파일 개수 반환
    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_file()).count()
    }

    /// 디렉토리 개수 반환
    pub fn dir_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_directory()).count()
    }
}
