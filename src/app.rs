use crate::config::AppConfig;
use crate::core::actions::Action;
use crate::models::{ItemCountCache, PaneState, PreferenceStore, Preferences, ScrollPosition};
use crate::system::{BackgroundWorker, FileSystem, WorkerEvent};
use crate::ui::{
    build_pane_menu, ActivePane, LayoutManager, LayoutMode, PaneMenuState, RowMetrics,
    SettingsRow, ThemeManager,
};
use crate::utils::error::Result;
use ratatui::layout::Rect;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

mod controllers;
mod navigation;
mod operations;
mod settings;

/// 현재 화면
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// 파일 브라우저
    #[default]
    Browser,
    /// 표시 설정
    Settings,
    /// 저장소 루트 접근 불가
    AccessRequired,
}

/// 앱 상태
///
/// 패인, 선택, 설정 상태는 모두 UI 스레드만 소유한다.
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 위 패인
    pub upper: PaneState,
    /// 아래 패인
    pub lower: PaneState,
    /// 파일 시스템
    pub filesystem: FileSystem,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 표시 설정
    pub preferences: Preferences,
    preference_store: PreferenceStore,
    /// 폴더 하위 항목 개수 캐시
    pub item_counts: ItemCountCache,
    /// 디렉토리별 스크롤 위치 (두 패인이 공유)
    scroll_positions: HashMap<PathBuf, ScrollPosition>,
    /// 탐색 상한 디렉토리
    storage_root: PathBuf,
    /// 복사/개수 계산 워커
    worker: BackgroundWorker,
    /// 완료 이벤트를 기다리는 복사 작업 수
    pending_copies: usize,
    /// 현재 화면
    pub screen: Screen,
    /// 설정 화면 커서
    pub settings_cursor: usize,
    /// 열린 패인 메뉴
    pub pane_menu: Option<PaneMenuState>,
    /// 대기 중인 키 (예: 'g' for 'gg')
    pub pending_key: Option<char>,
    /// 대기 키 입력 시각
    pub pending_key_time: Option<Instant>,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
}

impl App {
    const TOAST_SECS: u64 = 3;
    const PENDING_KEY_MILLIS: u128 = 800;

    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_theme(config, ThemeManager::new())
    }

    fn with_theme(config: AppConfig, mut theme_manager: ThemeManager) -> Result<Self> {
        let storage_root = fs::canonicalize(&config.storage_root).unwrap_or(config.storage_root);
        let preference_store = PreferenceStore::new(config.settings_file);
        let preferences = preference_store.load();
        theme_manager.apply(&preferences);

        let mut layout = LayoutManager::new();
        layout.set_split(config.start_split);

        let mut app = Self {
            should_quit: false,
            layout,
            upper: PaneState::new(storage_root.clone()),
            lower: PaneState::new(storage_root.clone()),
            filesystem: FileSystem::new(),
            theme_manager,
            preferences,
            preference_store,
            item_counts: ItemCountCache::new(),
            scroll_positions: HashMap::new(),
            storage_root,
            worker: BackgroundWorker::new()?,
            pending_copies: 0,
            screen: Screen::Browser,
            settings_cursor: 0,
            pane_menu: None,
            pending_key: None,
            pending_key_time: None,
            toast_message: None,
        };

        info!(
            root = %app.storage_root.display(),
            settings = ?app.preference_store.path(),
            split = app.layout.is_split(),
            "starting"
        );
        app.check_storage_access();
        Ok(app)
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(root: &Path, settings_file: Option<PathBuf>) -> Self {
        let config = AppConfig {
            storage_root: root.to_path_buf(),
            settings_file,
            log_file: None,
            start_split: false,
        };
        let mut app = Self::with_theme(config, ThemeManager::with_system_dark(true))
            .expect("test app should start");
        app.layout.update(Rect::new(0, 0, 80, 24));
        app
    }

    /// 저장소 루트 접근 확인 후 화면 결정
    ///
    /// 읽을 수 있으면 패인을 채우고 브라우저로, 아니면 접근 안내 화면으로.
    pub fn check_storage_access(&mut self) {
        if self.filesystem.is_readable_dir(&self.storage_root) {
            let filesystem = self.filesystem;
            self.upper.load(self.storage_root.clone(), &filesystem);
            if self.layout.is_split() {
                self.lower.load(self.storage_root.clone(), &filesystem);
            }
            self.screen = Screen::Browser;
            self.schedule_item_counts();
        } else {
            warn!(root = %self.storage_root.display(), "storage root is not readable");
            self.screen = Screen::AccessRequired;
        }
    }

    /// 종료
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 탐색 상한 디렉토리
    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    /// 활성 패인
    pub fn active_pane(&self) -> ActivePane {
        self.layout.active_pane()
    }

    pub fn pane(&self, which: ActivePane) -> &PaneState {
        match which {
            ActivePane::Upper => &self.upper,
            ActivePane::Lower => &self.lower,
        }
    }

    pub fn pane_mut(&mut self, which: ActivePane) -> &mut PaneState {
        match which {
            ActivePane::Upper => &mut self.upper,
            ActivePane::Lower => &mut self.lower,
        }
    }

    pub fn active_pane_state(&self) -> &PaneState {
        self.pane(self.active_pane())
    }

    pub fn active_pane_state_mut(&mut self) -> &mut PaneState {
        self.pane_mut(self.active_pane())
    }

    /// 화면에 보이는 패인들
    pub fn visible_panes(&self) -> Vec<ActivePane> {
        if self.layout.is_split() {
            vec![ActivePane::Upper, ActivePane::Lower]
        } else {
            vec![ActivePane::Upper]
        }
    }

    /// 현재 설정에서 계산한 행 배치
    pub fn row_metrics(&self) -> RowMetrics {
        RowMetrics::from_preferences(&self.preferences)
    }

    /// 진행 중인 복사 작업이 있는지
    pub fn has_pending_copies(&self) -> bool {
        self.pending_copies > 0
    }

    /// 상태바용 레이아웃 표시 문자열
    pub fn layout_mode_str(&self) -> &'static str {
        match (self.layout.mode(), self.active_pane()) {
            (LayoutMode::Split, ActivePane::Upper) => "SPLIT ▲",
            (LayoutMode::Split, ActivePane::Lower) => "SPLIT ▼",
            (LayoutMode::Single, _) => "SINGLE",
            (LayoutMode::TooSmall, _) => "TOO SMALL",
        }
    }

    /// 저장된 터미널 크기로 레이아웃 영역 재계산
    fn relayout(&mut self) {
        let (width, height) = self.layout.terminal_size();
        self.layout.update(Rect::new(0, 0, width, height));
    }

    // === 토스트 ===

    /// 토스트 메시지 설정
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed().as_secs() >= Self::TOAST_SECS {
                self.toast_message = None;
            }
        }
    }

    /// 토스트 메시지 가져오기 (만료 안 된 경우만)
    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message.as_ref().and_then(|(msg, time)| {
            (time.elapsed().as_secs() < Self::TOAST_SECS).then_some(msg.as_str())
        })
    }

    // === 키 시퀀스 (gg) ===

    /// 대기 키 설정
    pub fn set_pending_key(&mut self, key: char) {
        self.pending_key = Some(key);
        self.pending_key_time = Some(Instant::now());
    }

    /// 대기 키 초기화
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
        self.pending_key_time = None;
    }

    /// 대기 키 만료 여부 (800ms)
    pub fn is_pending_key_expired(&self) -> bool {
        self.pending_key_time
            .is_some_and(|t| t.elapsed().as_millis() > Self::PENDING_KEY_MILLIS)
    }

    /// 대기 키 표시 문자열 (상태바용)
    pub fn pending_key_display(&self) -> Option<String> {
        self.pending_key.map(|k| format!("{}_", k))
    }
}

#[cfg(test)]
mod tests;
