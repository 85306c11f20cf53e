// Layout system - 상하 분할 레이아웃
//
// 레이아웃 모드:
// - 분할 모드: 위 패인 | 구분선 | 아래 패인
// - 단일 모드: 위 패인만 전체 높이 사용
// - 40x12 미만: 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

/// 분할 비율 (위 패인 비중)
pub const DEFAULT_SPLIT_RATIO: f32 = 0.5;
pub const SPLIT_RATIO_STEP: f32 = 0.05;
pub const SPLIT_RATIO_MIN: f32 = 0.1;
pub const SPLIT_RATIO_MAX: f32 = 0.9;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 위 패인만 표시
    Single,
    /// 두 패인 모두 표시
    Split,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 활성 패인
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    Upper,
    Lower,
}

impl ActivePane {
    /// 패인 전환
    pub fn toggle(&mut self) {
        *self = self.other();
    }

    /// 반대편 패인
    pub fn other(self) -> Self {
        match self {
            ActivePane::Upper => ActivePane::Lower,
            ActivePane::Lower => ActivePane::Upper,
        }
    }
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 위 패인 영역
    pub upper_pane: Rect,
    /// 패인 사이 구분선 (분할 모드에서만)
    pub divider: Rect,
    /// 아래 패인 영역 (분할 모드에서만)
    pub lower_pane: Rect,
    /// 상태바 영역
    pub status_bar: Rect,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
}

/// 레이아웃 상태
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// 현재 레이아웃 모드
    pub mode: LayoutMode,
    /// 분할 모드 켜짐 여부
    pub split: bool,
    /// 활성 패인
    pub active_pane: ActivePane,
    /// 위 패인 비율
    pub split_ratio: f32,
    /// 터미널 크기
    pub terminal_size: (u16, u16),
    /// 계산된 레이아웃 영역
    pub areas: LayoutAreas,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Single,
            split: false,
            active_pane: ActivePane::default(),
            split_ratio: DEFAULT_SPLIT_RATIO,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }
}

/// 레이아웃 매니저
#[derive(Debug, Default)]
pub struct LayoutManager {
    state: LayoutState,
}

impl LayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 터미널 크기와 분할 여부에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16, split: bool) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else if split {
            LayoutMode::Split
        } else {
            LayoutMode::Single
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.state.terminal_size = (area.width, area.height);
        self.state.mode = Self::determine_mode(area.width, area.height, self.state.split);
        self.state.areas = self.calculate_areas(area);
    }

    /// 레이아웃 영역 계산
    fn calculate_areas(&self, area: Rect) -> LayoutAreas {
        if self.state.mode == LayoutMode::TooSmall {
            return LayoutAreas::default();
        }

        // 메인 수직 레이아웃: 패인 영역 | 상태바 | 커맨드바
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // 패인 영역
                Constraint::Length(1), // 상태바
                Constraint::Length(1), // 커맨드바
            ])
            .split(area);
        let panes = vertical_chunks[0];

        let (upper_pane, divider, lower_pane) = if self.state.mode == LayoutMode::Split {
            let (upper_height, lower_height) = Self::split_heights(panes.height, self.state.split_ratio);
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(upper_height),
                    Constraint::Length(1),
                    Constraint::Length(lower_height),
                ])
                .split(panes);
            (chunks[0], chunks[1], chunks[2])
        } else {
            (panes, Rect::default(), Rect::default())
        };

        LayoutAreas {
            upper_pane,
            divider,
            lower_pane,
            status_bar: vertical_chunks[1],
            command_bar: vertical_chunks[2],
        }
    }

    /// 구분선 한 줄을 뺀 높이를 비율대로 분배 (각 패인 최소 1줄)
    fn split_heights(total: u16, ratio: f32) -> (u16, u16) {
        let available = total.saturating_sub(1);
        if available < 2 {
            return (available, 0);
        }
        let upper = (f32::from(available) * ratio).round() as u16;
        let upper = upper.clamp(1, available - 1);
        (upper, available - upper)
    }

    /// 현재 레이아웃 모드 반환
    pub fn mode(&self) -> LayoutMode {
        self.state.mode
    }

    /// 레이아웃 영역 반환
    pub fn areas(&self) -> &LayoutAreas {
        &self.state.areas
    }

    /// 활성 패인 반환
    pub fn active_pane(&self) -> ActivePane {
        self.state.active_pane
    }

    /// 패인 전환 (분할 모드에서만)
    pub fn toggle_pane(&mut self) {
        if self.state.split {
            self.state.active_pane.toggle();
        }
    }

    /// 분할 모드 여부
    pub fn is_split(&self) -> bool {
        self.state.split
    }

    /// 분할 모드 설정 (끄면 위 패인이 활성)
    pub fn set_split(&mut self, split: bool) {
        self.state.split = split;
        if !split {
            self.state.active_pane = ActivePane::Upper;
        }
    }

    /// 위 패인 비율 반환
    pub fn split_ratio(&self) -> f32 {
        self.state.split_ratio
    }

    /// 위 패인 비율 조정 (0.1..=0.9)
    pub fn adjust_split_ratio(&mut self, delta: f32) {
        let ratio = self.state.split_ratio + delta;
        // 부동소수 누적 오차 제거
        let ratio = (ratio * 100.0).round() / 100.0;
        self.state.split_ratio = ratio.clamp(SPLIT_RATIO_MIN, SPLIT_RATIO_MAX);
    }

    /// 터미널 크기 반환
    pub fn terminal_size(&self) -> (u16, u16) {
        self.state.terminal_size
    }

    /// 터미널이 너무 작은지 확인
    pub fn is_too_small(&self) -> bool {
        matches!(self.state.mode, LayoutMode::TooSmall)
    }

    /// 패인 영역 반환
    pub fn pane_area(&self, pane: ActivePane) -> Rect {
        match pane {
            ActivePane::Upper => self.state.areas.upper_pane,
            ActivePane::Lower => self.state.areas.lower_pane,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(80, 24, false), LayoutMode::Single);
        assert_eq!(LayoutManager::determine_mode(80, 24, true), LayoutMode::Split);
        assert_eq!(LayoutManager::determine_mode(40, 12, true), LayoutMode::Split);

        // TooSmall 모드
        assert_eq!(LayoutManager::determine_mode(39, 24, false), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 11, true), LayoutMode::TooSmall);
    }

    #[test]
    fn test_toggle_pane_requires_split() {
        let mut manager = LayoutManager::new();
        manager.toggle_pane();
        assert_eq!(manager.active_pane(), ActivePane::Upper);

        manager.set_split(true);
        manager.toggle_pane();
        assert_eq!(manager.active_pane(), ActivePane::Lower);

        // 분할 해제 시 위 패인으로 복귀
        manager.set_split(false);
        assert_eq!(manager.active_pane(), ActivePane::Upper);
    }

    #[test]
    fn test_split_areas() {
        let mut manager = LayoutManager::new();
        manager.set_split(true);
        manager.update(Rect::new(0, 0, 80, 24));

        let areas = manager.areas();
        // 24 - 상태바 - 커맨드바 = 22, 구분선 1줄 → 21줄을 반씩
        assert_eq!(areas.upper_pane.height + areas.lower_pane.height, 21);
        assert_eq!(areas.divider.height, 1);
        assert_eq!(areas.divider.y, areas.upper_pane.y + areas.upper_pane.height);
        assert_eq!(areas.status_bar.y, 22);
        assert_eq!(areas.command_bar.y, 23);
    }

    #[test]
    fn test_single_areas() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 80, 24));

        let areas = manager.areas();
        assert_eq!(areas.upper_pane.height, 22);
        assert_eq!(areas.lower_pane, Rect::default());
    }

    #[test]
    fn test_split_ratio_clamped() {
        let mut manager = LayoutManager::new();
        for _ in 0..20 {
            manager.adjust_split_ratio(SPLIT_RATIO_STEP);
        }
        assert!((manager.split_ratio() - SPLIT_RATIO_MAX).abs() < f32::EPSILON);

        for _ in 0..40 {
            manager.adjust_split_ratio(-SPLIT_RATIO_STEP);
        }
        assert!((manager.split_ratio() - SPLIT_RATIO_MIN).abs() < f32::EPSILON);
    }

    #[test]
    fn test_split_heights_keep_one_row_each() {
        assert_eq!(LayoutManager::split_heights(21, 0.1), (2, 18));
        assert_eq!(LayoutManager::split_heights(4, 0.9), (2, 1));
        assert_eq!(LayoutManager::split_heights(2, 0.5), (1, 0));
    }
}
