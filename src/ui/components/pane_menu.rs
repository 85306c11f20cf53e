// Pane menu component - 패인 메뉴 (m)
//
// 활성 패인의 왼쪽 위에 뜨는 팝업 메뉴. 항목은 상황(분할 여부, 선택 여부)에 따라 달라진다.

use crate::core::actions::get_shortcut_display;
use crate::ui::layout::ActivePane;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};

/// 메뉴 항목 종류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItemKind {
    /// 일반 액션 항목
    Action,
    /// 구분선
    Separator,
}

/// 메뉴 항목
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// 액션 ID (액션 레지스트리의 id)
    pub id: String,
    /// 표시 레이블
    pub label: String,
    /// 단축키 표시
    pub shortcut: Option<String>,
    /// 항목 종류
    pub kind: MenuItemKind,
}

impl MenuItem {
    /// 액션 항목 생성
    pub fn action(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shortcut: None,
            kind: MenuItemKind::Action,
        }
    }

    /// 단축키 설정
    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// 구분선 생성
    pub fn separator() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            shortcut: None,
            kind: MenuItemKind::Separator,
        }
    }

    /// 구분선인지 확인
    pub fn is_separator(&self) -> bool {
        self.kind == MenuItemKind::Separator
    }
}

/// 메뉴 항목 생성 헬퍼 (레지스트리에서 단축키 자동 조회)
fn menu_action(id: &str, label: &str) -> MenuItem {
    let mut item = MenuItem::action(id, label);
    if let Some(shortcut) = get_shortcut_display(id) {
        item = item.shortcut(shortcut);
    }
    item
}

/// 패인 메뉴 항목 생성
///
/// 분할 켜기/끄기는 위 패인 메뉴에만 있다.
/// 복사 항목은 분할 모드에서 활성 패인에 선택 항목이 있을 때만 나타난다.
pub fn build_pane_menu(split: bool, has_selection: bool, active: ActivePane) -> Vec<MenuItem> {
    let mut items = vec![menu_action("settings", "Settings")];
    if split {
        if active == ActivePane::Upper {
            items.push(menu_action("toggle_split", "Close Split View"));
        }
        if has_selection {
            items.push(MenuItem::separator());
            let label = match active {
                ActivePane::Upper => "Copy to Lower View",
                ActivePane::Lower => "Copy to Upper View",
            };
            items.push(menu_action("copy", label));
        }
    } else {
        items.push(menu_action("toggle_split", "Split Window"));
    }
    items
}

/// 열린 패인 메뉴 상태
#[derive(Debug, Clone)]
pub struct PaneMenuState {
    /// 메뉴 항목들
    pub items: Vec<MenuItem>,
    /// 현재 선택된 항목 인덱스
    pub selected_item: usize,
}

impl PaneMenuState {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let selected_item = items.iter().position(|i| !i.is_separator()).unwrap_or(0);
        Self {
            items,
            selected_item,
        }
    }

    /// 다음 항목으로 이동 (구분선 건너뛰기)
    pub fn next_item(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        for _ in 0..len {
            self.selected_item = (self.selected_item + 1) % len;
            if !self.items[self.selected_item].is_separator() {
                break;
            }
        }
    }

    /// 이전 항목으로 이동 (구분선 건너뛰기)
    pub fn prev_item(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        for _ in 0..len {
            self.selected_item = (self.selected_item + len - 1) % len;
            if !self.items[self.selected_item].is_separator() {
                break;
            }
        }
    }

    /// 선택된 항목의 액션 ID
    pub fn selected_action_id(&self) -> Option<&str> {
        self.items
            .get(self.selected_item)
            .filter(|item| !item.is_separator())
            .map(|item| item.id.as_str())
    }
}

/// 패인 메뉴 위젯
pub struct PaneMenu<'a> {
    state: &'a PaneMenuState,
    bg_color: Color,
    fg_color: Color,
    selected_bg: Color,
    selected_fg: Color,
    border_color: Color,
    shortcut_color: Color,
}

impl<'a> PaneMenu<'a> {
    pub fn new(state: &'a PaneMenuState) -> Self {
        Self {
            state,
            bg_color: Color::Rgb(45, 45, 45),
            fg_color: Color::Rgb(212, 212, 212),
            selected_bg: Color::Rgb(0, 120, 212),
            selected_fg: Color::White,
            border_color: Color::Rgb(60, 60, 60),
            shortcut_color: Color::Rgb(150, 150, 150),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.file_normal.to_color();
        self.selected_bg = theme.file_selected_bg.to_color();
        self.selected_fg = theme.file_selected.to_color();
        self.border_color = theme.pane_active_border.to_color();
        self.shortcut_color = theme.file_info.to_color();
        self
    }

    /// 메뉴의 너비 계산
    fn calculate_width(&self) -> u16 {
        let max_label = self
            .state
            .items
            .iter()
            .map(|item| item.label.chars().count())
            .max()
            .unwrap_or(0);

        let max_shortcut = self
            .state
            .items
            .iter()
            .filter_map(|item| item.shortcut.as_ref())
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0);

        // 레이블 + 간격 + 단축키 + 테두리/패딩
        let width = max_label + 2 + max_shortcut + 4;
        (width as u16).max(15)
    }

    /// 메뉴 항목 렌더링
    fn render_item(&self, item: &MenuItem, is_selected: bool, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(2);
        if item.is_separator() {
            let line = "─".repeat(inner_width as usize);
            let span = Span::styled(&line, Style::default().fg(self.border_color));
            buf.set_span(area.x + 1, area.y, &span, inner_width);
            return;
        }

        let (bg, fg) = if is_selected {
            (self.selected_bg, self.selected_fg)
        } else {
            (self.bg_color, self.fg_color)
        };

        // 배경 채우기
        for x in area.x + 1..area.x + 1 + inner_width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_bg(bg);
            }
        }

        buf.set_span(
            area.x + 1,
            area.y,
            &Span::styled(format!(" {}", item.label), Style::default().fg(fg).bg(bg)),
            inner_width,
        );

        if let Some(ref shortcut) = item.shortcut {
            let shortcut_style = if is_selected {
                Style::default().fg(self.selected_fg).bg(bg)
            } else {
                Style::default().fg(self.shortcut_color).bg(bg)
            };
            let len = shortcut.chars().count() as u16;
            let right_x = (area.x + area.width).saturating_sub(len + 2);
            buf.set_span(right_x, area.y, &Span::styled(shortcut, shortcut_style), len);
        }
    }
}

impl Widget for PaneMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.items.is_empty() || area.width < 4 || area.height < 3 {
            return;
        }

        let menu_area = Rect {
            x: area.x,
            y: area.y,
            width: self.calculate_width().min(area.width),
            height: (self.state.items.len() as u16 + 2).min(area.height),
        };

        Clear.render(menu_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        block.render(menu_area, buf);

        for (i, item) in self.state.items.iter().enumerate() {
            let y = menu_area.y + 1 + i as u16;
            if y >= menu_area.y + menu_area.height - 1 {
                break;
            }
            let item_area = Rect {
                x: menu_area.x,
                y,
                width: menu_area.width,
                height: 1,
            };
            self.render_item(item, i == self.state.selected_item, item_area, buf);
        }
    }
}
