// Pane component - 파일 패인 컴포넌트
//
// 파일 리스트 표시, 커서/선택 상태, 표시 설정 반영, 테두리 렌더링

use crate::models::file_entry::FileEntry;
use crate::models::item_counts::ItemCountCache;
use crate::models::preferences::Preferences;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 패인 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneStatus {
    #[default]
    Inactive,
    Active,
}

/// 행 배치 설정 (표시 설정에서 계산)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowMetrics {
    /// 항목 사이 빈 줄 수
    pub spacing_rows: u16,
    /// 항목 사이 구분선
    pub divider: bool,
    /// 파일명 굵게
    pub bold_names: bool,
    /// 정보 텍스트 흐리게
    pub dim_info: bool,
}

impl RowMetrics {
    /// 이 크기 이상이면 파일명을 굵게 표시
    const BOLD_NAME_FONT_SIZE: f32 = 18.0;
    /// 이 크기 이하면 정보 텍스트를 흐리게 표시
    const DIM_INFO_FONT_SIZE: f32 = 9.0;
    /// 빈 줄 하나에 해당하는 간격 (dp)
    const SPACING_PER_ROW: f32 = 8.0;

    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            spacing_rows: (prefs.item_spacing / Self::SPACING_PER_ROW).floor().max(0.0) as u16,
            divider: prefs.show_divider,
            bold_names: prefs.name_font_size >= Self::BOLD_NAME_FONT_SIZE,
            dim_info: prefs.info_font_size <= Self::DIM_INFO_FONT_SIZE,
        }
    }

    /// 항목 하나가 차지하는 줄 수
    pub fn row_height(&self) -> u16 {
        1 + self.spacing_rows + u16::from(self.divider)
    }

    /// 패인 영역(테두리 포함) 높이에 들어가는 항목 수 (최소 1)
    pub fn entries_per_page(&self, pane_height: u16) -> usize {
        let inner = pane_height.saturating_sub(2);
        usize::from((inner / self.row_height()).max(1))
    }
}

/// 패인 컴포넌트
pub struct Pane<'a> {
    /// 패인 제목 (경로)
    title: &'a str,
    /// 패인 상태
    status: PaneStatus,
    /// 파일 목록
    entries: &'a [FileEntry],
    /// 커서 위치
    cursor: usize,
    /// 스크롤 오프셋
    scroll_offset: usize,
    /// 선택된 항목
    selected: Option<usize>,
    /// 폴더 항목 개수 (표시 설정이 켜진 경우)
    item_counts: Option<&'a ItemCountCache>,
    metrics: RowMetrics,
    active_border_color: Color,
    inactive_border_color: Color,
    bg_color: Color,
    file_normal_color: Color,
    file_info_color: Color,
    cursor_bg_color: Color,
    file_selected_color: Color,
    file_selected_bg_color: Color,
    directory_color: Color,
    row_divider_color: Color,
}

impl<'a> Default for Pane<'a> {
    fn default() -> Self {
        Self {
            title: "",
            status: PaneStatus::default(),
            entries: &[],
            cursor: 0,
            scroll_offset: 0,
            selected: None,
            item_counts: None,
            metrics: RowMetrics::default(),
            active_border_color: Color::Rgb(0, 120, 212),
            inactive_border_color: Color::Rgb(60, 60, 60),
            bg_color: Color::Rgb(30, 30, 30),
            file_normal_color: Color::Rgb(212, 212, 212),
            file_info_color: Color::Rgb(158, 158, 158),
            cursor_bg_color: Color::Rgb(42, 45, 46),
            file_selected_color: Color::Rgb(255, 255, 255),
            file_selected_bg_color: Color::Rgb(38, 79, 120),
            directory_color: Color::Rgb(255, 179, 0),
            row_divider_color: Color::Rgb(51, 51, 51),
        }
    }
}

impl<'a> Pane<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 제목 설정
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// 패인 상태 설정
    pub fn status(mut self, status: PaneStatus) -> Self {
        self.status = status;
        self
    }

    /// 파일 목록 설정
    pub fn entries(mut self, entries: &'a [FileEntry]) -> Self {
        self.entries = entries;
        self
    }

    /// 커서 위치 설정
    pub fn cursor(mut self, index: usize) -> Self {
        self.cursor = index;
        self
    }

    /// 스크롤 오프셋 설정
    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// 선택 항목 설정
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// 폴더 항목 개수 표시 (None이면 표시 안 함)
    pub fn item_counts(mut self, counts: Option<&'a ItemCountCache>) -> Self {
        self.item_counts = counts;
        self
    }

    /// 행 배치 설정
    pub fn metrics(mut self, metrics: RowMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.active_border_color = theme.pane_active_border.to_color();
        self.inactive_border_color = theme.pane_inactive_border.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.file_normal_color = theme.file_normal.to_color();
        self.file_info_color = theme.file_info.to_color();
        self.cursor_bg_color = theme.cursor_bg.to_color();
        self.file_selected_color = theme.file_selected.to_color();
        self.file_selected_bg_color = theme.file_selected_bg.to_color();
        self.directory_color = theme.directory.to_color();
        self.row_divider_color = theme.row_divider.to_color();
        self
    }

    /// 테두리 색상 반환
    fn border_color(&self) -> Color {
        match self.status {
            PaneStatus::Active => self.active_border_color,
            PaneStatus::Inactive => self.inactive_border_color,
        }
    }

    /// 제목 스타일 반환
    fn title_style(&self) -> Style {
        let base = Style::default().fg(self.file_normal_color);
        match self.status {
            PaneStatus::Active => base.add_modifier(Modifier::BOLD),
            PaneStatus::Inactive => base,
        }
    }

    /// 오른쪽 정보 텍스트 (폴더: 항목 수 + 수정 시간, 파일: 크기 + 수정 시간)
    fn info_text(&self, entry: &FileEntry, with_date: bool) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(2);
        if entry.is_directory() {
            if let Some(counts) = self.item_counts {
                if let Some(count) = counts.get(&entry.path) {
                    parts.push(format!("{} items", count));
                } else if counts.contains(&entry.path) {
                    parts.push("counting...".to_string());
                }
            }
        } else if !entry.size.is_empty() {
            parts.push(entry.size.clone());
        }
        if with_date && !entry.last_modified.is_empty() {
            parts.push(entry.last_modified.clone());
        }
        parts.join("  ")
    }

    /// 경로를 최대 너비에 맞게 축약 (홈 디렉토리 ~로 축약 + 앞부분 생략)
    fn truncate_path(&self, path: &str, max_width: usize) -> String {
        let home_relative = dirs::home_dir()
            .filter(|home| home.parent().is_some())
            .and_then(|home| {
                std::path::Path::new(path)
                    .strip_prefix(&home)
                    .ok()
                    .map(|rest| rest.to_path_buf())
            });
        let path = match home_relative {
            Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
            Some(rest) => format!("~/{}", rest.display()),
            None => path.to_string(),
        };

        if path.width() <= max_width {
            return path;
        }

        let ellipsis = "...";
        let available_width = max_width.saturating_sub(ellipsis.width());
        let mut kept: Vec<char> = Vec::new();
        let mut current_width = 0;
        for ch in path.chars().rev() {
            let ch_width = ch.width().unwrap_or(1);
            if current_width + ch_width > available_width {
                break;
            }
            kept.push(ch);
            current_width += ch_width;
        }
        kept.reverse();
        format!("{}{}", ellipsis, kept.into_iter().collect::<String>())
    }

    /// 단일 파일 행 렌더링
    fn render_entry(
        &self,
        entry: &FileEntry,
        entry_index: usize,
        content_width: usize,
        x: u16,
        y: u16,
        buf: &mut Buffer,
    ) {
        let is_cursor = self.status == PaneStatus::Active && entry_index == self.cursor;
        let is_selected = self.selected == Some(entry_index);

        let bg = if is_selected {
            Some(self.file_selected_bg_color)
        } else if is_cursor {
            Some(self.cursor_bg_color)
        } else {
            None
        };
        let with_bg = |style: Style| match bg {
            Some(color) => style.bg(color),
            None => style,
        };

        let name_fg = if is_selected {
            self.file_selected_color
        } else if entry.is_directory() {
            self.directory_color
        } else {
            self.file_normal_color
        };
        let mut name_style = with_bg(Style::default().fg(name_fg));
        if self.metrics.bold_names || is_cursor {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }
        let mut info_style = with_bg(Style::default().fg(if is_selected {
            self.file_selected_color
        } else {
            self.file_info_color
        }));
        if self.metrics.dim_info {
            info_style = info_style.add_modifier(Modifier::DIM);
        }
        let icon_style = with_bg(Style::default().fg(if entry.is_directory() {
            self.directory_color
        } else {
            self.file_info_color
        }));

        let marker = if is_selected {
            "*"
        } else if is_cursor {
            ">"
        } else {
            " "
        };
        let icon = if entry.is_directory() { "📁 " } else { "📄 " };
        let prefix_width = marker.width() + icon.width();

        // 폭이 좁으면 날짜를 생략
        let mut info = self.info_text(entry, true);
        if content_width.saturating_sub(prefix_width + info.width() + 1) < 12 {
            info = self.info_text(entry, false);
        }
        let info_width = info.width();

        let name_width = content_width.saturating_sub(prefix_width + info_width + 1);
        let display_name = truncate_name(&entry.name, name_width);
        let padding = content_width.saturating_sub(prefix_width + display_name.width() + info_width);

        let spans = vec![
            Span::styled(marker, with_bg(Style::default().fg(self.file_selected_color))),
            Span::styled(icon, icon_style),
            Span::styled(display_name, name_style),
            Span::styled(" ".repeat(padding), with_bg(Style::default())),
            Span::styled(info, info_style),
        ];
        buf.set_line(x, y, &Line::from(spans), content_width as u16);
    }

    /// 빈 목록 메시지 렌더링
    fn render_empty_state(&self, inner: Rect, buf: &mut Buffer) {
        let empty_text = Line::from(vec![Span::styled(
            " Empty folder",
            Style::default().fg(self.file_info_color),
        )]);
        buf.set_line(inner.x, inner.y, &empty_text, inner.width);
    }

    /// 스크롤바 렌더링
    fn render_scrollbar(&self, inner: Rect, per_page: usize, buf: &mut Buffer) {
        let total_items = self.entries.len();
        let track_height = inner.height as usize;
        if track_height == 0 || total_items <= per_page {
            return;
        }

        let thumb_height = (track_height * per_page / total_items).max(1);
        let max_scroll = total_items.saturating_sub(per_page);
        let thumb_pos = if max_scroll == 0 {
            0
        } else {
            self.scroll_offset.min(max_scroll) * track_height.saturating_sub(thumb_height)
                / max_scroll
        };

        let scrollbar_x = inner.x + inner.width - 1;
        let track_style = Style::default().fg(self.row_divider_color);
        let thumb_style = Style::default().fg(self.file_info_color);

        for i in 0..track_height {
            let (symbol, style) = if i >= thumb_pos && i < thumb_pos + thumb_height {
                ("┃", thumb_style)
            } else {
                ("│", track_style)
            };
            buf.set_string(scrollbar_x, inner.y + i as u16, symbol, style);
        }
    }
}

impl Widget for Pane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title_max_width = (area.width as usize).saturating_sub(4);
        let display_title = self.truncate_path(self.title, title_max_width);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color()))
            .title(Span::styled(
                format!(" {} ", display_title),
                self.title_style(),
            ))
            .style(Style::default().bg(self.bg_color));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.entries.is_empty() {
            self.render_empty_state(inner, buf);
            return;
        }

        let per_page = self.metrics.entries_per_page(area.height);
        let has_scrollbar = self.entries.len() > per_page;
        let content_width = (inner.width as usize).saturating_sub(usize::from(has_scrollbar));

        let start = self.scroll_offset.min(self.entries.len().saturating_sub(1));
        let end = (start + per_page).min(self.entries.len());
        let bottom = inner.y + inner.height;
        let mut y = inner.y;

        for (i, entry) in self.entries[start..end].iter().enumerate() {
            if y >= bottom {
                break;
            }
            self.render_entry(entry, start + i, content_width, inner.x, y, buf);
            y = y.saturating_add(1 + self.metrics.spacing_rows);

            if self.metrics.divider && y < bottom && start + i + 1 < end {
                let rule = "─".repeat(content_width);
                buf.set_string(
                    inner.x,
                    y,
                    rule,
                    Style::default().fg(self.row_divider_color),
                );
            }
            if self.metrics.divider {
                y = y.saturating_add(1);
            }
        }

        if has_scrollbar {
            self.render_scrollbar(inner, per_page, buf);
        }
    }
}

/// 파일명을 최대 너비로 잘라냄 (확장자 보존)
///
/// 중간 생략 방식: "very_long_fi...ated.txt" (확장자 유지)
/// 확장자 없거나 숨김파일(.bashrc)은 끝에서 자름
pub fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }

    let ellipsis = "...";
    let ellipsis_width = 3;

    // 확장자 분리: 마지막 '.' 기준 (숨김파일 제외)
    let (stem, ext) = match name.rfind('.') {
        Some(dot_pos) if dot_pos > 0 => (&name[..dot_pos], &name[dot_pos..]),
        _ => (name, ""),
    };
    let ext_width = ext.width();

    // 확장자 + "..." 만으로 max_width 초과 시 끝에서 자르기 방식
    if ellipsis_width + ext_width >= max_width || ext.is_empty() {
        if max_width < ellipsis_width {
            return ".".repeat(max_width);
        }
        let mut truncated = String::new();
        let mut current_width = 0;
        for ch in name.chars() {
            let ch_width = ch.width().unwrap_or(1);
            if current_width + ch_width + ellipsis_width > max_width {
                break;
            }
            truncated.push(ch);
            current_width += ch_width;
        }
        truncated.push_str(ellipsis);
        return truncated;
    }

    // 중간 생략: stem 앞부분 + "..." + 확장자
    let available_stem_width = max_width - ellipsis_width - ext_width;
    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in stem.chars() {
        let ch_width = ch.width().unwrap_or(1);
        if current_width + ch_width > available_stem_width {
            break;
        }
        truncated.push(ch);
        current_width += ch_width;
    }
    truncated.push_str(ellipsis);
    truncated.push_str(ext);
    truncated
}
