// Status bar component - 상태바 컴포넌트
//
// 활성 패인의 파일/디렉토리 개수, 선택 항목, 토스트 메시지, 레이아웃 모드 표시

use crate::ui::Theme;
use crate::utils::formatter::pluralize;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 파일 개수
    file_count: usize,
    /// 디렉토리 개수
    dir_count: usize,
    /// 선택된 항목 이름
    selected_name: Option<&'a str>,
    /// 토스트 메시지
    toast: Option<&'a str>,
    /// 레이아웃 모드 표시
    layout_mode: &'a str,
    /// 대기 중인 키 시퀀스 (예: "g")
    pending_key: Option<&'a str>,
    bg_color: Color,
    fg_color: Color,
    highlight_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            file_count: 0,
            dir_count: 0,
            selected_name: None,
            toast: None,
            layout_mode: "SINGLE",
            pending_key: None,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            highlight_color: Color::Yellow,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 파일 개수 설정
    pub fn file_count(mut self, count: usize) -> Self {
        self.file_count = count;
        self
    }

    /// 디렉토리 개수 설정
    pub fn dir_count(mut self, count: usize) -> Self {
        self.dir_count = count;
        self
    }

    /// 선택 항목 이름 설정
    pub fn selected_name(mut self, name: Option<&'a str>) -> Self {
        self.selected_name = name;
        self
    }

    /// 토스트 메시지 설정
    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    /// 레이아웃 모드 설정
    pub fn layout_mode(mut self, mode: &'a str) -> Self {
        self.layout_mode = mode;
        self
    }

    /// 대기 키 설정
    pub fn pending_key(mut self, key: Option<&'a str>) -> Self {
        self.pending_key = key;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.highlight_color = theme.warning.to_color();
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        // 왼쪽 정보: 토스트가 있으면 토스트, 없으면 개수와 선택 항목
        let left_info = match self.toast {
            Some(toast) => format!(" {}", toast),
            None => {
                let mut info = format!(
                    " {}, {}",
                    pluralize(self.dir_count, "dir", "dirs"),
                    pluralize(self.file_count, "file", "files")
                );
                if let Some(name) = self.selected_name {
                    info.push_str(&format!(" | selected: {}", name));
                }
                info
            }
        };
        let left_style = if self.toast.is_some() {
            Style::default()
                .fg(self.highlight_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.fg_color)
        };

        // 오른쪽 정보: 대기 키 + 레이아웃 모드
        let right_info = match self.pending_key {
            Some(key) => format!("{} [{}] ", key, self.layout_mode),
            None => format!("[{}] ", self.layout_mode),
        };

        let padding_len = (area.width as usize).saturating_sub(left_info.width() + right_info.width());

        let spans = vec![
            Span::styled(left_info, left_style),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right_info, Style::default().fg(self.fg_color)),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_line(bar: StatusBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_counts_and_selection() {
        let line = render_line(
            StatusBar::new()
                .file_count(1)
                .dir_count(3)
                .selected_name(Some("a.txt"))
                .layout_mode("SPLIT"),
            60,
        );
        assert!(line.starts_with(" 3 dirs, 1 file | selected: a.txt"));
        assert!(line.trim_end().ends_with("[SPLIT]"));
    }

    #[test]
    fn test_toast_replaces_counts() {
        let line = render_line(
            StatusBar::new()
                .file_count(5)
                .toast(Some("Copied successfully"))
                .pending_key(Some("g")),
            60,
        );
        assert!(line.starts_with(" Copied successfully"));
        assert!(!line.contains("files"));
        assert!(line.contains("g [SINGLE]"));
    }
}
