// Warning screens - 경고 화면 컴포넌트
//
// 터미널이 너무 작을 때, 저장소 루트에 접근할 수 없을 때 표시되는 전체 화면

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use std::path::Path;

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;

/// 경고 화면 공통 색상
#[derive(Debug, Clone, Copy)]
struct WarningColors {
    warning: Color,
    bg: Color,
    fg: Color,
    error: Color,
    success: Color,
}

impl Default for WarningColors {
    fn default() -> Self {
        Self {
            warning: Color::Yellow,
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            error: Color::Red,
            success: Color::Green,
        }
    }
}

impl WarningColors {
    fn from_theme(theme: &Theme) -> Self {
        Self {
            warning: theme.warning.to_color(),
            bg: theme.bg_primary.to_color(),
            fg: theme.fg_primary.to_color(),
            error: theme.error.to_color(),
            success: theme.success.to_color(),
        }
    }

    fn title(&self, text: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(self.warning)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn hint(&self, text: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            text,
            Style::default().fg(self.fg).add_modifier(Modifier::DIM),
        ))
    }

    fn render_lines(&self, lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning))
            .style(Style::default().bg(self.bg));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

/// 터미널 크기 경고 화면
#[derive(Default)]
pub struct WarningScreen {
    /// 현재 터미널 크기
    current_size: (u16, u16),
    colors: WarningColors,
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 터미널 크기 설정
    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.colors = WarningColors::from_theme(theme);
        self
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let c = self.colors;

        let lines = vec![
            c.title("⚠"),
            Line::from(""),
            c.title("Terminal Too Small"),
            Line::from(""),
            Line::from(vec![
                Span::styled("Current: ", Style::default().fg(c.fg)),
                Span::styled(
                    format!("{}x{}", self.current_size.0, self.current_size.1),
                    Style::default().fg(c.error).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Required: ", Style::default().fg(c.fg)),
                Span::styled(
                    format!("{}x{}", MIN_WIDTH, MIN_HEIGHT),
                    Style::default().fg(c.success).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            c.hint("Please resize your terminal"),
        ];

        c.render_lines(lines, area, buf);
    }
}

/// 저장소 접근 불가 화면
///
/// 저장소 루트가 읽을 수 있는 디렉토리가 아닐 때 브라우저 대신 표시된다.
pub struct AccessScreen<'a> {
    root: &'a Path,
    colors: WarningColors,
}

impl<'a> AccessScreen<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self {
            root,
            colors: WarningColors::default(),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.colors = WarningColors::from_theme(theme);
        self
    }
}

impl Widget for AccessScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let c = self.colors;

        let lines = vec![
            c.title("Storage Access Required"),
            Line::from(""),
            Line::from(Span::styled(
                "Cannot read the storage root:",
                Style::default().fg(c.fg),
            )),
            Line::from(Span::styled(
                self.root.display().to_string(),
                Style::default().fg(c.error).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            c.hint("Grant read access, then press r to retry (q to quit)"),
        ];

        c.render_lines(lines, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer, area: Rect) -> String {
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_warning_screen_shows_sizes() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        WarningScreen::new().current_size(30, 10).render(area, &mut buf);

        let text = buffer_text(&buf, area);
        assert!(text.contains("Terminal Too Small"));
        assert!(text.contains("30x10"));
        assert!(text.contains("40x12"));
    }

    #[test]
    fn test_access_screen_shows_root() {
        let area = Rect::new(0, 0, 70, 10);
        let mut buf = Buffer::empty(area);
        AccessScreen::new(Path::new("/mnt/storage")).render(area, &mut buf);

        let text = buffer_text(&buf, area);
        assert!(text.contains("Storage Access Required"));
        assert!(text.contains("/mnt/storage"));
    }
}
