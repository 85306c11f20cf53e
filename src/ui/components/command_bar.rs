// Command bar component - 하단 커맨드 바 컴포넌트
//
// 액션 레지스트리에서 생성한 단축키 힌트 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 커맨드 항목
#[derive(Debug, Clone)]
pub struct CommandItem {
    /// 단축키 (m, s, Tab, ...)
    pub key: String,
    /// 레이블 (Menu, Split, ...)
    pub label: String,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// 화면에 차지하는 너비 ("key:label")
    fn display_width(&self) -> usize {
        self.key.width() + 1 + self.label.width()
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    commands: Vec<CommandItem>,
    bg_color: Color,
    key_fg_color: Color,
    label_fg_color: Color,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            bg_color: Color::Rgb(30, 30, 30),
            key_fg_color: Color::Rgb(0, 120, 212),
            label_fg_color: Color::Rgb(212, 212, 212),
        }
    }
}

impl CommandBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 커맨드 목록 설정
    pub fn commands(mut self, commands: Vec<CommandItem>) -> Self {
        self.commands = commands;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.command_bar_bg.to_color();
        self.key_fg_color = theme.accent.to_color();
        self.label_fg_color = theme.command_bar_fg.to_color();
        self
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = vec![Span::raw(" ")];
        let mut used = 1usize;
        let available = area.width as usize;

        for cmd in &self.commands {
            // 잘리는 항목은 통째로 생략
            let needed = cmd.display_width() + if used > 1 { 1 } else { 0 };
            if used + needed > available {
                break;
            }
            if used > 1 {
                spans.push(Span::raw(" "));
            }
            used += needed;

            let key_style = Style::default()
                .fg(self.key_fg_color)
                .add_modifier(Modifier::BOLD);
            let label_style = Style::default().fg(self.label_fg_color);

            spans.push(Span::styled(cmd.key.clone(), key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(cmd.label.clone(), label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_line(bar: CommandBar, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_command_item_creation() {
        let item = CommandItem::new("m", "Menu");
        assert_eq!(item.key, "m");
        assert_eq!(item.label, "Menu");
        assert_eq!(item.display_width(), 6);
    }

    #[test]
    fn test_renders_items_in_order() {
        let bar = CommandBar::new().commands(vec![
            CommandItem::new("m", "Menu"),
            CommandItem::new("s", "Split"),
        ]);
        let line = render_line(bar, 30);
        assert!(line.starts_with(" m:Menu s:Split"));
    }

    #[test]
    fn test_overflowing_item_is_omitted() {
        let bar = CommandBar::new().commands(vec![
            CommandItem::new("m", "Menu"),
            CommandItem::new("Tab", "Switch"),
        ]);
        let line = render_line(bar, 12);
        assert!(line.contains("m:Menu"));
        assert!(!line.contains("Tab"));
    }
}
