// Settings screen component - 표시 설정 화면 (,)
//
// 브라우저 대신 전체 영역에 그려지는 설정 목록

use crate::models::preferences::Preferences;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 설정 항목
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    ThemeMode,
    FolderColor,
    NameFontSize,
    InfoFontSize,
    ItemSpacing,
    ShowDivider,
    ShowItemCount,
}

impl SettingsRow {
    /// 화면 표시 순서
    pub const ALL: [SettingsRow; 7] = [
        SettingsRow::ThemeMode,
        SettingsRow::FolderColor,
        SettingsRow::NameFontSize,
        SettingsRow::InfoFontSize,
        SettingsRow::ItemSpacing,
        SettingsRow::ShowDivider,
        SettingsRow::ShowItemCount,
    ];

    /// 인덱스로 항목 조회
    pub fn at(index: usize) -> Option<SettingsRow> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingsRow::ThemeMode => "Theme",
            SettingsRow::FolderColor => "Folder color",
            SettingsRow::NameFontSize => "Name font size",
            SettingsRow::InfoFontSize => "Info font size",
            SettingsRow::ItemSpacing => "Item spacing",
            SettingsRow::ShowDivider => "Show dividers",
            SettingsRow::ShowItemCount => "Show item count",
        }
    }

    /// 현재 값 표시 문자열
    pub fn value(self, prefs: &Preferences) -> String {
        fn on_off(flag: bool) -> String {
            let text = if flag { "On" } else { "Off" };
            text.to_string()
        }
        match self {
            SettingsRow::ThemeMode => prefs.theme_mode.label().to_string(),
            SettingsRow::FolderColor => {
                let (r, g, b) = prefs.folder_rgb();
                format!("#{:02X}{:02X}{:02X}", r, g, b)
            }
            SettingsRow::NameFontSize => format!("{:.0}", prefs.name_font_size),
            SettingsRow::InfoFontSize => format!("{:.0}", prefs.info_font_size),
            SettingsRow::ItemSpacing => format!("{:.0}", prefs.item_spacing),
            SettingsRow::ShowDivider => on_off(prefs.show_divider),
            SettingsRow::ShowItemCount => on_off(prefs.show_item_count),
        }
    }
}

/// 설정 화면 위젯
pub struct SettingsScreen<'a> {
    prefs: &'a Preferences,
    cursor: usize,
    bg_color: Color,
    fg_color: Color,
    cursor_bg: Color,
    info_color: Color,
    border_color: Color,
}

impl<'a> SettingsScreen<'a> {
    pub fn new(prefs: &'a Preferences) -> Self {
        Self {
            prefs,
            cursor: 0,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            cursor_bg: Color::Rgb(38, 79, 120),
            info_color: Color::Rgb(128, 128, 128),
            border_color: Color::Rgb(0, 120, 212),
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.file_normal.to_color();
        self.cursor_bg = theme.cursor_bg.to_color();
        self.info_color = theme.file_info.to_color();
        self.border_color = theme.pane_active_border.to_color();
        self
    }
}

impl Widget for SettingsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let block = Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let label_width = SettingsRow::ALL
            .iter()
            .map(|row| row.label().width())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<Line> = Vec::new();
        for (i, row) in SettingsRow::ALL.iter().enumerate() {
            let is_cursor = i == self.cursor;
            let bg = if is_cursor { self.cursor_bg } else { self.bg_color };
            let mut spans = vec![
                Span::styled(
                    format!(" {:<width$}  ", row.label(), width = label_width),
                    Style::default().fg(self.fg_color).bg(bg),
                ),
                Span::styled(
                    format!("< {} >", row.value(self.prefs)),
                    Style::default()
                        .fg(self.fg_color)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            if *row == SettingsRow::FolderColor {
                let (r, g, b) = self.prefs.folder_rgb();
                spans.push(Span::styled(" ■", Style::default().fg(Color::Rgb(r, g, b)).bg(bg)));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " h/l: adjust  Enter/Space: toggle  Esc/q: back",
            Style::default().fg(self.info_color),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::ThemeMode;

    #[test]
    fn test_row_values() {
        let mut prefs = Preferences::default();
        assert_eq!(SettingsRow::ThemeMode.value(&prefs), "System");
        assert_eq!(SettingsRow::FolderColor.value(&prefs), "#FFB300");
        assert_eq!(SettingsRow::NameFontSize.value(&prefs), "16");
        assert_eq!(SettingsRow::ShowDivider.value(&prefs), "On");
        assert_eq!(SettingsRow::ShowItemCount.value(&prefs), "Off");

        prefs.theme_mode = ThemeMode::Dark;
        assert_eq!(SettingsRow::ThemeMode.value(&prefs), "Dark");
    }

    #[test]
    fn test_row_lookup() {
        assert_eq!(SettingsRow::at(0), Some(SettingsRow::ThemeMode));
        assert_eq!(SettingsRow::at(6), Some(SettingsRow::ShowItemCount));
        assert_eq!(SettingsRow::at(7), None);
    }

    #[test]
    fn test_render_lists_all_rows() {
        let prefs = Preferences::default();
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        SettingsScreen::new(&prefs).cursor(2).render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        for row in SettingsRow::ALL {
            assert!(text.contains(row.label()), "missing {}", row.label());
        }
        assert!(text.contains("< 16 >"));
    }
}
