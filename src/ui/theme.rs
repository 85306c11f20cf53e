use crate::models::preferences::{Preferences, ThemeMode};
use ratatui::style::Color;
use std::env;

/// 색상 테마
///
/// 다크/라이트 두 가지 팔레트가 있고, 디렉토리 색상은 설정의
/// 폴더 색상으로 덮어쓴다.
#[derive(Debug, Clone)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 패인
    pub pane_active_border: ColorDef,
    pub pane_inactive_border: ColorDef,

    // 파일 리스트
    pub file_normal: ColorDef,
    pub file_info: ColorDef,
    pub cursor_bg: ColorDef,
    pub file_selected: ColorDef,
    pub file_selected_bg: ColorDef,
    pub directory: ColorDef,
    pub row_divider: ColorDef,

    // UI 컴포넌트
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의
///
/// Hex 문자열("#1e1e1e"), 색상 이름("Red"), 또는 RGB 값.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDef {
    Hex(String),
    Named(String),
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// ColorDef를 ratatui의 Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
            ColorDef::Rgb(r, g, b) => Color::Rgb(*r, *g, *b),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

/// Hex 색상 문자열을 Color로 파싱
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),

            pane_active_border: "#0078d4".into(),
            pane_inactive_border: "#3c3c3c".into(),

            file_normal: "#d4d4d4".into(),
            file_info: "#9e9e9e".into(),
            cursor_bg: "#2a2d2e".into(),
            file_selected: "#ffffff".into(),
            file_selected_bg: "#264f78".into(),
            directory: "#ffb300".into(),
            row_divider: "#333333".into(),

            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#2d2d30".into(),
            command_bar_fg: "#cccccc".into(),

            accent: "#0078d4".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),

            pane_active_border: "#0078d4".into(),
            pane_inactive_border: "#cccccc".into(),

            file_normal: "#1e1e1e".into(),
            file_info: "#616161".into(),
            cursor_bg: "#e8e8e8".into(),
            file_selected: "#000000".into(),
            file_selected_bg: "#add6ff".into(),
            directory: "#ffb300".into(),
            row_divider: "#e0e0e0".into(),

            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f3f3f3".into(),
            command_bar_fg: "#1e1e1e".into(),

            accent: "#0078d4".into(),
            warning: "#ff8c00".into(),
            error: "#e51400".into(),
            success: "#107c10".into(),
        }
    }
}

/// COLORFGBG ("전경;배경") 값으로 터미널 배경이 어두운지 판단
///
/// 값이 없거나 해석할 수 없으면 어두운 배경으로 본다.
pub fn terminal_prefers_dark(colorfgbg: Option<&str>) -> bool {
    let Some(bg) = colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|v| v.trim().parse::<u8>().ok())
    else {
        return true;
    };
    // 7(회색), 9~15(밝은 색)는 밝은 배경
    !(bg == 7 || bg >= 9)
}

/// 테마 관리자
///
/// 설정의 테마 모드와 폴더 색상을 반영한 현재 테마를 유지한다.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current_theme: Theme,
    dark: bool,
    system_dark: bool,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (터미널 배경 감지)
    pub fn new() -> Self {
        let colorfgbg = env::var("COLORFGBG").ok();
        Self::with_system_dark(terminal_prefers_dark(colorfgbg.as_deref()))
    }

    /// 시스템 배경 밝기를 지정해서 생성
    pub fn with_system_dark(system_dark: bool) -> Self {
        let mut manager = Self {
            current_theme: Theme::dark(),
            dark: true,
            system_dark,
        };
        manager.apply(&Preferences::default());
        manager
    }

    /// 설정 반영 (테마 모드, 폴더 색상)
    pub fn apply(&mut self, prefs: &Preferences) {
        self.dark = match prefs.theme_mode {
            ThemeMode::System => self.system_dark,
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
        };
        let mut theme = if self.dark {
            Theme::dark()
        } else {
            Theme::light()
        };
        let (r, g, b) = prefs.folder_rgb();
        theme.directory = ColorDef::Rgb(r, g, b);
        self.current_theme = theme;
    }

    /// 현재 테마 반환
    pub fn current(&self) -> &Theme {
        &self.current_theme
    }

    /// 다크 팔레트 사용 중인지
    #[cfg(test)]
    pub fn is_dark(&self) -> bool {
        self.dark
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
