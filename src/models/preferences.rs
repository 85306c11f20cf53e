// Preferences - 표시 설정과 TOML 저장소
//
// 시작 시 한 번 읽고, 값이 바뀔 때마다 즉시 저장한다.

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 파일명 글자 크기 범위 (sp)
pub const NAME_FONT_SIZE_RANGE: RangeInclusive<f32> = 12.0..=24.0;
/// 정보 글자 크기 범위 (sp)
pub const INFO_FONT_SIZE_RANGE: RangeInclusive<f32> = 8.0..=16.0;
/// 항목 세로 간격 범위 (dp)
pub const ITEM_SPACING_RANGE: RangeInclusive<f32> = 0.0..=24.0;

/// 폴더 아이콘 색상 후보 (ARGB)
pub const FOLDER_COLORS: [u32; 5] = [0xFFFF_B300, 0xFF42_A5F5, 0xFF66_BB6A, 0xFFEF_5350, 0xFFAB_47BC];

/// 테마 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThemeMode {
    /// 터미널 설정을 따름
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// 다음 모드 (System → Light → Dark → System)
    pub fn next(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    /// 이전 모드
    pub fn prev(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Dark,
            ThemeMode::Light => ThemeMode::System,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// 표시용 이름
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

/// 표시 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Preferences {
    pub name_font_size: f32,
    pub info_font_size: f32,
    /// 폴더 색상 (ARGB packed)
    pub folder_color: u32,
    pub theme_mode: ThemeMode,
    pub show_divider: bool,
    pub item_spacing: f32,
    pub show_item_count: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            name_font_size: 16.0,
            info_font_size: 11.0,
            folder_color: FOLDER_COLORS[0],
            theme_mode: ThemeMode::System,
            show_divider: true,
            item_spacing: 4.0,
            show_item_count: false,
        }
    }
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}

impl Preferences {
    /// 범위를 벗어난 값 보정
    pub fn sanitized(mut self) -> Self {
        self.name_font_size = clamp_to(self.name_font_size, &NAME_FONT_SIZE_RANGE);
        self.info_font_size = clamp_to(self.info_font_size, &INFO_FONT_SIZE_RANGE);
        self.item_spacing = clamp_to(self.item_spacing, &ITEM_SPACING_RANGE);
        self
    }

    /// 파일명 글자 크기 조정
    pub fn adjust_name_font_size(&mut self, delta: f32) {
        self.name_font_size = clamp_to(self.name_font_size + delta, &NAME_FONT_SIZE_RANGE);
    }

    /// 정보 글자 크기 조정
    pub fn adjust_info_font_size(&mut self, delta: f32) {
        self.info_font_size = clamp_to(self.info_font_size + delta, &INFO_FONT_SIZE_RANGE);
    }

    /// 항목 간격 조정
    pub fn adjust_item_spacing(&mut self, delta: f32) {
        self.item_spacing = clamp_to(self.item_spacing + delta, &ITEM_SPACING_RANGE);
    }

    /// 폴더 색상 순환 (후보 목록에 없는 색이면 첫 번째부터)
    pub fn cycle_folder_color(&mut self, forward: bool) {
        let len = FOLDER_COLORS.len();
        let next = match FOLDER_COLORS.iter().position(|&c| c == self.folder_color) {
            Some(idx) if forward => (idx + 1) % len,
            Some(idx) => (idx + len - 1) % len,
            None => 0,
        };
        self.folder_color = FOLDER_COLORS[next];
    }

    /// 폴더 색상의 RGB 성분
    pub fn folder_rgb(&self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.folder_color.to_be_bytes();
        (r, g, b)
    }
}

/// 설정 저장소 (TOML 파일)
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
}

impl PreferenceStore {
    /// 저장 경로가 없으면 메모리에서만 유지
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 설정 읽기 (파일이 없거나 손상되면 기본값)
    pub fn load(&self) -> Preferences {
        let Some(path) = &self.path else {
            return Preferences::default();
        };
        let Ok(data) = fs::read_to_string(path) else {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Preferences::default();
        };
        match Self::decode(&data) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
                Preferences::default()
            }
        }
    }

    /// 설정 저장
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, Self::encode(prefs)?)?;
        Ok(())
    }

    fn encode(prefs: &Preferences) -> Result<String> {
        Ok(toml::to_string_pretty(prefs)?)
    }

    fn decode(data: &str) -> Result<Preferences> {
        let prefs: Preferences = toml::from_str(data)?;
        Ok(prefs.sanitized())
    }
}
