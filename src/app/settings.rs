use super::*;

impl App {
    /// 글자 크기 조정 단위 (sp)
    const FONT_SIZE_STEP: f32 = 1.0;
    /// 항목 간격 조정 단위 (dp)
    const ITEM_SPACING_STEP: f32 = 4.0;

    /// 설정 화면 열기
    pub fn open_settings(&mut self) {
        self.pane_menu = None;
        self.settings_cursor = 0;
        self.screen = Screen::Settings;
    }

    /// 설정 화면 닫기
    pub fn close_settings(&mut self) {
        self.screen = Screen::Browser;
    }

    pub fn settings_cursor_up(&mut self) {
        self.settings_cursor = self.settings_cursor.saturating_sub(1);
    }

    pub fn settings_cursor_down(&mut self) {
        if self.settings_cursor + 1 < SettingsRow::ALL.len() {
            self.settings_cursor += 1;
        }
    }

    fn current_settings_row(&self) -> Option<SettingsRow> {
        SettingsRow::at(self.settings_cursor)
    }

    /// 커서 항목 값을 앞/뒤로 조정 (h/l)
    pub fn adjust_setting(&mut self, forward: bool) {
        let Some(row) = self.current_settings_row() else {
            return;
        };
        let sign = if forward { 1.0 } else { -1.0 };
        let prefs = &mut self.preferences;
        match row {
            SettingsRow::ThemeMode => {
                prefs.theme_mode = if forward {
                    prefs.theme_mode.next()
                } else {
                    prefs.theme_mode.prev()
                };
            }
            SettingsRow::FolderColor => prefs.cycle_folder_color(forward),
            SettingsRow::NameFontSize => prefs.adjust_name_font_size(sign * Self::FONT_SIZE_STEP),
            SettingsRow::InfoFontSize => prefs.adjust_info_font_size(sign * Self::FONT_SIZE_STEP),
            SettingsRow::ItemSpacing => prefs.adjust_item_spacing(sign * Self::ITEM_SPACING_STEP),
            SettingsRow::ShowDivider => prefs.show_divider = !prefs.show_divider,
            SettingsRow::ShowItemCount => prefs.show_item_count = !prefs.show_item_count,
        }
        self.preferences_changed();
    }

    /// 커서 항목 토글/순환 (Enter/Space), 숫자 항목은 무시
    pub fn activate_setting(&mut self) {
        match self.current_settings_row() {
            Some(
                SettingsRow::ThemeMode
                | SettingsRow::FolderColor
                | SettingsRow::ShowDivider
                | SettingsRow::ShowItemCount,
            ) => self.adjust_setting(true),
            _ => {}
        }
    }

    /// 설정 변경 반영: 테마 재적용, 즉시 저장, 화면 보정
    fn preferences_changed(&mut self) {
        self.theme_manager.apply(&self.preferences);
        if let Err(err) = self.preference_store.save(&self.preferences) {
            warn!(error = %err, "failed to save settings");
        }
        self.schedule_item_counts();
        self.adjust_scroll_offset(ActivePane::Upper);
        self.adjust_scroll_offset(ActivePane::Lower);
    }
}
