use super::*;
use crate::models::preferences::ThemeMode;
use std::fs;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

fn make_test_app(root: &Path) -> App {
    App::new_for_test(root, None)
}

fn child_path(base: &Path, name: &str) -> PathBuf {
    base.join(name)
}

fn create_dirs(base: &Path, names: &[&str]) {
    for name in names {
        fs::create_dir_all(child_path(base, name)).unwrap();
    }
}

fn write_file(base: &Path, name: &str, content: &str) -> PathBuf {
    let path = child_path(base, name);
    fs::write(&path, content).unwrap();
    path
}

fn names(pane: &PaneState) -> Vec<String> {
    pane.entries.iter().map(|e| e.name.clone()).collect()
}

/// 활성 패인에서 이름으로 항목 인덱스 찾기
fn index_of(app: &App, name: &str) -> usize {
    app.active_pane_state()
        .entries
        .iter()
        .position(|e| e.name == name)
        .unwrap_or_else(|| panic!("{} not listed", name))
}

fn put_cursor_on(app: &mut App, name: &str) {
    let idx = index_of(app, name);
    app.active_pane_state_mut().cursor = idx;
}

fn enter_named(app: &mut App, name: &str) {
    put_cursor_on(app, name);
    app.enter_selected();
}

fn select_named(app: &mut App, name: &str) {
    put_cursor_on(app, name);
    app.toggle_selection();
}

/// 조건이 만족될 때까지 워커 이벤트 처리
fn wait_for(app: &mut App, done: impl Fn(&App) -> bool) {
    for _ in 0..500 {
        app.process_worker_events();
        if done(app) {
            return;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("background work did not finish in time");
}

fn wait_for_copies(app: &mut App) {
    wait_for(app, |app| !app.has_pending_copies());
}

/// 분할 모드에서 위 패인은 src, 아래 패인은 dest 디렉토리를 보도록 준비
fn split_between(app: &mut App, src: &str, dest: &str) {
    enter_named(app, src);
    app.execute_action(Action::ToggleSplit);
    app.execute_action(Action::TogglePane);
    enter_named(app, dest);
    app.execute_action(Action::TogglePane);
    assert_eq!(app.active_pane(), ActivePane::Upper);
}

#[test]
fn test_initial_listing_dirs_first() {
    let temp = TempDir::new().unwrap();
    create_dirs(temp.path(), &["beta", "Alpha"]);
    write_file(temp.path(), "a.txt", "a");
    write_file(temp.path(), "B.txt", "b");

    let app = make_test_app(temp.path());

    assert_eq!(app.screen, Screen::Browser);
    assert_eq!(names(&app.upper), vec!["Alpha", "beta", "a.txt", "B.txt"]);
}

#[test]
fn test_enter_child_then_parent_restores_listing() {
    let temp = TempDir::new().unwrap();
    create_dirs(temp.path(), &["a", "b"]);
    write_file(temp.path(), "z.txt", "z");
    write_file(&temp.path().join("a"), "inner.txt", "i");

    let mut app = make_test_app(temp.path());
    let before = app.upper.entries.clone();
    let root = app.storage_root().to_path_buf();

    enter_named(&mut app, "a");
    assert_eq!(app.upper.current_path, root.join("a"));
    assert_eq!(names(&app.upper), vec!["inner.txt"]);

    app.execute_action(Action::GoToParent);
    assert_eq!(app.upper.current_path, root);
    assert_eq!(app.upper.entries, before);
}

#[test]
fn test_go_to_parent_at_root_is_noop() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.txt", "a");

    let mut app = make_test_app(temp.path());
    let root = app.storage_root().to_path_buf();

    app.execute_action(Action::GoToParent);
    assert_eq!(app.upper.current_path, root);
    assert!(!app.can_go_to_parent(&root));
    assert!(!app.can_go_to_parent(root.parent().unwrap()));
    assert!(app.can_go_to_parent(&root.join("child")));
}

#[test]
fn test_navigation_clears_selection() {
    let temp = TempDir::new().unwrap();
    create_dirs(temp.path(), &["sub"]);
    write_file(temp.path(), "a.txt", "a");

    let mut app = make_test_app(temp.path());
    select_named(&mut app, "a.txt");
    assert_eq!(
        app.upper.selected_entry().map(|e| e.name.as_str()),
        Some("a.txt")
    );

    enter_named(&mut app, "sub");
    assert!(app.upper.selected_entry().is_none());

    write_file(&temp.path().join("sub"), "b.txt", "b");
    app.execute_action(Action::Refresh);
    select_named(&mut app, "b.txt");
    app.execute_action(Action::GoToParent);
    assert!(app.upper.selected_entry().is_none());
}

#[test]
fn test_selection_toggle_and_clear() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.txt", "a");
    write_file(temp.path(), "b.txt", "b");

    let mut app = make_test_app(temp.path());

    // Enter on a file toggles its selection
    put_cursor_on(&mut app, "b.txt");
    app.execute_action(Action::EnterSelected);
    assert_eq!(app.upper.selected_index(), Some(1));
    app.execute_action(Action::EnterSelected);
    assert_eq!(app.upper.selected_index(), None);

    // selecting another entry replaces the selection
    select_named(&mut app, "a.txt");
    select_named(&mut app, "b.txt");
    assert_eq!(app.upper.selected_index(), Some(1));

    app.execute_action(Action::ClearSelection);
    assert_eq!(app.upper.selected_index(), None);
}

#[test]
fn test_cursor_movement() {
    let temp = TempDir::new().unwrap();
    for i in 0..30 {
        write_file(temp.path(), &format!("f{:02}.txt", i), "x");
    }

    let mut app = make_test_app(temp.path());
    app.execute_action(Action::MoveUp);
    assert_eq!(app.upper.cursor, 0);

    app.execute_action(Action::MoveDown);
    app.execute_action(Action::MoveDown);
    assert_eq!(app.upper.cursor, 2);

    app.execute_action(Action::GoToBottom);
    assert_eq!(app.upper.cursor, 29);
    let per_page = app.entries_per_page(ActivePane::Upper);
    assert_eq!(app.upper.scroll_offset, 30 - per_page);

    app.execute_action(Action::MoveDown);
    assert_eq!(app.upper.cursor, 29);

    app.execute_action(Action::PageUp);
    assert_eq!(app.upper.cursor, 29 - per_page / 2);

    app.execute_action(Action::GoToTop);
    assert_eq!(app.upper.cursor, 0);
    assert_eq!(app.upper.scroll_offset, 0);

    app.execute_action(Action::PageDown);
    assert_eq!(app.upper.cursor, per_page / 2);
}

#[test]
fn test_scroll_position_restored_on_return() {
    let temp = TempDir::new().unwrap();
    let big = temp.path().join("big");
    fs::create_dir_all(&big).unwrap();
    for i in 0..40 {
        write_file(&big, &format!("f{:02}.txt", i), "x");
    }

    let mut app = make_test_app(temp.path());
    enter_named(&mut app, "big");
    for _ in 0..25 {
        app.execute_action(Action::MoveDown);
    }
    let saved = app.upper.scroll_position();
    assert_eq!(saved.cursor, 25);
    assert!(saved.offset > 0);

    app.execute_action(Action::GoToParent);
    assert_eq!(app.upper.cursor, 0);
    assert_eq!(app.upper.scroll_offset, 0);

    enter_named(&mut app, "big");
    assert_eq!(app.upper.scroll_position(), saved);
}

#[test]
fn test_toggle_split_relists_lower_pane() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.txt", "a");

    let mut app = make_test_app(temp.path());
    assert!(app.lower.entries.is_empty());

    // 분할이 아닐 때 패인 전환은 무시
    app.execute_action(Action::TogglePane);
    assert_eq!(app.active_pane(), ActivePane::Upper);

    write_file(temp.path(), "b.txt", "b");
    app.execute_action(Action::ToggleSplit);
    assert!(app.layout.is_split());
    assert_eq!(names(&app.lower), vec!["a.txt", "b.txt"]);

    app.execute_action(Action::TogglePane);
    assert_eq!(app.active_pane(), ActivePane::Lower);

    app.execute_action(Action::ToggleSplit);
    assert!(!app.layout.is_split());
    assert_eq!(app.active_pane(), ActivePane::Upper);
}

#[test]
fn test_resize_split_only_in_split_mode() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(temp.path());

    app.execute_action(Action::GrowUpperPane);
    assert!((app.layout.split_ratio() - 0.5).abs() < f32::EPSILON);

    app.execute_action(Action::ToggleSplit);
    app.execute_action(Action::GrowUpperPane);
    assert!((app.layout.split_ratio() - 0.55).abs() < 1e-4);

    for _ in 0..20 {
        app.execute_action(Action::ShrinkUpperPane);
    }
    assert!((app.layout.split_ratio() - 0.1).abs() < 1e-4);
    assert!(app.layout.areas().upper_pane.height < app.layout.areas().lower_pane.height);
}

#[test]
fn test_copy_file_to_other_pane() {
    let temp = TempDir::new().unwrap();
    create_dirs(temp.path(), &["left", "right"]);
    let source = write_file(&temp.path().join("left"), "a.txt", "hello twinpane");

    let mut app = make_test_app(temp.path());
    split_between(&mut app, "left", "right");

    select_named(&mut app, "a.txt");
    app.execute_action(Action::Copy);
    assert!(app.has_pending_copies());
    wait_for_copies(&mut app);

    let copied = temp.path().join("right").join("a.txt");
    assert_eq!(fs::read(&copied).unwrap(), fs::read(&source).unwrap());
    assert_eq!(names(&app.lower), vec!["a.txt"]);
    assert_eq!(names(&app.upper), vec!["a.txt"]);
    assert_eq!(app.toast_display(), Some("Copied successfully"));
    // 다시 읽었으므로 선택 해제
    assert!(app.upper.selected_entry().is_none());
}

#[test]
fn test_copy_overwrites_existing_file() {
    let temp = TempDir::new().unwrap();
    create_dirs(temp.path(), &["left", "right"]);
    write_file(&temp.path().join("left"), "a.txt", "new content");
    write_file(&temp.path().join("right"), "a.txt", "old");

    let mut app = make_test_app(temp.path());
    split_between(&mut app, "left", "right");

    select_named(&mut app, "a.txt");
    app.execute_action(Action::Copy);
    wait_for_copies(&mut app);

    let copied = temp.path().join("right").join("a.txt");
    assert_eq!(fs::read_to_string(copied).unwrap(), "new content");
    assert_eq!(names(&app.lower), vec!["a.txt"]);
}

#[test]
fn test_copy_directory_from_lower_to_upper() {
    let temp = TempDir::new().unwrap();
    create_dirs(temp.path(), &["left", "right/photos/2024"]);
    write_file(&temp.path().join("right/photos"), "cover.jpg", "jpg");
    write_file(&temp.path().join("right/photos/2024"), "trip.jpg", "trip");

    let mut app = make_test_app(temp.path());
    split_between(&mut app, "left", "right");
    app.execute_action(Action::TogglePane);

    select_named(&mut app, "photos");
    app.execute_action(Action::Copy);
    wait_for_copies(&mut app);

    let copied = temp.path().join("left").join("photos");
    assert_eq!(fs::read_to_string(copied.join("cover.jpg")).unwrap(), "jpg");
    assert_eq!(
        fs::read_to_string(copied.join("2024").join("trip.jpg")).unwrap(),
        "trip"
    );
    assert_eq!(names(&app.upper), vec!["photos"]);
}

#[test]
fn test_copy_into_same_directory_fails() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.txt", "a");

    let mut app = make_test_app(temp.path());
    app.execute_action(Action::ToggleSplit);
    select_named(&mut app, "a.txt");
    app.execute_action(Action::Copy);
    wait_for_copies(&mut app);

    assert_eq!(app.toast_display(), Some("Copy failed"));
    assert_eq!(fs::read_to_string(temp.path().join("a.txt")).unwrap(), "a");
    assert_eq!(names(&app.upper), vec!["a.txt"]);
}

#[test]
fn test_failed_copy_still_reloads_both_panes() {
    let temp = TempDir::new().unwrap();
    create_dirs(temp.path(), &["left"]);
    write_file(&temp.path().join("left"), "old.txt", "old");

    let mut app = make_test_app(temp.path());
    app.execute_action(Action::ToggleSplit);
    app.execute_action(Action::TogglePane);
    enter_named(&mut app, "left");
    app.execute_action(Action::TogglePane);

    // 디렉토리를 자기 하위로 복사 → 실패
    select_named(&mut app, "left");
    app.execute_action(Action::Copy);
    assert!(app.has_pending_copies());

    // 결과 처리 전에 아래 패인 디렉토리 변경
    write_file(&temp.path().join("left"), "late.txt", "late");
    create_dirs(temp.path(), &["fresh"]);
    assert_eq!(names(&app.lower), vec!["old.txt"]);

    wait_for_copies(&mut app);

    assert_eq!(app.toast_display(), Some("Copy failed"));
    assert_eq!(names(&app.lower), vec!["late.txt", "old.txt"]);
    assert_eq!(names(&app.upper), vec!["fresh", "left"]);
    assert!(!temp.path().join("left").join("left").exists());
}

#[test]
fn test_copy_requires_split_and_selection() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.txt", "a");

    let mut app = make_test_app(temp.path());
    select_named(&mut app, "a.txt");
    app.execute_action(Action::Copy);
    assert!(!app.has_pending_copies());
    assert_eq!(app.toast_display(), Some("Copy needs split view"));

    app.execute_action(Action::ToggleSplit);
    app.execute_action(Action::ClearSelection);
    app.execute_action(Action::Copy);
    assert!(!app.has_pending_copies());
    assert_eq!(app.toast_display(), Some("Nothing selected"));
}

#[test]
fn test_pane_menu_items_and_copy() {
    let temp = TempDir::new().unwrap();
    create_dirs(temp.path(), &["left", "right"]);
    write_file(&temp.path().join("left"), "a.txt", "menu copy");

    let mut app = make_test_app(temp.path());

    app.execute_action(Action::OpenPaneMenu);
    assert!(app.is_menu_active());
    app.next_menu_item();
    app.confirm_menu_item();
    assert!(!app.is_menu_active());
    assert!(app.layout.is_split());
    app.layout.set_split(false);

    split_between(&mut app, "left", "right");
    select_named(&mut app, "a.txt");
    app.execute_action(Action::OpenPaneMenu);
    let labels: Vec<String> = app
        .pane_menu
        .as_ref()
        .unwrap()
        .items
        .iter()
        .filter(|i| !i.is_separator())
        .map(|i| i.label.clone())
        .collect();
    assert_eq!(labels, vec!["Settings", "Close Split View", "Copy to Lower View"]);

    app.prev_menu_item();
    app.confirm_menu_item();
    wait_for_copies(&mut app);
    assert_eq!(
        fs::read_to_string(temp.path().join("right").join("a.txt")).unwrap(),
        "menu copy"
    );

    // 아래 패인 메뉴에는 분할 항목이 없음
    app.execute_action(Action::TogglePane);
    app.execute_action(Action::OpenPaneMenu);
    let menu = app.pane_menu.as_ref().unwrap();
    assert!(menu.items.iter().all(|i| i.label != "Close Split View"));
    app.close_pane_menu();
}

#[test]
fn test_item_counts_are_cached() {
    let temp = TempDir::new().unwrap();
    create_dirs(temp.path(), &["empty", "full"]);
    write_file(&temp.path().join("full"), "1.txt", "1");
    write_file(&temp.path().join("full"), "2.txt", "2");

    let mut app = make_test_app(temp.path());
    assert!(app.item_counts.is_empty());

    app.execute_action(Action::OpenSettings);
    app.settings_cursor = SettingsRow::ALL
        .iter()
        .position(|r| *r == SettingsRow::ShowItemCount)
        .unwrap();
    app.activate_setting();
    assert!(app.preferences.show_item_count);
    assert_eq!(app.item_counts.len(), 2);

    wait_for(&mut app, |app| app.item_counts.pending_count() == 0);
    let root = app.storage_root().to_path_buf();
    assert_eq!(app.item_counts.get(&root.join("empty")), Some(0));
    assert_eq!(app.item_counts.get(&root.join("full")), Some(2));

    // 새로 생긴 파일은 반영하지 않고, 다시 계산하지도 않는다
    write_file(&temp.path().join("empty"), "late.txt", "x");
    app.close_settings();
    app.execute_action(Action::Refresh);
    assert_eq!(app.item_counts.pending_count(), 0);
    assert_eq!(app.item_counts.get(&root.join("empty")), Some(0));
}

#[test]
fn test_settings_changes_are_persisted() {
    let temp = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();
    let settings_file = config_dir.path().join("twinpane").join("settings.toml");

    let mut app = App::new_for_test(temp.path(), Some(settings_file.clone()));
    assert!(app.theme_manager.is_dark());

    app.execute_action(Action::OpenSettings);
    assert_eq!(app.screen, Screen::Settings);

    // Theme: System → Light
    app.adjust_setting(true);
    assert_eq!(app.preferences.theme_mode, ThemeMode::Light);
    assert!(!app.theme_manager.is_dark());

    // Name font size: 16 → 15
    app.settings_cursor_down();
    app.settings_cursor_down();
    app.adjust_setting(false);
    assert_eq!(app.preferences.name_font_size, 15.0);

    // 숫자 항목은 Enter로 바뀌지 않는다
    app.activate_setting();
    assert_eq!(app.preferences.name_font_size, 15.0);

    // Show dividers: on → off
    for _ in 0..3 {
        app.settings_cursor_down();
    }
    app.activate_setting();
    assert!(!app.preferences.show_divider);

    let stored = PreferenceStore::new(Some(settings_file)).load();
    assert_eq!(stored, app.preferences);

    app.close_settings();
    assert_eq!(app.screen, Screen::Browser);
}

#[test]
fn test_settings_cursor_is_clamped() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(temp.path());
    app.open_settings();

    app.settings_cursor_up();
    assert_eq!(app.settings_cursor, 0);
    for _ in 0..20 {
        app.settings_cursor_down();
    }
    assert_eq!(app.settings_cursor, SettingsRow::ALL.len() - 1);
}

#[test]
fn test_unreadable_root_requires_access() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("storage");

    let mut app = make_test_app(&root);
    assert_eq!(app.screen, Screen::AccessRequired);
    assert!(app.upper.entries.is_empty());

    fs::create_dir_all(&root).unwrap();
    write_file(&root, "a.txt", "a");
    app.check_storage_access();
    assert_eq!(app.screen, Screen::Browser);
    assert_eq!(names(&app.upper), vec!["a.txt"]);
}

#[test]
fn test_pending_key_lifecycle() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(temp.path());

    app.set_pending_key('g');
    assert_eq!(app.pending_key_display().as_deref(), Some("g_"));
    assert!(!app.is_pending_key_expired());

    app.clear_pending_key();
    assert!(app.pending_key.is_none());
    assert!(app.pending_key_display().is_none());
}
