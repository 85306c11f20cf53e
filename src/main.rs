mod app;
mod config;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use anyhow::Context;
use app::{App, Screen};
use clap::Parser;
use config::{AppConfig, Cli};
use crate::core::actions::{
    find_action, find_sequence_action, generate_command_bar_items, is_sequence_prefix,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{error, info};
use ui::{
    AccessScreen, ActivePane, CommandBar, Pane, PaneMenu, PaneStatus, SettingsScreen,
    StatusBar, Theme, WarningScreen,
};
use utils::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_cli(Cli::parse());
    if let Some(log_file) = &config.log_file {
        init_logging(log_file);
    }

    // Create app
    let mut app = App::new(config).context("failed to start background worker")?;

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to initialize terminal")?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }
    info!("exiting");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);
            app.adjust_all_scroll_offsets();

            if app.layout.is_too_small() {
                let (width, height) = app.layout.terminal_size();
                let warning = WarningScreen::new()
                    .current_size(width, height)
                    .theme(app.theme_manager.current());
                f.render_widget(warning, size);
                return;
            }

            match app.screen {
                Screen::AccessRequired => {
                    let screen =
                        AccessScreen::new(app.storage_root()).theme(app.theme_manager.current());
                    f.render_widget(screen, size);
                }
                Screen::Settings => {
                    let screen = SettingsScreen::new(&app.preferences)
                        .cursor(app.settings_cursor)
                        .theme(app.theme_manager.current());
                    f.render_widget(screen, size);
                }
                Screen::Browser => render_browser(f, app),
            }
        })?;

        // 백그라운드 작업 중에는 짧은 주기로 결과 확인
        let poll_timeout = if app.has_pending_copies() || app.item_counts.pending_count() > 0 {
            Duration::from_millis(30)
        } else if app.pending_key.is_some() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.modifiers, key.code);
                }
            }
        }

        // pending 키 타임아웃 체크
        if app.pending_key.is_some() && app.is_pending_key_expired() {
            app.clear_pending_key();
        }

        app.process_worker_events();
        app.clear_expired_toast();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 화면별 키 처리 분기
fn handle_key(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.screen {
        Screen::AccessRequired => handle_access_keys(app, code),
        Screen::Settings => handle_settings_keys(app, code),
        Screen::Browser if app.is_menu_active() => handle_menu_keys(app, code),
        Screen::Browser => handle_normal_keys(app, modifiers, code),
    }
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    // 1) pending 키 시퀀스 처리 (gg)
    if let Some(pending) = app.pending_key {
        app.clear_pending_key();
        if let KeyCode::Char(c) = code {
            if let Some(action) = find_sequence_action(pending, c) {
                app.execute_action(action);
                return;
            }
        }
    }

    // 2) 시퀀스 시작 키면 대기 모드 진입
    if modifiers == KeyModifiers::NONE {
        if let KeyCode::Char(c) = code {
            if is_sequence_prefix(c) {
                app.set_pending_key(c);
                return;
            }
        }
    }

    // 3) 테이블 조회 → 액션 실행
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 패인 메뉴 키 처리
fn handle_menu_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => app.next_menu_item(),
        KeyCode::Up | KeyCode::Char('k') => app.prev_menu_item(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm_menu_item(),
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => app.close_pane_menu(),
        _ => {}
    }
}

/// 설정 화면 키 처리
fn handle_settings_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => app.settings_cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.settings_cursor_up(),
        KeyCode::Left | KeyCode::Char('h') => app.adjust_setting(false),
        KeyCode::Right | KeyCode::Char('l') => app.adjust_setting(true),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_setting(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char(',') => app.close_settings(),
        _ => {}
    }
}

/// 접근 안내 화면 키 처리
fn handle_access_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('r') => app.check_storage_access(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn render_browser(f: &mut Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();

    for which in app.visible_panes() {
        render_pane(f, app, which, theme, app.layout.pane_area(which));
    }

    if app.layout.is_split() {
        render_divider(f, app, theme, areas.divider);
    }

    render_status_bar(f, app, theme, areas.status_bar);

    let command_bar = CommandBar::new()
        .commands(generate_command_bar_items())
        .theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if let Some(menu) = &app.pane_menu {
        let pane_area = app.layout.pane_area(app.active_pane());
        let menu_area = Rect {
            x: pane_area.x + 1,
            y: pane_area.y + 1,
            width: pane_area.width.saturating_sub(2),
            height: pane_area.height.saturating_sub(1),
        };
        f.render_widget(PaneMenu::new(menu).theme(theme), menu_area);
    }
}

fn render_pane(f: &mut Frame<'_>, app: &App, which: ActivePane, theme: &Theme, area: Rect) {
    let pane = app.pane(which);
    let title = pane.current_path.display().to_string();
    let status = if which == app.active_pane() {
        PaneStatus::Active
    } else {
        PaneStatus::Inactive
    };
    let item_counts = app
        .preferences
        .show_item_count
        .then_some(&app.item_counts);

    let widget = Pane::new()
        .title(&title)
        .status(status)
        .entries(&pane.entries)
        .cursor(pane.cursor)
        .scroll_offset(pane.scroll_offset)
        .selected(pane.selected_index())
        .item_counts(item_counts)
        .metrics(app.row_metrics())
        .theme(theme);
    f.render_widget(widget, area);
}

/// 위/아래 패인 사이 구분선 (비율 표시)
fn render_divider(f: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    if area.height == 0 {
        return;
    }
    let label = format!(" {:.0}% ", app.layout.split_ratio() * 100.0);
    let rule_len = (area.width as usize).saturating_sub(label.len() + 2);
    let style = Style::default()
        .fg(theme.pane_inactive_border.to_color())
        .bg(theme.bg_primary.to_color());
    let line = Line::from(vec![
        Span::styled("──", style),
        Span::styled(label, style),
        Span::styled("─".repeat(rule_len), style),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_status_bar(f: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let pane = app.active_pane_state();
    let pending = app.pending_key_display();

    let status_bar = StatusBar::new()
        .file_count(pane.file_count())
        .dir_count(pane.dir_count())
        .selected_name(pane.selected_entry().map(|e| e.name.as_str()))
        .toast(app.toast_display())
        .layout_mode(app.layout_mode_str())
        .pending_key(pending.as_deref())
        .theme(theme);
    f.render_widget(status_bar, area);
}
