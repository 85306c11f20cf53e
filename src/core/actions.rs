//! 액션 레지스트리
//!
//! 키 바인딩, 패인 메뉴, 커맨드바 항목이 모두 이 모듈의 정의를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoToParent,
    EnterSelected,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,
    // Pane
    TogglePane,
    ToggleSplit,
    GrowUpperPane,
    ShrinkUpperPane,
    // File Operations
    Copy,
    // Selection
    ToggleSelection,
    ClearSelection,
    // System
    OpenPaneMenu,
    OpenSettings,
    Refresh,
    Quit,
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 시퀀스 키 바인딩 정의 (예: `g` + `g`)
pub struct SequenceBinding {
    pub prefix: char,
    pub key: char,
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        shortcut_display: Some("k / Up"),
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Up/Dn",
            priority: 50,
        }),
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        shortcut_display: Some("j / Down"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToParent,
        id: "go_parent",
        shortcut_display: Some("h / Left / Backspace"),
        command_bar: Some(CommandBarEntry {
            key: "h/l",
            label: "Nav",
            priority: 51,
        }),
    },
    ActionDef {
        action: Action::EnterSelected,
        id: "enter",
        shortcut_display: Some("l / Enter"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToTop,
        id: "go_top",
        shortcut_display: Some("gg / Home"),
        command_bar: Some(CommandBarEntry {
            key: "gg/G",
            label: "Top/Bot",
            priority: 52,
        }),
    },
    ActionDef {
        action: Action::GoToBottom,
        id: "go_bottom",
        shortcut_display: Some("G / End"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageUp,
        id: "page_up",
        shortcut_display: Some("^U / PgUp"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageDown,
        id: "page_down",
        shortcut_display: Some("^D / PgDn"),
        command_bar: None,
    },
    // Pane
    ActionDef {
        action: Action::TogglePane,
        id: "toggle_pane",
        shortcut_display: Some("Tab"),
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Pane",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::ToggleSplit,
        id: "toggle_split",
        shortcut_display: Some("s"),
        command_bar: Some(CommandBarEntry {
            key: "s",
            label: "Split",
            priority: 21,
        }),
    },
    ActionDef {
        action: Action::GrowUpperPane,
        id: "grow_upper",
        shortcut_display: Some("]"),
        command_bar: Some(CommandBarEntry {
            key: "[/]",
            label: "Resize",
            priority: 22,
        }),
    },
    ActionDef {
        action: Action::ShrinkUpperPane,
        id: "shrink_upper",
        shortcut_display: Some("["),
        command_bar: None,
    },
    // File Operations
    ActionDef {
        action: Action::Copy,
        id: "copy",
        shortcut_display: Some("y"),
        command_bar: Some(CommandBarEntry {
            key: "y",
            label: "Copy",
            priority: 10,
        }),
    },
    // Selection
    ActionDef {
        action: Action::ToggleSelection,
        id: "toggle_selection",
        shortcut_display: Some("Space"),
        command_bar: Some(CommandBarEntry {
            key: "Spc",
            label: "Sel",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::ClearSelection,
        id: "clear_selection",
        shortcut_display: Some("Esc"),
        command_bar: None,
    },
    // System
    ActionDef {
        action: Action::OpenPaneMenu,
        id: "pane_menu",
        shortcut_display: Some("m"),
        command_bar: Some(CommandBarEntry {
            key: "m",
            label: "Menu",
            priority: 1,
        }),
    },
    ActionDef {
        action: Action::OpenSettings,
        id: "settings",
        shortcut_display: Some(","),
        command_bar: Some(CommandBarEntry {
            key: ",",
            label: "Set",
            priority: 2,
        }),
    },
    ActionDef {
        action: Action::Refresh,
        id: "refresh",
        shortcut_display: Some("^R"),
        command_bar: None,
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        shortcut_display: Some("q"),
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 99,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // 종료
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        // 패인
        KeyBinding {
            code: KeyCode::Tab,
            modifiers: None,
            action: Action::TogglePane,
        },
        KeyBinding {
            code: KeyCode::Char('s'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleSplit,
        },
        KeyBinding {
            code: KeyCode::Char(']'),
            modifiers: None,
            action: Action::GrowUpperPane,
        },
        KeyBinding {
            code: KeyCode::Char('['),
            modifiers: None,
            action: Action::ShrinkUpperPane,
        },
        KeyBinding {
            code: KeyCode::Char('m'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::OpenPaneMenu,
        },
        KeyBinding {
            code: KeyCode::Char(','),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::OpenSettings,
        },
        // 탐색: Vim
        KeyBinding {
            code: KeyCode::Char('j'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Char('k'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Char('h'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::GoToParent,
        },
        KeyBinding {
            code: KeyCode::Left,
            modifiers: None,
            action: Action::GoToParent,
        },
        KeyBinding {
            code: KeyCode::Backspace,
            modifiers: None,
            action: Action::GoToParent,
        },
        KeyBinding {
            code: KeyCode::Char('l'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::EnterSelected,
        },
        KeyBinding {
            code: KeyCode::Right,
            modifiers: None,
            action: Action::EnterSelected,
        },
        KeyBinding {
            code: KeyCode::Enter,
            modifiers: None,
            action: Action::EnterSelected,
        },
        // G / Home / End
        KeyBinding {
            code: KeyCode::Char('G'),
            modifiers: None,
            action: Action::GoToBottom,
        },
        KeyBinding {
            code: KeyCode::Home,
            modifiers: None,
            action: Action::GoToTop,
        },
        KeyBinding {
            code: KeyCode::End,
            modifiers: None,
            action: Action::GoToBottom,
        },
        // 페이지
        KeyBinding {
            code: KeyCode::Char('u'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::PageUp,
        },
        KeyBinding {
            code: KeyCode::PageUp,
            modifiers: None,
            action: Action::PageUp,
        },
        KeyBinding {
            code: KeyCode::Char('d'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::PageDown,
        },
        KeyBinding {
            code: KeyCode::PageDown,
            modifiers: None,
            action: Action::PageDown,
        },
        // 파일 조작
        KeyBinding {
            code: KeyCode::Char('y'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Copy,
        },
        // 선택
        KeyBinding {
            code: KeyCode::Char(' '),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleSelection,
        },
        KeyBinding {
            code: KeyCode::Esc,
            modifiers: None,
            action: Action::ClearSelection,
        },
        // 시스템
        KeyBinding {
            code: KeyCode::Char('r'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Refresh,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && match binding.modifiers {
                    None => true,
                    Some(required) => modifiers == required,
                }
        })
        .map(|binding| binding.action)
}

static SEQUENCE_BINDINGS: &[SequenceBinding] = &[SequenceBinding {
    prefix: 'g',
    key: 'g',
    action: Action::GoToTop,
}];

/// 시퀀스 입력(prefix + key)으로 액션 조회
pub fn find_sequence_action(prefix: char, key: char) -> Option<Action> {
    SEQUENCE_BINDINGS
        .iter()
        .find(|binding| binding.prefix == prefix && binding.key == key)
        .map(|binding| binding.action)
}

/// 시퀀스 시작 prefix 여부
pub fn is_sequence_prefix(c: char) -> bool {
    SEQUENCE_BINDINGS.iter().any(|binding| binding.prefix == c)
}

impl Action {
    /// action_id 문자열로 Action 조회
    pub fn from_id(id: &str) -> Option<Action> {
        ACTION_DEFS.iter().find(|d| d.id == id).map(|d| d.action)
    }

    /// Action의 id
    #[cfg(test)]
    pub fn id(self) -> &'static str {
        ACTION_DEFS
            .iter()
            .find(|d| d.action == self)
            .map(|d| d.id)
            .unwrap_or("")
    }
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();

    entries.sort_by_key(|cb| cb.priority);

    entries
        .into_iter()
        .map(|cb| CommandItem::new(cb.key, cb.label))
        .collect()
}

/// 메뉴 단축키 표시용 조회
pub fn get_shortcut_display(id: &str) -> Option<&'static str> {
    ACTION_DEFS
        .iter()
        .find(|d| d.id == id)
        .and_then(|d| d.shortcut_display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_id() {
        assert_eq!(Action::from_id("copy"), Some(Action::Copy));
        assert_eq!(Action::from_id("quit"), Some(Action::Quit));
        assert_eq!(Action::from_id("toggle_split"), Some(Action::ToggleSplit));
        assert_eq!(Action::from_id("settings"), Some(Action::OpenSettings));
        assert_eq!(Action::from_id("nonexistent"), None);
    }

    #[test]
    fn test_every_action_has_unique_id() {
        for def in ACTION_DEFS {
            assert_eq!(Action::from_id(def.id), Some(def.action));
            assert_eq!(def.action.id(), def.id);
        }
    }

    #[test]
    fn test_find_action_vim_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('j')),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('k')),
            Some(Action::MoveUp)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('y')),
            Some(Action::Copy)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('q')),
            Some(Action::Quit)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('s')),
            Some(Action::ToggleSplit)
        );
    }

    #[test]
    fn test_find_action_arrow_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Down),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Left),
            Some(Action::GoToParent)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Enter),
            Some(Action::EnterSelected)
        );
    }

    #[test]
    fn test_find_action_ctrl_keys() {
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Quit)
        );
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('r')),
            Some(Action::Refresh)
        );
        // Ctrl 없는 r은 바인딩 없음
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('r')), None);
    }

    #[test]
    fn test_find_action_any_modifier() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Tab),
            Some(Action::TogglePane)
        );
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Tab),
            Some(Action::TogglePane)
        );
        // 일부 터미널은 ]에 SHIFT를 붙여 보냄
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Char(']')),
            Some(Action::GrowUpperPane)
        );
    }

    #[test]
    fn test_find_sequence_action() {
        assert_eq!(find_sequence_action('g', 'g'), Some(Action::GoToTop));
        assert_eq!(find_sequence_action('g', 'x'), None);
        assert!(is_sequence_prefix('g'));
        assert!(!is_sequence_prefix('y'));
    }

    #[test]
    fn test_generate_command_bar_items() {
        let items = generate_command_bar_items();
        assert_eq!(items.len(), 11);
        // 첫 항목은 priority 1 (Menu)
        assert_eq!(items[0].key, "m");
        assert_eq!(items[0].label, "Menu");
        assert_eq!(items.last().map(|i| i.key.as_str()), Some("q"));
    }

    #[test]
    fn test_get_shortcut_display() {
        assert_eq!(get_shortcut_display("copy"), Some("y"));
        assert_eq!(get_shortcut_display("settings"), Some(","));
        assert_eq!(get_shortcut_display("unknown"), None);
    }
}
