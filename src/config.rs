// Config - CLI 인자, 환경 변수, 플랫폼 기본 경로로 실행 설정 결정
//
// 우선순위: CLI 플래그 > 환경 변수 > 플랫폼 기본값

use clap::Parser;
use std::env;
use std::path::PathBuf;

/// 저장소 루트 환경 변수
pub const ROOT_ENV: &str = "TWINPANE_ROOT";
/// 설정 파일 경로 환경 변수
pub const SETTINGS_ENV: &str = "TWINPANE_SETTINGS_FILE";
/// 외부 저장소 환경 변수 (모바일 계열 터미널)
pub const EXTERNAL_STORAGE_ENV: &str = "EXTERNAL_STORAGE";

const APP_DIR: &str = "twinpane";

/// A dual-pane terminal file browser.
#[derive(Parser, Debug, Default)]
#[command(name = "twinpane", version, about)]
pub struct Cli {
    /// Storage root; navigation never goes above it
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Log file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Start with both panes visible
    #[arg(long)]
    pub split: bool,
}

/// 최종 실행 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_root: PathBuf,
    /// 없으면 설정은 메모리에서만 유지
    pub settings_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub start_split: bool,
}

impl AppConfig {
    /// 프로세스 환경에서 설정 결정
    pub fn from_cli(cli: Cli) -> Self {
        Self::resolve(cli, |key| env::var(key).ok())
    }

    /// 환경 조회 함수를 주입받아 설정 결정
    pub fn resolve(cli: Cli, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };

        let storage_root = cli
            .root
            .or_else(|| non_empty(ROOT_ENV))
            .or_else(|| non_empty(EXTERNAL_STORAGE_ENV))
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"));

        let settings_file = cli.settings.or_else(|| non_empty(SETTINGS_ENV)).or_else(|| {
            dirs::config_dir().map(|dir| dir.join(APP_DIR).join("settings.toml"))
        });

        let log_file = cli
            .log_file
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(APP_DIR).join("twinpane.log")));

        Self {
            storage_root,
            settings_file,
            log_file,
            start_split: cli.split,
        }
    }
}
