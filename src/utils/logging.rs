// Logging - tracing 구독자 초기화
//
// 터미널은 UI가 점유하므로 로그는 항상 파일로 기록한다.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// 파일 로거 초기화 (`RUST_LOG` 우선, 기본 `info`)
///
/// 로그 파일을 열 수 없으면 로깅 없이 계속 진행한다.
pub fn init_logging(log_file: &Path) {
    if let Some(parent) = log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(log_file) else {
        return;
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
