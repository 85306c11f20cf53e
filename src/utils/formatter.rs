// Formatters - 파일 크기, 날짜, 개수 포맷팅

use chrono::{DateTime, Local};
use std::time::SystemTime;

/// 파일 크기를 읽기 쉬운 형식으로 포맷팅 (숫자와 단위 사이 공백)
///
/// ```text
/// format_file_size(0)         == "0 B"
/// format_file_size(512)       == "512.0 B"
/// format_file_size(1536)      == "1.5 KB"
/// format_file_size(1_048_576) == "1.0 MB"
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes == 0 {
        "0 B".to_string()
    } else if bytes < KB {
        format!("{:.1} B", bytes as f64)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes < TB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    }
}

/// 수정 시간을 목록 표시용 형식으로 포맷팅
///
/// 항상 "Mon DD, HH:MM" 형식 (13자 고정, 월 약어는 영문)
pub fn format_date(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%b %d, %H:%M").to_string()
}

/// 개수에 따라 단수/복수형 반환
///
/// ```text
/// pluralize(1, "item", "items") == "1 item"
/// pluralize(3, "item", "items") == "3 items"
/// ```
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
