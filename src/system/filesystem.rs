use crate::models::file_entry::FileEntry;
use crate::utils::error::{Result, TwinPaneError};
use crate::utils::formatter::{format_date, format_file_size};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 파일 시스템 모듈
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

/// 목록 정렬: 디렉토리 우선, 그 안에서는 대소문자 무시 이름순
pub fn compare_entries(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.is_directory
        .cmp(&a.is_directory)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 디렉토리 목록 (정렬됨)
    ///
    /// 읽을 수 없는 디렉토리(권한 없음, 삭제됨, 디렉토리 아님)는 빈 목록을 반환한다.
    pub fn list_directory(&self, path: &Path) -> Vec<FileEntry> {
        match self.read_directory(path) {
            Ok(mut entries) => {
                entries.sort_by(compare_entries);
                debug!(path = %path.display(), count = entries.len(), "listed directory");
                entries
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "listing failed, showing empty");
                Vec::new()
            }
        }
    }

    /// 디렉토리 읽기 (정렬 전)
    pub fn read_directory(&self, path: &Path) -> Result<Vec<FileEntry>> {
        if !path.exists() {
            return Err(TwinPaneError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_dir() {
            return Err(TwinPaneError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            // 에러 발생 시 해당 엔트리는 스킵
            let Ok(entry) = entry else { continue };
            let name = entry.file_name().to_string_lossy().to_string();
            if let Some(file_entry) = Self::stat_entry(entry.path(), name) {
                entries.push(file_entry);
            }
        }
        Ok(entries)
    }

    /// 단일 엔트리 stat
    ///
    /// 심볼릭 링크는 대상 메타데이터를 우선 사용하고, 깨진 링크는 링크 자체를 사용한다.
    fn stat_entry(path: PathBuf, name: String) -> Option<FileEntry> {
        let metadata = fs::metadata(&path)
            .or_else(|_| fs::symlink_metadata(&path))
            .ok()?;
        let is_directory = metadata.is_dir();
        let size = if is_directory {
            String::new()
        } else {
            format_file_size(metadata.len())
        };
        let last_modified = metadata.modified().map(format_date).unwrap_or_default();
        Some(FileEntry::new(path, name, is_directory, size, last_modified))
    }

    /// 직계 하위 항목 개수 (실패 시 0)
    pub fn count_children(&self, path: &Path) -> usize {
        match fs::read_dir(path) {
            Ok(read_dir) => read_dir.count(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "item count failed");
                0
            }
        }
    }

    /// 읽을 수 있는 디렉토리인지 확인
    pub fn is_readable_dir(&self, path: &Path) -> bool {
        path.is_dir() && fs::read_dir(path).is_ok()
    }

    /// 재귀 경로 검사: dest가 src 자신이거나 그 하위인지
    pub fn is_recursive_path(src: &Path, dest: &Path) -> bool {
        dest.starts_with(src)
    }

    /// 엔트리를 대상 디렉토리 안으로 복사 (같은 이름은 덮어씀)
    ///
    /// 반환값: 복사된 총 바이트 수
    pub fn copy_entry(&self, src: &Path, dest_dir: &Path) -> Result<u64> {
        if fs::symlink_metadata(src).is_err() {
            return Err(TwinPaneError::PathNotFound {
                path: src.to_path_buf(),
            });
        }
        if !dest_dir.is_dir() {
            return Err(TwinPaneError::NotADirectory {
                path: dest_dir.to_path_buf(),
            });
        }
        let Some(name) = src.file_name() else {
            return Err(TwinPaneError::CopyFailed {
                src: src.to_path_buf(),
                dest: dest_dir.to_path_buf(),
                reason: "source has no file name".to_string(),
            });
        };

        let src_real = fs::canonicalize(src)?;
        let dest_dir_real = fs::canonicalize(dest_dir)?;
        let dest = dest_dir_real.join(name);

        if dest == src_real {
            return Err(TwinPaneError::SameSourceAndDest { path: src_real });
        }

        if src_real.is_dir() {
            if Self::is_recursive_path(&src_real, &dest_dir_real) {
                return Err(TwinPaneError::RecursiveCopy {
                    src: src_real,
                    dest: dest_dir_real,
                });
            }
            self.copy_directory(&src_real, &dest)
        } else {
            self.copy_file(&src_real, &dest)
        }
    }

    /// 파일 복사 (대상이 있으면 덮어씀)
    ///
    /// 반환값: 복사된 바이트 수
    pub fn copy_file(&self, src: &Path, dest: &Path) -> Result<u64> {
        if src == dest {
            return Err(TwinPaneError::SameSourceAndDest {
                path: src.to_path_buf(),
            });
        }

        // 기존 대상은 먼저 제거 (링크는 따라가지 않고 링크 자체를 지움)
        if let Ok(meta) = fs::symlink_metadata(dest) {
            let removed = if meta.is_dir() {
                fs::remove_dir_all(dest)
            } else {
                fs::remove_file(dest)
            };
            removed.map_err(|e| Self::copy_error(src, dest, e))?;
        }

        fs::copy(src, dest).map_err(|e| Self::copy_error(src, dest, e))
    }

    /// 디렉토리 재귀 복사 (기존 디렉토리와는 병합, 파일 단위 덮어쓰기)
    ///
    /// 반환값: 복사된 총 바이트 수
    pub fn copy_directory(&self, src: &Path, dest: &Path) -> Result<u64> {
        if src == dest {
            return Err(TwinPaneError::SameSourceAndDest {
                path: src.to_path_buf(),
            });
        }
        if !src.is_dir() {
            return Err(TwinPaneError::NotADirectory {
                path: src.to_path_buf(),
            });
        }

        // 같은 이름의 파일이 있으면 먼저 제거
        if fs::symlink_metadata(dest).is_ok_and(|m| !m.is_dir()) {
            fs::remove_file(dest).map_err(|e| Self::copy_error(src, dest, e))?;
        }
        fs::create_dir_all(dest).map_err(|e| Self::copy_error(src, dest, e))?;

        let mut total_bytes = 0u64;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            let entry_path = entry.path();
            let dest_path = dest.join(entry.file_name());

            if entry_path.is_dir() {
                total_bytes += self.copy_directory(&entry_path, &dest_path)?;
            } else {
                total_bytes += self.copy_file(&entry_path, &dest_path)?;
            }
        }

        Ok(total_bytes)
    }

    fn copy_error(src: &Path, dest: &Path, err: std::io::Error) -> TwinPaneError {
        TwinPaneError::CopyFailed {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
            reason: err.to_string(),
        }
    }
}
