use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 디렉토리별 하위 항목 개수 캐시
///
/// 값이 `None`이면 개수 계산이 진행 중이다. 한 번 등록된 경로는
/// 세션 동안 다시 계산하지 않는다 (파일 시스템 변경도 반영하지 않음).
#[derive(Debug, Clone, Default)]
pub struct ItemCountCache {
    counts: HashMap<PathBuf, Option<usize>>,
}

impl ItemCountCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 계산 시작 등록
    ///
    /// 이미 등록된 경로면 false를 반환하고 아무것도 하지 않는다.
    pub fn begin(&mut self, path: &Path) -> bool {
        if self.counts.contains_key(path) {
            return false;
        }
        self.counts.insert(path.to_path_buf(), None);
        true
    }

    /// 계산 결과 기록
    pub fn complete(&mut self, path: PathBuf, count: usize) {
        self.counts.insert(path, Some(count));
    }

    /// 캐시된 개수 (계산 중이거나 없으면 None)
    pub fn get(&self, path: &Path) -> Option<usize> {
        self.counts.get(path).copied().flatten()
    }

    /// 경로가 등록되어 있는지 (계산 중 포함)
    pub fn contains(&self, path: &Path) -> bool {
        self.counts.contains_key(path)
    }

    /// 계산 중인 경로 수
    pub fn pending_count(&self) -> usize {
        self.counts.values().filter(|v| v.is_none()).count()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
