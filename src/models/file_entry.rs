use std::path::PathBuf;

/// 파일 엔트리
///
/// 목록을 읽는 시점의 stat 결과로 만들어지며 이후 변경되지 않는다.
/// 다시 목록을 읽으면 새 엔트리로 대체된다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// 전체 경로
    pub path: PathBuf,
    /// 파일/디렉토리 이름
    pub name: String,
    /// 디렉토리 여부
    pub is_directory: bool,
    /// 표시용 크기 (디렉토리는 빈 문자열)
    pub size: String,
    /// 표시용 수정 시간
    pub last_modified: String,
}

impl FileEntry {
    /// 새 파일 엔트리 생성
    pub fn new(
        path: PathBuf,
        name: String,
        is_directory: bool,
        size: String,
        last_modified: String,
    ) -> Self {
        Self {
            path,
            name,
            is_directory,
            size,
            last_modified,
        }
    }

    /// 디렉토리 여부 확인
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// 파일 여부 확인
    pub fn is_file(&self) -> bool {
        !self.is_directory
    }
}
