// Background Worker - 복사 / 항목 개수 계산을 UI 스레드 밖에서 실행
//
// 결과는 mpsc 채널로 전달되고, 메인 루프가 매 프레임 drain 한다.

use crate::system::filesystem::FileSystem;
use crate::utils::error::Result;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use tokio::runtime::{Builder, Runtime};
use tracing::{info, warn};

/// 워커 완료 이벤트
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerEvent {
    /// 복사 완료 (성공 여부만 전달)
    CopyFinished {
        source: PathBuf,
        dest_dir: PathBuf,
        success: bool,
    },
    /// 하위 항목 개수 계산 완료
    ItemCounted { path: PathBuf, count: usize },
}

/// 백그라운드 작업 실행기
pub struct BackgroundWorker {
    runtime: Runtime,
    filesystem: FileSystem,
    tx: Sender<WorkerEvent>,
    rx: Receiver<WorkerEvent>,
}

impl BackgroundWorker {
    const WORKER_THREADS: usize = 2;

    pub fn new() -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(Self::WORKER_THREADS)
            .thread_name("twinpane-worker")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            runtime,
            filesystem: FileSystem::new(),
            tx,
            rx,
        })
    }

    /// 엔트리를 대상 디렉토리로 복사 (완료 시 CopyFinished)
    pub fn spawn_copy(&self, source: PathBuf, dest_dir: PathBuf) {
        let tx = self.tx.clone();
        let filesystem = self.filesystem;
        self.runtime.spawn_blocking(move || {
            let success = match filesystem.copy_entry(&source, &dest_dir) {
                Ok(bytes) => {
                    info!(
                        source = %source.display(),
                        dest = %dest_dir.display(),
                        bytes,
                        "copy finished"
                    );
                    true
                }
                Err(err) => {
                    warn!(
                        source = %source.display(),
                        dest = %dest_dir.display(),
                        error = %err,
                        "copy failed"
                    );
                    false
                }
            };
            // 수신 측이 사라졌으면 (앱 종료) 결과는 버린다
            let _ = tx.send(WorkerEvent::CopyFinished {
                source,
                dest_dir,
                success,
            });
        });
    }

    /// 디렉토리의 직계 하위 항목 개수 계산 (완료 시 ItemCounted)
    pub fn spawn_count(&self, path: PathBuf) {
        let tx = self.tx.clone();
        let filesystem = self.filesystem;
        self.runtime.spawn_blocking(move || {
            let count = filesystem.count_children(&path);
            let _ = tx.send(WorkerEvent::ItemCounted { path, count });
        });
    }

    /// 도착한 이벤트 모두 꺼내기 (블로킹 없음)
    pub fn drain(&self) -> Vec<WorkerEvent> {
        self.rx.try_iter().collect()
    }

    /// 다음 이벤트 대기 (테스트용)
    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<WorkerEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}

impl std::fmt::Debug for BackgroundWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundWorker").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    const WAIT: Duration = Duration::from_secs(10);

    #[test]
    fn test_count_event() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a"), "a").unwrap();
        fs::write(temp.path().join("b"), "b").unwrap();

        let worker = BackgroundWorker::new().unwrap();
        worker.spawn_count(temp.path().to_path_buf());

        assert_eq!(
            worker.recv_timeout(WAIT),
            Some(WorkerEvent::ItemCounted {
                path: temp.path().to_path_buf(),
                count: 2,
            })
        );
    }

    #[test]
    fn test_copy_event_reports_success_and_failure() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        let dest_dir = temp.path().join("out");
        fs::write(&src, "payload").unwrap();
        fs::create_dir(&dest_dir).unwrap();

        let worker = BackgroundWorker::new().unwrap();
        worker.spawn_copy(src.clone(), dest_dir.clone());
        match worker.recv_timeout(WAIT) {
            Some(WorkerEvent::CopyFinished { success, .. }) => assert!(success),
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(fs::read_to_string(dest_dir.join("a.txt")).unwrap(), "payload");

        // 같은 디렉토리로 복사는 실패
        worker.spawn_copy(src, temp.path().to_path_buf());
        match worker.recv_timeout(WAIT) {
            Some(WorkerEvent::CopyFinished { success, .. }) => assert!(!success),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_drain_is_empty_without_work() {
        let worker = BackgroundWorker::new().unwrap();
        assert!(worker.drain().is_empty());
    }
}
