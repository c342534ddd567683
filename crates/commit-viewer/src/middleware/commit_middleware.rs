//! Commit Loading Middleware
//!
//! Owns the tokio runtime and the API client. Every route load:
//! - bumps the generation counter
//! - dispatches `LoadStart` so the reducer resets both slots
//! - spawns the commit and diff fetches as independent tasks
//!
//! Each task dispatches its own result tagged with the generation it was
//! issued for. Neither waits for the other.

use crate::actions::{Action, CommitAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use anyhow::{Context, Result};
use commit_client::{CommitApi, CommitRoute};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for the commit and diff endpoints
pub struct CommitMiddleware {
    /// Tokio runtime for the fetch tasks
    runtime: Runtime,
    client: Arc<dyn CommitApi>,
    /// Last generation handed out
    generation: u64,
}

impl CommitMiddleware {
    pub fn new(client: Arc<dyn CommitApi>) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        Ok(Self {
            runtime,
            client,
            generation: 0,
        })
    }

    fn open(&mut self, route: &CommitRoute, dispatcher: &Dispatcher) {
        if !route.is_complete() {
            log::warn!("CommitMiddleware: incomplete route '{}', not loading", route);
            return;
        }

        self.generation += 1;
        let generation = self.generation;
        log::info!("CommitMiddleware: loading {} (generation {})", route, generation);

        // Must be queued before any result of this generation
        dispatcher.dispatch(Action::Commit(CommitAction::LoadStart {
            route: route.clone(),
            generation,
        }));

        self.spawn_commit_fetch(route.clone(), generation, dispatcher.clone());
        self.spawn_diff_fetch(route.clone(), generation, dispatcher.clone());
    }

    fn spawn_commit_fetch(&self, route: CommitRoute, generation: u64, dispatcher: Dispatcher) {
        let client = Arc::clone(&self.client);
        self.runtime.spawn(async move {
            let action = match client.fetch_commit(&route).await {
                Ok(info) => {
                    log::debug!("CommitMiddleware: commit {} loaded", route);
                    CommitAction::InfoLoaded { generation, info }
                }
                Err(e) => {
                    log::error!("CommitMiddleware: failed to load commit {}: {}", route, e);
                    CommitAction::InfoLoadError {
                        generation,
                        message: e.to_string(),
                    }
                }
            };
            dispatcher.dispatch(Action::Commit(action));
        });
    }

    fn spawn_diff_fetch(&self, route: CommitRoute, generation: u64, dispatcher: Dispatcher) {
        let client = Arc::clone(&self.client);
        self.runtime.spawn(async move {
            let action = match client.fetch_diff(&route).await {
                Ok(files) => {
                    log::debug!(
                        "CommitMiddleware: diff of {} loaded ({} files)",
                        route,
                        files.len()
                    );
                    CommitAction::DiffLoaded { generation, files }
                }
                Err(e) => {
                    log::error!("CommitMiddleware: failed to load diff of {}: {}", route, e);
                    CommitAction::DiffLoadError {
                        generation,
                        message: e.to_string(),
                    }
                }
            };
            dispatcher.dispatch(Action::Commit(action));
        });
    }
}

impl Middleware for CommitMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Commit(action) = action else {
            return true;
        };

        match action {
            CommitAction::Open(route) => {
                self.open(route, dispatcher);
                false
            }
            CommitAction::Reload => {
                self.open(&state.route, dispatcher);
                false
            }
            CommitAction::NavigateParent => {
                match state.commit.loaded().and_then(|info| info.first_parent()) {
                    Some(parent) => self.open(&state.route.with_commit(parent), dispatcher),
                    None => log::debug!("CommitMiddleware: no parent to navigate to"),
                }
                false
            }
            // Loading results go to the reducer
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoadState;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use commit_client::{ClientError, CommitInfo, DiffFile, FileRef, ParentRef, Signature};
    use std::sync::mpsc::{self, Receiver};
    use std::time::Duration;

    struct FakeApi {
        fail_diff: bool,
    }

    fn info() -> CommitInfo {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        CommitInfo {
            avatar_url: "https://example.com/a.png".to_string(),
            message: "Subject".to_string(),
            author: Signature {
                name: "Ada".to_string(),
                date,
            },
            committer: Signature {
                name: "Ada".to_string(),
                date,
            },
            parents: vec![ParentRef {
                oid: "parent1".to_string(),
            }],
        }
    }

    #[async_trait]
    impl CommitApi for FakeApi {
        async fn fetch_commit(&self, _route: &CommitRoute) -> Result<CommitInfo, ClientError> {
            Ok(info())
        }

        async fn fetch_diff(&self, route: &CommitRoute) -> Result<Vec<DiffFile>, ClientError> {
            if self.fail_diff {
                return Err(ClientError::Status {
                    status: 500,
                    url: route.diff_path(),
                });
            }
            Ok(vec![DiffFile {
                head_file: FileRef {
                    path: "src/lib.rs".to_string(),
                },
                hunks: vec![],
            }])
        }
    }

    fn setup(fail_diff: bool) -> (CommitMiddleware, Dispatcher, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        let mw = CommitMiddleware::new(Arc::new(FakeApi { fail_diff })).unwrap();
        (mw, Dispatcher::new(tx), rx)
    }

    fn next(rx: &Receiver<Action>) -> CommitAction {
        match rx.recv_timeout(Duration::from_secs(2)) {
            Ok(Action::Commit(action)) => action,
            other => panic!("expected a commit action, got {:?}", other),
        }
    }

    /// Both fetch results, commit first regardless of arrival order
    fn results(rx: &Receiver<Action>) -> Vec<CommitAction> {
        let mut out = vec![next(rx), next(rx)];
        out.sort_by_key(|a| {
            matches!(
                a,
                CommitAction::DiffLoaded { .. } | CommitAction::DiffLoadError { .. }
            )
        });
        out
    }

    #[test]
    fn test_open_dispatches_load_start_then_both_results() {
        let (mut mw, dispatcher, rx) = setup(false);
        let route = CommitRoute::new("acme", "widgets", "abc123");

        let passed = mw.handle(
            &Action::Commit(CommitAction::Open(route.clone())),
            &AppState::default(),
            &dispatcher,
        );
        assert!(!passed);

        match next(&rx) {
            CommitAction::LoadStart {
                route: started,
                generation,
            } => {
                assert_eq!(started, route);
                assert_eq!(generation, 1);
            }
            other => panic!("expected LoadStart, got {:?}", other),
        }

        let results = results(&rx);
        assert!(matches!(
            &results[0],
            CommitAction::InfoLoaded { generation: 1, info } if info.message == "Subject"
        ));
        assert!(matches!(
            &results[1],
            CommitAction::DiffLoaded { generation: 1, files } if files.len() == 1
        ));
    }

    #[test]
    fn test_diff_failure_does_not_affect_commit_result() {
        let (mut mw, dispatcher, rx) = setup(true);
        mw.handle(
            &Action::Commit(CommitAction::Open(CommitRoute::new("o", "r", "c"))),
            &AppState::default(),
            &dispatcher,
        );

        assert!(matches!(next(&rx), CommitAction::LoadStart { .. }));
        let results = results(&rx);
        assert!(matches!(results[0], CommitAction::InfoLoaded { .. }));
        assert!(matches!(
            &results[1],
            CommitAction::DiffLoadError { message, .. } if message.contains("500")
        ));
    }

    #[test]
    fn test_each_load_gets_a_new_generation() {
        let (mut mw, dispatcher, rx) = setup(false);
        let state = AppState::new(CommitRoute::new("o", "r", "c"));

        mw.handle(&Action::Commit(CommitAction::Reload), &state, &dispatcher);
        assert!(matches!(next(&rx), CommitAction::LoadStart { generation: 1, .. }));
        results(&rx);

        mw.handle(&Action::Commit(CommitAction::Reload), &state, &dispatcher);
        assert!(matches!(next(&rx), CommitAction::LoadStart { generation: 2, .. }));
    }

    #[test]
    fn test_incomplete_route_issues_no_request() {
        let (mut mw, dispatcher, rx) = setup(false);
        mw.handle(
            &Action::Commit(CommitAction::Open(CommitRoute::new("o", "", "c"))),
            &AppState::default(),
            &dispatcher,
        );
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn test_navigate_parent_opens_first_parent() {
        let (mut mw, dispatcher, rx) = setup(false);
        let mut state = AppState::new(CommitRoute::new("o", "r", "child"));
        state.commit = LoadState::Loaded(info());

        mw.handle(&Action::Commit(CommitAction::NavigateParent), &state, &dispatcher);
        match next(&rx) {
            CommitAction::LoadStart { route, .. } => {
                assert_eq!(route, CommitRoute::new("o", "r", "parent1"));
            }
            other => panic!("expected LoadStart, got {:?}", other),
        }
    }

    #[test]
    fn test_navigate_parent_without_commit_does_nothing() {
        let (mut mw, dispatcher, rx) = setup(false);
        let state = AppState::new(CommitRoute::new("o", "r", "child"));

        mw.handle(&Action::Commit(CommitAction::NavigateParent), &state, &dispatcher);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn test_results_pass_through_to_reducer() {
        let (mut mw, dispatcher, _rx) = setup(false);
        let passed = mw.handle(
            &Action::Commit(CommitAction::InfoLoadError {
                generation: 1,
                message: "boom".to_string(),
            }),
            &AppState::default(),
            &dispatcher,
        );
        assert!(passed);
    }
}
