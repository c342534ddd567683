use crate::actions::{Action, CommitAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::Tick) => {}
            // Payloads can be large; the variant is enough
            Action::Commit(CommitAction::DiffLoaded { generation, files }) => {
                log::trace!(
                    "Action: DiffLoaded {{ generation: {}, files: {} }}",
                    generation,
                    files.len()
                );
            }
            _ => log::trace!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
