//! KeyboardMiddleware - translates keyboard events into semantic actions
//!
//! There is a single view, so the mapping is flat:
//!
//! | Key                     | Action                    |
//! |-------------------------|---------------------------|
//! | `j` / `↓`               | next file                 |
//! | `k` / `↑`               | previous file             |
//! | `Enter` / `Space` / `o` | toggle selected file      |
//! | `E` / `C`               | expand all / collapse all |
//! | `Ctrl+d` / `Ctrl+u`     | scroll half page          |
//! | `PageDown` / `PageUp`   | scroll full page          |
//! | `g` / `G`               | first / last file         |
//! | `p`                     | open first parent         |
//! | `r`                     | reload                    |
//! | `q` / `Esc` / `Ctrl+c`  | quit                      |

use crate::actions::{Action, CommitAction, DiffAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn translate(key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Global(GlobalAction::Quit)),
                KeyCode::Char('d') => Some(Action::Diff(DiffAction::ScrollHalfDown)),
                KeyCode::Char('u') => Some(Action::Diff(DiffAction::ScrollHalfUp)),
                _ => None,
            };
        }

        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Global(GlobalAction::Quit),

            KeyCode::Char('j') | KeyCode::Down => Action::Diff(DiffAction::NextFile),
            KeyCode::Char('k') | KeyCode::Up => Action::Diff(DiffAction::PrevFile),
            KeyCode::Char('g') | KeyCode::Home => Action::Diff(DiffAction::FirstFile),
            KeyCode::Char('G') | KeyCode::End => Action::Diff(DiffAction::LastFile),

            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => {
                Action::Diff(DiffAction::Toggle)
            }
            KeyCode::Char('E') => Action::Diff(DiffAction::ExpandAll),
            KeyCode::Char('C') => Action::Diff(DiffAction::CollapseAll),

            KeyCode::PageDown => Action::Diff(DiffAction::ScrollPageDown),
            KeyCode::PageUp => Action::Diff(DiffAction::ScrollPageUp),

            KeyCode::Char('p') => Action::Commit(CommitAction::NavigateParent),
            KeyCode::Char('r') => Action::Commit(CommitAction::Reload),

            _ => return None,
        };
        Some(action)
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match Self::translate(*key) {
            Some(translated) => {
                log::debug!("Key {:?} -> {:?}", key.code, translated);
                dispatcher.dispatch(translated);
            }
            None => log::trace!("Unbound key {:?}", key),
        }

        // Raw keys never reach the reducer
        false
    }
}
