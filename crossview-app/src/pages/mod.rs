//! Leaf screens of the shell. Each is a self-contained component with no
//! dependency on its siblings.

pub mod history;
pub mod home;
pub mod loading;
pub mod login;
pub mod not_found;
pub mod result;
pub mod signup;

pub use history::HistoryPage;
pub use home::HomePage;
pub use loading::LoadingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use result::ResultPage;
pub use signup::SignUpPage;

use crossterm::event::{KeyCode, KeyEvent};
use crossview::Action;

/// Keys every screen answers to: Esc/Backspace go back, q quits.
pub(crate) fn common_keys(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}
