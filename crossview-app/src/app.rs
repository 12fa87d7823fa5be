//! Root component: the route table and per-screen dispatch.

use crossview::{Action, Component, Context, Event, EventContext, Resolution, RouteTable, Router};
use tracing::{info, warn};

use crate::pages::{
    HistoryPage, HomePage, LoadingPage, LoginPage, NotFoundPage, ResultPage, SignUpPage,
};

/// Every screen the shell can show. `NotFound` backs unmatched request
/// paths and has no entry in the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    History,
    Loading,
    Login,
    SignUp,
    Result,
    NotFound,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Screen::Home => "Home",
            Screen::History => "History",
            Screen::Loading => "Loading",
            Screen::Login => "Login",
            Screen::SignUp => "SignUp",
            Screen::Result => "Result",
            Screen::NotFound => "NotFound",
        };
        write!(f, "{name}")
    }
}

/// Registered request paths, in declaration order.
const ROUTES: [(&str, Screen); 6] = [
    ("/", Screen::Home),
    ("/history", Screen::History),
    ("/loading", Screen::Loading),
    ("/login", Screen::Login),
    ("/signup", Screen::SignUp),
    ("/result", Screen::Result),
];

/// Root component owning the router and one field per screen.
///
/// Renders and dispatches events to whichever screen is current, and
/// drives the exit/enter lifecycle around every switch so a screen's
/// ephemeral state never survives leaving it.
pub struct Root {
    router: Router<Screen>,
    home: HomePage,
    history: HistoryPage,
    loading: LoadingPage,
    login: LoginPage,
    signup: SignUpPage,
    result: ResultPage,
    not_found: NotFoundPage,
}

impl Root {
    /// Build the shell positioned at `path`. Unknown start paths land on
    /// the not-found screen, same as runtime navigation.
    pub fn new(path: &str) -> crossview::Result<Self> {
        let table = RouteTable::new(ROUTES)?;
        let mut not_found = NotFoundPage::default();
        let initial = match table.resolve(path) {
            Resolution::Found(screen) => screen,
            Resolution::NotFound => {
                warn!(path, "no view registered for path");
                not_found.set_requested(path);
                Screen::NotFound
            }
        };
        Ok(Self {
            router: Router::new(table, initial),
            home: HomePage::default(),
            history: HistoryPage::default(),
            loading: LoadingPage::default(),
            login: LoginPage::default(),
            signup: SignUpPage::default(),
            result: ResultPage::default(),
            not_found,
        })
    }

    /// The screen currently shown.
    pub fn current(&self) -> Screen {
        self.router.current()
    }

    /// Resolve a request path, falling back to the not-found screen.
    fn target_for(&mut self, path: &str) -> Screen {
        match self.router.resolve(path) {
            Resolution::Found(screen) => screen,
            Resolution::NotFound => {
                warn!(path, "no view registered for path");
                self.not_found.set_requested(path);
                Screen::NotFound
            }
        }
    }

    fn switch_to(&mut self, target: Screen, cx: &mut Context<Self>) {
        let current = self.router.current();
        if target == current {
            return;
        }
        self.page_on_exit(current, cx);
        self.router.go(target);
        self.page_on_enter(target, cx);
        info!(from = %current, to = %target, "navigated");
        cx.notify();
    }

    fn page_on_enter(&mut self, screen: Screen, cx: &mut Context<Self>) {
        match screen {
            Screen::Home => self.home.on_enter(&mut cx.cast()),
            Screen::History => self.history.on_enter(&mut cx.cast()),
            Screen::Loading => self.loading.on_enter(&mut cx.cast()),
            Screen::Login => self.login.on_enter(&mut cx.cast()),
            Screen::SignUp => self.signup.on_enter(&mut cx.cast()),
            Screen::Result => self.result.on_enter(&mut cx.cast()),
            Screen::NotFound => self.not_found.on_enter(&mut cx.cast()),
        }
    }

    fn page_on_exit(&mut self, screen: Screen, cx: &mut Context<Self>) {
        match screen {
            Screen::Home => self.home.on_exit(&mut cx.cast()),
            Screen::History => self.history.on_exit(&mut cx.cast()),
            Screen::Loading => self.loading.on_exit(&mut cx.cast()),
            Screen::Login => self.login.on_exit(&mut cx.cast()),
            Screen::SignUp => self.signup.on_exit(&mut cx.cast()),
            Screen::Result => self.result.on_exit(&mut cx.cast()),
            Screen::NotFound => self.not_found.on_exit(&mut cx.cast()),
        }
    }
}

impl Component for Root {
    fn on_mount(&mut self, cx: &mut Context<Self>) {
        self.home.on_mount(&mut cx.cast());
        self.history.on_mount(&mut cx.cast());
        self.loading.on_mount(&mut cx.cast());
        self.login.on_mount(&mut cx.cast());
        self.signup.on_mount(&mut cx.cast());
        self.result.on_mount(&mut cx.cast());
        self.not_found.on_mount(&mut cx.cast());
    }

    fn on_enter(&mut self, cx: &mut Context<Self>) {
        self.page_on_enter(self.router.current(), cx);
    }

    fn on_exit(&mut self, cx: &mut Context<Self>) {
        self.page_on_exit(self.router.current(), cx);
    }

    fn on_shutdown(&mut self, cx: &mut Context<Self>) {
        self.home.on_shutdown(&mut cx.cast());
        self.history.on_shutdown(&mut cx.cast());
        self.loading.on_shutdown(&mut cx.cast());
        self.login.on_shutdown(&mut cx.cast());
        self.signup.on_shutdown(&mut cx.cast());
        self.result.on_shutdown(&mut cx.cast());
        self.not_found.on_shutdown(&mut cx.cast());
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<Self>) {
        match self.router.current() {
            Screen::Home => self.home.render(frame, &mut cx.cast()),
            Screen::History => self.history.render(frame, &mut cx.cast()),
            Screen::Loading => self.loading.render(frame, &mut cx.cast()),
            Screen::Login => self.login.render(frame, &mut cx.cast()),
            Screen::SignUp => self.signup.render(frame, &mut cx.cast()),
            Screen::Result => self.result.render(frame, &mut cx.cast()),
            Screen::NotFound => self.not_found.render(frame, &mut cx.cast()),
        }
    }

    fn handle_event(&mut self, event: Event, cx: &mut EventContext<Self>) -> Option<Action> {
        let action = match self.router.current() {
            Screen::Home => self.home.handle_event(event, &mut cx.cast()),
            Screen::History => self.history.handle_event(event, &mut cx.cast()),
            Screen::Loading => self.loading.handle_event(event, &mut cx.cast()),
            Screen::Login => self.login.handle_event(event, &mut cx.cast()),
            Screen::SignUp => self.signup.handle_event(event, &mut cx.cast()),
            Screen::Result => self.result.handle_event(event, &mut cx.cast()),
            Screen::NotFound => self.not_found.handle_event(event, &mut cx.cast()),
        }?;

        match action {
            Action::Navigate(path) => {
                let target = self.target_for(&path);
                self.switch_to(target, cx);
                None
            }
            Action::Back => {
                if self.router.can_go_back() {
                    let current = self.router.current();
                    self.page_on_exit(current, cx);
                    self.router.back();
                    let entered = self.router.current();
                    self.page_on_enter(entered, cx);
                    info!(from = %current, to = %entered, "navigated back");
                    cx.notify();
                }
                None
            }
            Action::Quit => Some(Action::Quit),
            Action::Noop => None,
        }
    }
}
