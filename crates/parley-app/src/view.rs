//! Root view planning (the decision half of the View in TEA)
//!
//! `plan()` turns the current state into a [`ViewPlan`]: which chrome is
//! shown (menu, loading indicator, offline banner) and which page the
//! matched route resolves to. Rendering proper lives in the TUI crate;
//! this stays pure so the display policy is testable without a terminal.

use parley_core::ErrorPage;

use crate::routes::{Admission, PasswordReset, Route, RouteGate};
use crate::state::AppState;

/// The page a location resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    /// Main chat view (`/`, `/chat`, `/chat/:id`)
    Chat { chat_id: Option<String> },
    Login { auth: bool },
    Signup { pending_id: Option<String> },
    Forgot { reset: Option<PasswordReset> },
    /// 404 and friends; status and content displayed verbatim
    Error(ErrorPage),
}

/// Everything the renderer needs to draw one frame of chrome + content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPlan {
    /// Navigation menu is rendered iff authenticated
    pub menu: bool,

    /// Loading indicator; overlays, never suppresses other elements
    pub loading: bool,

    /// Offline banner; overlays the route content, never replaces it
    pub banner: Option<ErrorPage>,

    /// The resolved page content
    pub content: PageView,

    /// Set when the gate redirected away from the requested route
    pub redirected_to: Option<&'static str>,

    /// Root-level theme marker ("light"/"dark")
    pub theme_class: &'static str,
}

/// Decide the overall page shape from the current state.
///
/// Precedence: menu (authenticated), loading, offline banner, then route
/// resolution through the gate. Redirects are single-hop: the gate's
/// targets (`/` and `/login`) are always admissible for the auth state
/// that produced the redirect.
pub fn plan(state: &AppState) -> ViewPlan {
    let authenticated = state.is_authenticated();
    let offline = state.is_offline();

    let gate = RouteGate::new(authenticated, offline);
    let requested = Route::resolve(&state.location);

    let (route, redirected_to) = match gate.admit(&requested) {
        Admission::Allow => (requested, None),
        Admission::Redirect(target) => (Route::resolve(target), Some(target)),
    };

    ViewPlan {
        menu: authenticated,
        loading: state.session.loading,
        banner: offline.then(ErrorPage::offline),
        content: page_for(route),
        redirected_to,
        theme_class: state.theme.mode().class_name(),
    }
}

fn page_for(route: Route) -> PageView {
    match route {
        Route::Home => PageView::Chat { chat_id: None },
        Route::Chat { chat_id } => PageView::Chat { chat_id },
        Route::Login { auth } => PageView::Login { auth },
        Route::Signup { pending_id } => PageView::Signup { pending_id },
        Route::Forgot { reset } => PageView::Forgot { reset },
        Route::NotFound => PageView::Error(ErrorPage::not_found()),
    }
}
