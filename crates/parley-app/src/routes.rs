//! Route table, path resolution, and the protected-route gate

/// Redirect target for auth-required routes hit while unauthenticated
pub const LOGIN_REDIRECT: &str = "/login";

/// Redirect target for auth-forbidden routes hit while authenticated
pub const HOME_REDIRECT: &str = "/";

/// Parameters of a password-reset link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReset {
    pub user_id: String,
    pub secret: String,
}

/// A matched route.
///
/// The table is fixed:
/// - auth-required: `/`, `/chat`, `/chat/:id`
/// - auth-forbidden: `/login`, `/login/auth`, `/signup`,
///   `/signup/pending/:id`, `/forgot`, `/forgot/set/:userId/:secret`
/// - anything else is NotFound
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Chat { chat_id: Option<String> },
    Login { auth: bool },
    Signup { pending_id: Option<String> },
    Forgot { reset: Option<PasswordReset> },
    NotFound,
}

impl Route {
    /// Resolve a location path against the fixed route table
    pub fn resolve(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["chat"] => Route::Chat { chat_id: None },
            ["chat", id] => Route::Chat {
                chat_id: Some((*id).to_string()),
            },
            ["login"] => Route::Login { auth: false },
            ["login", "auth"] => Route::Login { auth: true },
            ["signup"] => Route::Signup { pending_id: None },
            ["signup", "pending", id] => Route::Signup {
                pending_id: Some((*id).to_string()),
            },
            ["forgot"] => Route::Forgot { reset: None },
            ["forgot", "set", user_id, secret] => Route::Forgot {
                reset: Some(PasswordReset {
                    user_id: (*user_id).to_string(),
                    secret: (*secret).to_string(),
                }),
            },
            _ => Route::NotFound,
        }
    }

    /// Routes only reachable when authenticated
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Home | Route::Chat { .. })
    }

    /// Routes only reachable when NOT authenticated
    pub fn forbids_auth(&self) -> bool {
        matches!(
            self,
            Route::Login { .. } | Route::Signup { .. } | Route::Forgot { .. }
        )
    }
}

/// Gate decision for a resolved route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Allow,
    Redirect(&'static str),
}

/// The protected-route collaborator.
///
/// Parameterized with the current signals by the view controller; the
/// controller itself never implements redirect logic.
#[derive(Debug, Clone, Copy)]
pub struct RouteGate {
    pub authenticated: bool,
    pub offline: bool,
}

impl RouteGate {
    pub fn new(authenticated: bool, offline: bool) -> Self {
        Self {
            authenticated,
            offline,
        }
    }

    /// Admit or redirect a route.
    ///
    /// While offline the gate admits everything: the 503 banner governs
    /// and a reload will re-evaluate. NotFound is always admitted (it
    /// renders the 404 page).
    pub fn admit(&self, route: &Route) -> Admission {
        if self.offline {
            return Admission::Allow;
        }

        if route.requires_auth() && !self.authenticated {
            Admission::Redirect(LOGIN_REDIRECT)
        } else if route.forbids_auth() && self.authenticated {
            Admission::Redirect(HOME_REDIRECT)
        } else {
            Admission::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_auth_required_routes() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/chat"), Route::Chat { chat_id: None });
        assert_eq!(
            Route::resolve("/chat/abc123"),
            Route::Chat {
                chat_id: Some("abc123".to_string())
            }
        );
    }

    #[test]
    fn test_resolve_auth_forbidden_routes() {
        assert_eq!(Route::resolve("/login"), Route::Login { auth: false });
        assert_eq!(Route::resolve("/login/auth"), Route::Login { auth: true });
        assert_eq!(Route::resolve("/signup"), Route::Signup { pending_id: None });
        assert_eq!(
            Route::resolve("/signup/pending/x1"),
            Route::Signup {
                pending_id: Some("x1".to_string())
            }
        );
        assert_eq!(Route::resolve("/forgot"), Route::Forgot { reset: None });
        assert_eq!(
            Route::resolve("/forgot/set/u1/s3cret"),
            Route::Forgot {
                reset: Some(PasswordReset {
                    user_id: "u1".to_string(),
                    secret: "s3cret".to_string()
                })
            }
        );
    }

    #[test]
    fn test_resolve_unknown_paths() {
        assert_eq!(Route::resolve("/nonexistent"), Route::NotFound);
        assert_eq!(Route::resolve("/chat/a/b"), Route::NotFound);
        assert_eq!(Route::resolve("/login/other"), Route::NotFound);
        assert_eq!(Route::resolve("/forgot/set/u1"), Route::NotFound);
    }

    #[test]
    fn test_resolve_ignores_trailing_slashes() {
        assert_eq!(Route::resolve("/chat/"), Route::Chat { chat_id: None });
        assert_eq!(Route::resolve("//login"), Route::Login { auth: false });
    }

    #[test]
    fn test_auth_classification() {
        assert!(Route::Home.requires_auth());
        assert!(Route::resolve("/chat/x").requires_auth());
        assert!(Route::resolve("/login").forbids_auth());
        assert!(Route::resolve("/forgot").forbids_auth());
        assert!(!Route::NotFound.requires_auth());
        assert!(!Route::NotFound.forbids_auth());
    }

    #[test]
    fn test_gate_redirects_unauthenticated_from_chat() {
        let gate = RouteGate::new(false, false);
        assert_eq!(
            gate.admit(&Route::resolve("/chat")),
            Admission::Redirect(LOGIN_REDIRECT)
        );
        assert_eq!(gate.admit(&Route::resolve("/login")), Admission::Allow);
    }

    #[test]
    fn test_gate_redirects_authenticated_from_login() {
        let gate = RouteGate::new(true, false);
        assert_eq!(
            gate.admit(&Route::resolve("/login")),
            Admission::Redirect(HOME_REDIRECT)
        );
        assert_eq!(gate.admit(&Route::resolve("/chat")), Admission::Allow);
    }

    #[test]
    fn test_gate_admits_everything_while_offline() {
        let gate = RouteGate::new(false, true);
        assert_eq!(gate.admit(&Route::resolve("/chat")), Admission::Allow);
        assert_eq!(gate.admit(&Route::resolve("/login")), Admission::Allow);
    }

    #[test]
    fn test_gate_always_admits_not_found() {
        for (authed, offline) in [(false, false), (true, false), (false, true), (true, true)] {
            let gate = RouteGate::new(authed, offline);
            assert_eq!(gate.admit(&Route::NotFound), Admission::Allow);
        }
    }
}
