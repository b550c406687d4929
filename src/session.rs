use dioxus::prelude::*;
use std::future::Future;

/// What the views know about the current visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    pub userid: Option<String>,
    pub nickname: Option<String>,
}

impl UserSession {
    /// Returns true while a user identifier is present
    pub fn is_logged_in(&self) -> bool {
        self.userid.is_some()
    }

    /// Nickname when known, the identifier otherwise. None once logged out.
    pub fn display_name(&self) -> Option<&str> {
        let userid = self.userid.as_deref()?;
        Some(self.nickname.as_deref().unwrap_or(userid))
    }

    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SignedIn { userid, nickname } => {
                self.userid = Some(userid);
                self.nickname = nickname;
            }
            // only the identifier is dropped, the rest of the record stays
            SessionEvent::SignedOut => self.userid = None,
        }
    }
}

/// The only way session state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn {
        userid: String,
        nickname: Option<String>,
    },
    SignedOut,
}

/// Anything that accepts session events.
pub trait SessionSink {
    fn dispatch(&mut self, event: SessionEvent);
}

impl SessionSink for UserSession {
    fn dispatch(&mut self, event: SessionEvent) {
        self.apply(event);
    }
}

/// Session state handed to components through context.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionStore(Signal<UserSession>);

impl SessionStore {
    pub fn new(session: Signal<UserSession>) -> Self {
        Self(session)
    }

    /// Subscribes the calling scope to session changes.
    pub fn is_logged_in(&self) -> bool {
        self.0.read().is_logged_in()
    }

    pub fn display_name(&self) -> Option<String> {
        self.0.read().display_name().map(str::to_string)
    }
}

impl SessionSink for SessionStore {
    fn dispatch(&mut self, event: SessionEvent) {
        log::debug!("session event: {:?}", event);
        self.0.write().apply(event);
    }
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}

/// Account actions are shown only once the login state is known to be true.
pub fn shows_account_actions(logged_in: Option<bool>) -> bool {
    logged_in == Some(true)
}

/// Best-effort logout.
///
/// The server-side sign-out result never changes the outcome: the local
/// identifier is cleared in every case and the route to navigate to is
/// returned.
pub async fn logout<S, F, E>(session: &mut S, sign_out: F) -> &'static str
where
    S: SessionSink,
    F: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    if let Err(e) = sign_out.await {
        log::error!("Sign-out failed: {}", e);
    }
    session.dispatch(SessionEvent::SignedOut);
    crate::routes::HOME.route
}
