use crate::client::ApiClient;
use crate::error::ClientError;
use crate::protocol::User;
use async_trait::async_trait;
use reqwest::StatusCode;

// Client-perceived authentication state. The credential itself lives in the
// httpOnly cookie and is never visible here; this machine only tracks what
// the current-user check and the auth calls reveal.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    // Nothing checked yet.
    Unknown,
    // Current-user check in flight.
    Checking,
    Authenticated(User),
    Anonymous,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Unknown
    }
}

#[derive(Debug)]
pub enum SessionEvent {
    CheckStarted,
    CheckSucceeded(User),
    // 401 from the current-user check: expected, not an error.
    CheckUnauthorized,
    CheckFailed { status: Option<u16>, message: String },
    LoggedIn(User),
    LoggedOut,
}

// Where the session machine gets its current-user answer from. The concrete
// source is the ApiClient; tests inject fakes.
#[async_trait]
pub trait CurrentUserSource: Send + Sync {
    async fn fetch_current_user(&self) -> Result<User, ClientError>;
}

#[async_trait]
impl CurrentUserSource for ApiClient {
    async fn fetch_current_user(&self) -> Result<User, ClientError> {
        Ok(self.current_user().await?.user)
    }
}

// Explicitly constructed session object; no ambient singleton. Built at the
// composition root and handed to whatever drives the UI.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_checking(&self) -> bool {
        self.state == SessionState::Checking
    }

    // Single mutation entry point; every state transition goes through here.
    pub fn apply(&mut self, event: SessionEvent) {
        self.state = match event {
            SessionEvent::CheckStarted => SessionState::Checking,
            SessionEvent::CheckSucceeded(user) | SessionEvent::LoggedIn(user) => {
                SessionState::Authenticated(user)
            }
            SessionEvent::CheckUnauthorized | SessionEvent::LoggedOut => SessionState::Anonymous,
            SessionEvent::CheckFailed { status, message } => {
                tracing::error!(?status, %message, "session check failed");
                SessionState::Anonymous
            }
        };
    }

    // Runs the current-user check and settles the state. A 401 settles to
    // Anonymous and is not reported as an error; anything else surfaces the
    // error to the caller after logging it.
    pub async fn refresh(
        &mut self,
        source: &dyn CurrentUserSource,
    ) -> Result<(), ClientError> {
        self.apply(SessionEvent::CheckStarted);

        match source.fetch_current_user().await {
            Ok(user) => {
                self.apply(SessionEvent::CheckSucceeded(user));
                Ok(())
            }
            Err(ClientError::Api { status, .. }) if status == StatusCode::UNAUTHORIZED => {
                self.apply(SessionEvent::CheckUnauthorized);
                Ok(())
            }
            Err(err) => {
                let status = match &err {
                    ClientError::Api { status, .. } => Some(status.as_u16()),
                    _ => None,
                };
                self.apply(SessionEvent::CheckFailed {
                    status,
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }
}
