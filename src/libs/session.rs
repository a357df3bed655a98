//! Authentication session bridge between the token cache and the REST client.
//!
//! A session moves between two states:
//!
//! ```text
//!   NoToken ──login / cache hit──▶ Cached(session)
//!      ▲                                │
//!      └────── 401 or logout ───────────┘
//! ```
//!
//! The cache is read at most once per process. Every authenticated call gets
//! its bearer token through [`SessionManager::context`], and every result is
//! passed through [`SessionManager::guard`], which signs the user out as soon
//! as the backend answers `401`.

use crate::api::auth::LoginResponse;
use crate::api::users::UserRole;
use crate::api::{ApiClient, ApiError, RequestContext};
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::{msg_bail_anyhow, msg_error, msg_error_anyhow, msg_warning};
use anyhow::Result;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

pub const SESSION_FILE: &str = ".session";
pub const MAX_RETRY_COUNT: i32 = 3;

/// What is cached after a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub user_role: UserRole,
    pub access_token: String,
}

impl AuthSession {
    pub fn is_management(&self) -> bool {
        self.user_role == UserRole::Management
    }
}

/// Turns a login payload into a session, rejecting inactive accounts.
pub fn authorize(response: LoginResponse) -> Result<AuthSession> {
    if !response.user.is_active {
        msg_bail_anyhow!(Message::AccountInactive);
    }
    Ok(AuthSession {
        id: response.user.id,
        username: response.user.username,
        name: response.user.name,
        user_role: response.user.user_role,
        access_token: response.token,
    })
}

/// Persistence for the signed-in session.
pub trait TokenCache: Send + Sync {
    fn load(&self) -> Result<Option<AuthSession>>;
    fn store(&self, session: &AuthSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Session stored as encrypted JSON in the data directory.
pub struct FileTokenCache {
    secret: Secret,
}

impl FileTokenCache {
    pub fn new() -> Result<Self> {
        Ok(Self {
            secret: Secret::new(SESSION_FILE)?,
        })
    }

    pub fn with_secret(secret: Secret) -> Self {
        Self { secret }
    }
}

impl TokenCache for FileTokenCache {
    fn load(&self) -> Result<Option<AuthSession>> {
        let raw = match self.secret.load() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.secret.path().display(), "discarding unreadable session cache");
                msg_warning!(Message::SessionCacheCorrupted);
                self.secret.clear()?;
                return Ok(None);
            }
        };

        match raw.map(|json| serde_json::from_str::<AuthSession>(&json)).transpose() {
            Ok(session) => Ok(session),
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed session cache");
                msg_warning!(Message::SessionCacheCorrupted);
                self.secret.clear()?;
                Ok(None)
            }
        }
    }

    fn store(&self, session: &AuthSession) -> Result<()> {
        self.secret.store(&serde_json::to_string(session)?)
    }

    fn clear(&self) -> Result<()> {
        self.secret.clear()
    }
}

/// In-process cache, nothing touches the disk.
#[derive(Default)]
pub struct MemoryTokenCache {
    inner: Mutex<Option<AuthSession>>,
}

impl MemoryTokenCache {
    pub fn with_session(session: AuthSession) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl TokenCache for MemoryTokenCache {
    fn load(&self) -> Result<Option<AuthSession>> {
        Ok(self.inner.lock().clone())
    }

    fn store(&self, session: &AuthSession) -> Result<()> {
        *self.inner.lock() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.inner.lock() = None;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    NoToken,
    Cached(AuthSession),
}

pub struct SessionManager<C: TokenCache = FileTokenCache> {
    cache: C,
    state: Mutex<Option<SessionState>>,
}

impl SessionManager<FileTokenCache> {
    /// Manager backed by the encrypted session file.
    pub fn open() -> Result<Self> {
        Ok(Self::new(FileTokenCache::new()?))
    }
}

impl<C: TokenCache> SessionManager<C> {
    pub fn new(cache: C) -> Self {
        Self {
            cache,
            state: Mutex::new(None),
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Current state, loading the cache on first use.
    pub fn state(&self) -> Result<SessionState> {
        let mut state = self.state.lock();
        if let Some(current) = state.as_ref() {
            return Ok(current.clone());
        }

        let loaded = match self.cache.load()? {
            Some(session) => SessionState::Cached(session),
            None => SessionState::NoToken,
        };
        tracing::debug!(signed_in = matches!(loaded, SessionState::Cached(_)), "session cache loaded");
        *state = Some(loaded.clone());
        Ok(loaded)
    }

    pub fn current(&self) -> Result<Option<AuthSession>> {
        Ok(match self.state()? {
            SessionState::Cached(session) => Some(session),
            SessionState::NoToken => None,
        })
    }

    /// The signed-in session, or an error asking the user to log in.
    pub fn require(&self) -> Result<AuthSession> {
        self.current()?.ok_or_else(|| msg_error_anyhow!(Message::NotLoggedIn))
    }

    /// Like [`require`](Self::require), restricted to management accounts.
    pub fn require_management(&self) -> Result<AuthSession> {
        let session = self.require()?;
        if !session.is_management() {
            msg_bail_anyhow!(Message::ManagementOnly);
        }
        Ok(session)
    }

    /// Credentials for the next authenticated call.
    pub fn context(&self) -> Result<RequestContext> {
        Ok(RequestContext::bearer(self.require()?.access_token))
    }

    pub fn sign_in(&self, session: AuthSession) -> Result<()> {
        self.cache.store(&session)?;
        tracing::info!(user = %session.username, role = %session.user_role, "signed in");
        *self.state.lock() = Some(SessionState::Cached(session));
        Ok(())
    }

    pub fn sign_out(&self) -> Result<()> {
        self.cache.clear()?;
        *self.state.lock() = Some(SessionState::NoToken);
        tracing::info!("signed out");
        Ok(())
    }

    /// Converts an API result, signing out on `401`.
    pub fn guard<T>(&self, result: Result<T, ApiError>) -> Result<T> {
        match result {
            Ok(value) => Ok(value),
            Err(e) if e.is_unauthorized() => {
                tracing::warn!("backend rejected the token, clearing session");
                self.sign_out()?;
                Err(msg_error_anyhow!(Message::SessionExpired))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Logs in, asking `password` for up to [`MAX_RETRY_COUNT`] attempts.
    ///
    /// `password` receives the zero-based attempt number. Rejected
    /// credentials are retried; an inactive account or a transport failure
    /// ends the loop at once.
    pub async fn login<F>(&self, client: &ApiClient, username: &str, mut password: F) -> Result<AuthSession>
    where
        F: FnMut(i32) -> Result<String>,
    {
        let mut retries = 0;
        loop {
            let secret = password(retries)?;
            match client.login(username, &secret).await {
                Ok(response) => {
                    let session = authorize(response)?;
                    self.sign_in(session.clone())?;
                    return Ok(session);
                }
                Err(e) if e.is_client_error() => {
                    tracing::debug!(attempt = retries + 1, error = %e, "login rejected");
                    retries += 1;
                    if retries >= MAX_RETRY_COUNT {
                        msg_bail_anyhow!(Message::WrongPassword(MAX_RETRY_COUNT));
                    }
                    match e {
                        ApiError::Status { message, .. } => msg_error!(message),
                        _ => msg_error!(Message::InvalidCredentials),
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Revokes the token server-side when possible and always clears the cache.
    pub async fn logout(&self, client: &ApiClient) -> Result<()> {
        if let Some(session) = self.current()? {
            let ctx = RequestContext::bearer(session.access_token);
            if let Err(e) = client.logout(&ctx).await {
                tracing::warn!(error = %e, "server-side logout failed");
            }
        }
        self.sign_out()
    }
}
