use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Routes the gate can send the user to.
pub mod routes {
    /// Public sign-in entry point.
    pub const SIGN_IN: &str = "/login";
}

/// Handle to a signed-in subject as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: String,
}

impl Subject {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One change in the provider's session state.
///
/// The provider reports at most one current subject at a time; a new
/// event always describes the whole session, not a delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(Subject),
    SignedOut,
}

/// Failures the identity provider can report.
///
/// The gate treats every variant the same way (deny and redirect); the
/// distinction only feeds the logs.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider refused or failed to issue a token for the subject.
    #[error("token issuance failed: {0}")]
    TokenIssuance(String),

    /// The provider could not be reached at all.
    #[error("identity provider unreachable: {0}")]
    Unreachable(String),
}

/// Narrow capability interface over the external identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync + 'static {
    /// Subscribe to session-change notifications.
    ///
    /// Events arrive in the order the provider emits them. Dropping the
    /// receiver is the unsubscribe; the provider must stop delivering
    /// and may release per-subscription resources.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionEvent>;

    /// Issue a fresh bearer token for the current subject.
    ///
    /// Rejects on any failure; the gate performs exactly one attempt per
    /// notification.
    async fn fetch_token(&self, subject: &Subject) -> Result<String, ProviderError>;
}

/// Navigation capability: how the gate leaves a protected page.
pub trait Navigator: Send + Sync + 'static {
    /// Replace the current route with [`routes::SIGN_IN`].
    fn redirect_to_sign_in(&self);
}
