use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::security::constant_time_compare;
use crate::session::credential::SessionCredential;
use crate::session::provider::{IdentityProvider, Navigator, SessionEvent, Subject};
use crate::storage::{keys, Storage};

/// The gate's render-blocking state machine.
///
/// `Checking` is the initial state and also covers any in-flight
/// credential fetch; `Authenticated` carries the credential injected
/// into the page; `Unauthenticated` means the redirect has been issued
/// and nothing renders until a fresh mount.
#[derive(Debug, Clone)]
pub enum GateState {
    Checking,
    Authenticated(SessionCredential),
    Unauthenticated,
}

impl GateState {
    pub fn is_checking(&self) -> bool {
        matches!(self, GateState::Checking)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, GateState::Authenticated(_))
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, GateState::Unauthenticated)
    }

    /// The credential, when authenticated.
    pub fn credential(&self) -> Option<&SessionCredential> {
        match self {
            GateState::Authenticated(credential) => Some(credential),
            _ => None,
        }
    }
}

/// A render-capable unit that needs an injected credential.
pub trait Page {
    type Output;

    fn render(&self, credential: &SessionCredential) -> Self::Output;
}

/// What the gate produces in place of the wrapped page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<T> {
    /// Identity check in flight: a minimal, non-interactive indicator.
    Loading,
    /// Access denied; the redirect has been issued and nothing renders.
    Nothing,
    /// Access granted: the wrapped page's output.
    Page(T),
}

/// Builder for a mounted gate around one protected page.
pub struct SessionGate<P, N> {
    provider: Arc<P>,
    navigator: Arc<N>,
    token_cache: Option<Storage>,
}

impl<P: IdentityProvider, N: Navigator> SessionGate<P, N> {
    pub fn new(provider: Arc<P>, navigator: Arc<N>) -> Self {
        Self {
            provider,
            navigator,
            token_cache: None,
        }
    }

    /// Cache the freshest bearer token under [`keys::AUTH_TOKEN`] so
    /// non-gated code paths can read it synchronously. Those readers can
    /// observe a stale value until the async check lands; the gate is
    /// the only writer.
    pub fn with_token_cache(mut self, storage: Storage) -> Self {
        self.token_cache = Some(storage);
        self
    }

    /// Mount the gate: subscribe to the provider and start the checking
    /// loop. The page renders through the returned handle.
    pub fn mount(self) -> GateHandle {
        let (state_tx, state_rx) = watch::channel(GateState::Checking);
        let events = self.provider.subscribe();
        let task = tokio::spawn(run(
            self.provider,
            self.navigator,
            self.token_cache,
            events,
            state_tx,
        ));
        GateHandle {
            state: state_rx,
            task: Some(task),
        }
    }
}

/// Handle to a mounted gate.
///
/// Dropping the handle unmounts the gate: the provider subscription is
/// cancelled and no further state transitions occur.
pub struct GateHandle {
    state: watch::Receiver<GateState>,
    task: Option<JoinHandle<()>>,
}

impl GateHandle {
    /// Snapshot of the current state.
    pub fn state(&self) -> GateState {
        self.state.borrow().clone()
    }

    /// A watch on the gate's state for observers (re-render triggers).
    pub fn watch(&self) -> watch::Receiver<GateState> {
        self.state.clone()
    }

    /// Wait until the state changes.
    pub async fn changed(&mut self) {
        // Errors only when the gate task is gone; the last state stands.
        let _ = self.state.changed().await;
    }

    /// Render the wrapped page under the gate's policy.
    ///
    /// The credential is re-validated at every handoff: a page is never
    /// handed an expired credential, even between gate transitions.
    pub fn render<T: Page>(&self, page: &T) -> Rendered<T::Output> {
        match &*self.state.borrow() {
            GateState::Checking => Rendered::Loading,
            GateState::Unauthenticated => Rendered::Nothing,
            GateState::Authenticated(credential) => {
                if credential.is_valid() {
                    Rendered::Page(page.render(credential))
                } else {
                    Rendered::Nothing
                }
            }
        }
    }

    /// Unmount the gate and wait for the checking loop to wind down.
    pub async fn unmount(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
    }
}

impl Drop for GateHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Outcome of waiting for the next thing the loop must react to.
enum Waited {
    Event(SessionEvent),
    Expired,
    Closed,
}

async fn next_event(
    events: &mut mpsc::UnboundedReceiver<SessionEvent>,
    deadline: Option<DateTime<Utc>>,
) -> Waited {
    let Some(expires_at) = deadline else {
        return match events.recv().await {
            Some(event) => Waited::Event(event),
            None => Waited::Closed,
        };
    };

    let remaining = (expires_at - Utc::now()).to_std().unwrap_or(Duration::ZERO);
    tokio::select! {
        event = events.recv() => match event {
            Some(event) => Waited::Event(event),
            None => Waited::Closed,
        },
        _ = tokio::time::sleep(remaining) => Waited::Expired,
    }
}

/// The gate's checking loop. Notifications are processed strictly in
/// arrival order; at most one credential fetch is in flight at a time.
async fn run<P: IdentityProvider, N: Navigator>(
    provider: Arc<P>,
    navigator: Arc<N>,
    token_cache: Option<Storage>,
    mut events: mpsc::UnboundedReceiver<SessionEvent>,
    state: watch::Sender<GateState>,
) {
    // An event received while a fetch was in flight, carried into the
    // next iteration so nothing is ever dropped.
    let mut carried: Option<SessionEvent> = None;

    loop {
        let event = match carried.take() {
            Some(event) => event,
            None => {
                let deadline = state.borrow().credential().and_then(|c| c.expires_at());
                match next_event(&mut events, deadline).await {
                    Waited::Event(event) => event,
                    Waited::Expired => {
                        debug!("Session credential expired");
                        deny(&state, navigator.as_ref(), token_cache.as_ref());
                        continue;
                    }
                    // Provider dropped its end: no further transitions.
                    Waited::Closed => break,
                }
            }
        };

        match event {
            SessionEvent::SignedOut => {
                deny(&state, navigator.as_ref(), token_cache.as_ref());
            }
            SessionEvent::SignedIn(subject) => {
                if !state.borrow().is_checking() {
                    state.send_replace(GateState::Checking);
                }
                debug!("Validating session for subject {}", subject.id);

                let fetch = provider.fetch_token(&subject);
                tokio::pin!(fetch);

                // A notification arriving mid-fetch supersedes the
                // fetch: the pending future is dropped, so its eventual
                // result can never override the newer transition.
                let superseding = tokio::select! {
                    biased;
                    next = events.recv() => Some(next),
                    result = &mut fetch => {
                        match result {
                            Ok(token) => grant(
                                &state,
                                navigator.as_ref(),
                                token_cache.as_ref(),
                                token,
                                &subject,
                            ),
                            Err(e) => {
                                warn!("Token fetch failed for subject {}: {}", subject.id, e);
                                deny(&state, navigator.as_ref(), token_cache.as_ref());
                            }
                        }
                        None
                    }
                };

                match superseding {
                    Some(Some(event)) => carried = Some(event),
                    Some(None) => break,
                    None => {}
                }
            }
        }
    }
}

fn grant<N: Navigator>(
    state: &watch::Sender<GateState>,
    navigator: &N,
    token_cache: Option<&Storage>,
    token: String,
    subject: &Subject,
) {
    let credential = SessionCredential::issue(token, subject.id.clone());

    // A token already expired at issuance is a failed check.
    if !credential.is_valid() {
        warn!("Issued token for subject {} is already expired", subject.id);
        deny(state, navigator, token_cache);
        return;
    }

    if let Some(storage) = token_cache {
        let unchanged = storage
            .get(keys::AUTH_TOKEN)
            .is_some_and(|cached| constant_time_compare(&cached, credential.token()));
        if !unchanged {
            if let Err(e) = storage.set(keys::AUTH_TOKEN, credential.token()) {
                warn!("Failed to cache bearer token: {:#}", e);
            }
        }
    }

    info!("Session validated for subject {}", subject.id);
    state.send_replace(GateState::Authenticated(credential));
}

/// Fail closed: every failure category collapses into `Unauthenticated`
/// plus a single redirect per transition.
fn deny<N: Navigator>(
    state: &watch::Sender<GateState>,
    navigator: &N,
    token_cache: Option<&Storage>,
) {
    if state.borrow().is_unauthenticated() {
        return;
    }

    if let Some(storage) = token_cache {
        if let Err(e) = storage.remove(keys::AUTH_TOKEN) {
            warn!("Failed to clear cached bearer token: {:#}", e);
        }
    }

    state.send_replace(GateState::Unauthenticated);
    navigator.redirect_to_sign_in();
}
