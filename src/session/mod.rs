//! Session gating for protected pages.
//!
//! Every protected page mounts through a [`SessionGate`], which observes
//! the identity provider's session-change stream, obtains a fresh bearer
//! credential, and only then renders the wrapped page with the credential
//! injected. Any doubt about the session (sign-out, a failed token
//! fetch, an expired credential) denies access and redirects to the
//! public sign-in route. The gate never retries; recovery is a fresh
//! sign-in through the public flow, which re-mounts the gate.
//!
//! The identity provider and the router are narrow capabilities
//! ([`IdentityProvider`], [`Navigator`]) so both are pluggable external
//! collaborators.

mod credential;
mod gate;
mod provider;

pub use credential::SessionCredential;
pub use gate::{GateHandle, GateState, Page, Rendered, SessionGate};
pub use provider::{
    routes, IdentityProvider, Navigator, ProviderError, SessionEvent, Subject,
};
