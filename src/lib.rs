//! Client-side core for the GreenGo can-recycling application.
//!
//! The crate provides the two pieces of the client that carry real
//! invariants, plus the plumbing both depend on:
//!
//! - [`i18n`]: the translation store: key/locale resolution, runtime
//!   language switching, persistence of the selection.
//! - [`session`]: the session gate, a fail-closed wrapper that only
//!   renders a protected page while a valid bearer credential is
//!   available, and redirects to the sign-in route otherwise.
//! - [`api`]: a typed client for the GreenGo REST backend, called by
//!   pages with the credential the gate injected.
//! - [`storage`]: the durable client-side key-value store both the
//!   translation store and the gate persist into.
//!
//! The two core components do not call each other; pages consume both.

pub mod api;
pub mod config;
pub mod i18n;
pub mod retry;
pub mod security;
pub mod session;
pub mod storage;
