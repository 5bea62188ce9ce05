//! Authentication adapters.
//!
//! Implementations of the `AuthProvider` port. Real identity providers live
//! outside this crate; `StaticAuthProvider` covers local runs and tests.

mod static_provider;

pub use static_provider::StaticAuthProvider;
