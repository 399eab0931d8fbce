//! Browser storage adapters.

/// `sessionStorage`-backed session store.
pub mod session_store;
