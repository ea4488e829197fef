//! Session-backed models for storefront.
//!
//! Everything a visitor accumulates (cart lines, drawer and menu flags, the
//! outcome of their last contact submission) lives in the session store,
//! which is in-memory only.

pub mod session;

pub use session::{ContactFlash, keys as session_keys};
