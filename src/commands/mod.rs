//! Command implementations
//!
//! Commands are organized into two categories:
//!
//! - `plumbing`: Raw scanner primitives (same-len, rev-same-len, diff-len)
//! - `porcelain`: User-facing operations (diff, merge)
//!
//! Every command is a method on [`Session`](crate::areas::session::Session)
//! and writes its result through the session's writer.

pub mod plumbing;
pub mod porcelain;
