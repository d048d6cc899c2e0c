// ── appdock-sftp / sftp module ───────────────────────────────────────────────
//
// Minimal synchronous SFTP connector. Every operation is one linear
// connect → operate → disconnect sequence; sessions and channels are
// call-scoped and never pooled or shared across invocations.

pub mod commands;
pub mod path;
pub mod properties;
pub mod service;
pub mod transfer;
pub mod types;

pub use commands::*;
pub use service::SftpConnector;
pub use types::*;
