//! # AppDock – SFTP connector
//!
//! SFTP connector plug-in providing:
//!   • Connection testing (open and immediately close an authenticated session)
//!   • Download: fetch a remote file into the platform document store
//!   • Upload: push a stored document's bytes to a remote path
//!   • Configurable host-key trust policy (accept-any / pinned / known-hosts)
//!   • Designer diagnostics with request/response echo and timing

pub mod sftp;
