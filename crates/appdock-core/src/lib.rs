//! # AppDock – connector core
//!
//! Shared infrastructure for AppDock connector plug-ins:
//!   • Structured integration error payloads (`{title, message}`)
//!   • Designer diagnostics (request/response echo + execution timing)
//!   • Configuration-property descriptors for the host's design surface
//!   • The document-store seam connectors read from and write to

pub mod diagnostics;
pub mod document;
pub mod error;
pub mod properties;
