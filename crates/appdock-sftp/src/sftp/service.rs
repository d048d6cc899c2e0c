// ── Session lifecycle ────────────────────────────────────────────────────────
//
// One connector instance per host invocation. A session is opened, exactly
// one channel operation is performed against it, and both are released
// before the call returns — on every exit path.

use crate::sftp::types::{ConnectionConfig, HostKeyPolicy, TestConnectionOutcome};
use appdock_core::error::ConnectorError;
use log::{debug, info, warn};
use ssh2::{CheckResult, HashType, KnownHostFileKind, Session};
use std::net::TcpStream;

pub struct SftpConnector {
    config: ConnectionConfig,
}

impl SftpConnector {
    pub fn new(config: ConnectionConfig) -> Self {
        SftpConnector { config }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Open a password-authenticated session: TCP connect, SSH handshake,
    /// host-key policy check, then `userauth_password`.
    pub(crate) fn open_session(&self) -> Result<Session, ConnectorError> {
        let addr = self.config.addr();
        debug!("Connecting to {}", addr);

        let tcp = TcpStream::connect(&addr).map_err(|e| {
            ConnectorError::Connection(format!("Failed to connect to {}: {}", addr, e))
        })?;

        let mut session = Session::new().map_err(|e| {
            ConnectorError::Connection(format!("Failed to create SSH session: {}", e))
        })?;
        session.set_tcp_stream(tcp);
        session.handshake().map_err(|e| {
            ConnectorError::Connection(format!("SSH handshake with {} failed: {}", addr, e))
        })?;

        self.verify_host_key(&session)?;

        session
            .userauth_password(&self.config.username, &self.config.password)
            .map_err(|e| {
                ConnectorError::Connection(format!(
                    "Authentication for '{}' failed: {}",
                    self.config.username, e
                ))
            })?;
        if !session.authenticated() {
            return Err(ConnectorError::Connection(format!(
                "Authentication for '{}' failed",
                self.config.username
            )));
        }

        info!("SFTP session open: {}@{}", self.config.username, addr);
        Ok(session)
    }

    fn verify_host_key(&self, session: &Session) -> Result<(), ConnectorError> {
        match &self.config.host_key_policy {
            HostKeyPolicy::AcceptAny => {
                warn!(
                    "Host key verification disabled for {} — the server's identity is not checked",
                    self.config.host
                );
                Ok(())
            }
            HostKeyPolicy::PinnedFingerprint(expected) => {
                let hash = session.host_key_hash(HashType::Sha256).ok_or_else(|| {
                    ConnectorError::Connection("Server presented no host key".to_string())
                })?;
                let actual = hex::encode(hash);
                let expected = expected.to_lowercase().replace(':', "");
                if actual == expected {
                    Ok(())
                } else {
                    Err(ConnectorError::Connection(format!(
                        "Host key fingerprint mismatch for {}: expected {}, got {}",
                        self.config.host, expected, actual
                    )))
                }
            }
            HostKeyPolicy::KnownHostsFile(path) => {
                let (key, _) = session.host_key().ok_or_else(|| {
                    ConnectorError::Connection("Server presented no host key".to_string())
                })?;
                let mut known = session.known_hosts().map_err(|e| {
                    ConnectorError::Connection(format!("known_hosts init failed: {}", e))
                })?;
                known
                    .read_file(path, KnownHostFileKind::OpenSSH)
                    .map_err(|e| {
                        ConnectorError::Connection(format!(
                            "Failed to read known_hosts file '{}': {}",
                            path.display(),
                            e
                        ))
                    })?;
                match known.check_port(&self.config.host, self.config.port, key) {
                    CheckResult::Match => Ok(()),
                    CheckResult::NotFound => Err(ConnectorError::Connection(format!(
                        "Host '{}' has no entry in {}",
                        self.config.host,
                        path.display()
                    ))),
                    CheckResult::Mismatch => Err(ConnectorError::Connection(format!(
                        "Host key for '{}' does not match its known_hosts entry",
                        self.config.host
                    ))),
                    CheckResult::Failure => Err(ConnectorError::Connection(
                        "known_hosts check failed".to_string(),
                    )),
                }
            }
        }
    }

    /// Best-effort close. A close failure never changes the operation
    /// outcome; it is only logged.
    pub(crate) fn release(&self, session: Session) {
        if let Err(e) = session.disconnect(None, "Client disconnecting", None) {
            warn!("Closing session to {} failed: {}", self.config.addr(), e);
        }
    }

    /// Open a session and immediately release it. Exactly one transient
    /// connection; no retry, no classification beyond pass/fail.
    pub fn test_connection(&self) -> TestConnectionOutcome {
        match self.open_session() {
            Ok(session) => {
                self.release(session);
                TestConnectionOutcome {
                    success: true,
                    message: None,
                }
            }
            Err(e) => TestConnectionOutcome {
                success: false,
                message: Some(e.message().to_string()),
            },
        }
    }
}
