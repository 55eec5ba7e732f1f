use thiserror::Error;

/// Precondition violations in the supplied snapshot.
///
/// These indicate a bug in the calling editor, not a user-editable graph
/// state, so they surface as `Err` instead of validation findings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("duplicate node id in input: {0}")]
    DuplicateNodeId(String),
    #[error("duplicate edge id in input: {0}")]
    DuplicateEdgeId(String),
}

/// Why a prospective connection was rejected by [`crate::graph::check_connection`].
///
/// `Display` and `Error` are implemented by hand rather than via `thiserror`'s
/// derive because the `DuplicateConnection` variant carries a field literally
/// named `source`, which `thiserror` would otherwise treat as the error's
/// `source()` (requiring `String: std::error::Error`). These are leaf errors,
/// so `source()` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    UnknownEndpoint(String),
    SelfConnection,
    DuplicateConnection { source: String, target: String },
}

impl std::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionError::UnknownEndpoint(id) => write!(f, "unknown node {id}"),
            ConnectionError::SelfConnection => write!(f, "cannot connect a node to itself"),
            ConnectionError::DuplicateConnection { source, target } => {
                write!(f, "connection from {source} to {target} already exists")
            }
        }
    }
}

impl std::error::Error for ConnectionError {}
