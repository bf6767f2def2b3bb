use gateops_contract::{IdentityError, OperationIdentity};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OperatorError>;

#[derive(Error, Debug)]
pub enum OperatorError {
    /// A stored identity string failed to parse. Local, non-retryable:
    /// the caller's tracked state is corrupt.
    #[error("malformed identity: {0}")]
    MalformedIdentifier(#[from] IdentityError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx control-plane response outside the documented not-found
    /// cases.
    #[error("control plane returned {status}: {message}")]
    ControlPlane { status: u16, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    /// The create-or-update write was refused by the control plane.
    #[error("creating/updating {identity}: {source}")]
    RemoteRejected {
        identity: String,
        source: Box<OperatorError>,
    },

    /// The confirming read right after a successful write failed.
    #[error("reading back {identity} after create/update: {source}")]
    PostWriteReadFailed {
        identity: String,
        source: Box<OperatorError>,
    },

    #[error("retrieving {identity}: {source}")]
    RemoteReadFailed {
        identity: String,
        source: Box<OperatorError>,
    },

    #[error("deleting {identity}: {source}")]
    RemoteDeleteFailed {
        identity: String,
        source: Box<OperatorError>,
    },

    /// The caller's cancellation or deadline fired mid-operation. Remote
    /// state stays exactly as the last completed call left it.
    #[error("cancelled while reconciling {identity}")]
    Cancelled { identity: String },
}

impl OperatorError {
    /// Whether the underlying cause is transport-level and worth a retry
    /// by the caller. This crate never retries internally.
    pub fn is_transient(&self) -> bool {
        match self {
            OperatorError::Http(_) | OperatorError::ControlPlane { .. } => true,
            OperatorError::RemoteRejected { source, .. }
            | OperatorError::PostWriteReadFailed { source, .. }
            | OperatorError::RemoteReadFailed { source, .. }
            | OperatorError::RemoteDeleteFailed { source, .. } => source.is_transient(),
            _ => false,
        }
    }

    pub(crate) fn during_write(self, identity: &OperationIdentity) -> OperatorError {
        match self {
            cancelled @ OperatorError::Cancelled { .. } => cancelled,
            source => OperatorError::RemoteRejected {
                identity: identity.describe(),
                source: Box::new(source),
            },
        }
    }

    pub(crate) fn during_confirm(self, identity: &OperationIdentity) -> OperatorError {
        match self {
            cancelled @ OperatorError::Cancelled { .. } => cancelled,
            source => OperatorError::PostWriteReadFailed {
                identity: identity.describe(),
                source: Box::new(source),
            },
        }
    }

    pub(crate) fn during_read(self, identity: &OperationIdentity) -> OperatorError {
        match self {
            cancelled @ OperatorError::Cancelled { .. } => cancelled,
            source => OperatorError::RemoteReadFailed {
                identity: identity.describe(),
                source: Box::new(source),
            },
        }
    }

    pub(crate) fn during_delete(self, identity: &OperationIdentity) -> OperatorError {
        match self {
            cancelled @ OperatorError::Cancelled { .. } => cancelled,
            source => OperatorError::RemoteDeleteFailed {
                identity: identity.describe(),
                source: Box::new(source),
            },
        }
    }
}
