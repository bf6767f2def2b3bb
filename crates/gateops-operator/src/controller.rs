//! CRUD reconciliation for operation resources.
//!
//! One controller call drives at most two sequential remote calls and
//! holds no state across resources: scheduling and state persistence
//! belong to the orchestration engine, retries to the transport
//! collaborator. Lifecycle per resource:
//! unmanaged -> upserting -> managed (read/update loop) -> deleting ->
//! absent. All four identity segments are fixed at creation time; the
//! caller must reconcile a changed segment as delete-then-create.

use std::future::Future;

use gateops_contract::OperationIdentity;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::client::ControlPlaneClient;
use crate::error::{OperatorError, Result};
use crate::spec::OperationSpec;
use crate::translate;

/// Config-shaped snapshot of a remote operation, as `read` observes it.
///
/// Re-expanding and re-flattening a snapshot is stable, which is what
/// makes importing an unmanaged remote object possible from nothing but
/// its identity string.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedOperation {
    pub identity: OperationIdentity,
    pub spec: OperationSpec,
}

/// Drives a single operation resource toward its desired state.
///
/// The client is injected at construction and the cancellation token
/// per call; neither is ever ambient.
pub struct OperationController {
    client: ControlPlaneClient,
}

impl OperationController {
    pub fn new(client: ControlPlaneClient) -> Self {
        Self { client }
    }

    /// Create or update the remote operation to match `spec`, then read
    /// it back and adopt the canonical identity the control plane
    /// reports.
    ///
    /// The write contract is rebuilt fresh from `spec` on every call.
    /// Failures are fatal to this invocation; retry policy belongs to
    /// the transport collaborator.
    pub async fn upsert(
        &self,
        cancel: &CancellationToken,
        identity: &OperationIdentity,
        spec: &OperationSpec,
    ) -> Result<OperationIdentity> {
        let contract = translate::expand_operation(spec);

        info!(identity = %identity, "creating/updating operation");
        self.guarded(
            cancel,
            identity,
            self.client.upsert_operation(identity, &contract),
        )
        .await
        .map_err(|e| e.during_write(identity))?;

        let observed = self
            .guarded(cancel, identity, self.client.get_operation(identity))
            .await
            .map_err(|e| e.during_confirm(identity))?
            .ok_or_else(|| {
                OperatorError::ControlPlane {
                    status: 404,
                    message: "operation missing after create/update".into(),
                }
                .during_confirm(identity)
            })?;

        // Adopt the identity string the control plane reports; fall
        // back to the locally built path when the response omits it.
        match observed.id.as_deref() {
            Some(id) => Ok(OperationIdentity::parse(id)?),
            None => Ok(identity.clone()),
        }
    }

    /// Look up the operation behind a stored identity string.
    ///
    /// `Ok(None)` means the resource is gone from the control plane
    /// (deleted out of band) and the caller should prune its local
    /// record rather than treat this as a failure.
    pub async fn read(
        &self,
        cancel: &CancellationToken,
        identity_str: &str,
    ) -> Result<Option<ObservedOperation>> {
        let identity = OperationIdentity::parse(identity_str)?;

        let Some(contract) = self
            .guarded(cancel, &identity, self.client.get_operation(&identity))
            .await
            .map_err(|e| e.during_read(&identity))?
        else {
            info!(identity = %identity, "operation not found remotely, reporting absent");
            return Ok(None);
        };

        let spec = translate::flatten_operation(&contract);
        Ok(Some(ObservedOperation { identity, spec }))
    }

    /// Delete the operation behind a stored identity string.
    ///
    /// Deleting an already-absent resource succeeds.
    pub async fn delete(&self, cancel: &CancellationToken, identity_str: &str) -> Result<()> {
        let identity = OperationIdentity::parse(identity_str)?;

        info!(identity = %identity, "deleting operation");
        let found = self
            .guarded(cancel, &identity, self.client.delete_operation(&identity))
            .await
            .map_err(|e| e.during_delete(&identity))?;
        if !found {
            debug!(identity = %identity, "operation already absent on delete");
        }
        Ok(())
    }

    /// Race a remote call against the caller's cancellation token.
    ///
    /// On cancellation the in-flight call is dropped; remote state is
    /// whatever the last completed call left behind.
    async fn guarded<T>(
        &self,
        cancel: &CancellationToken,
        identity: &OperationIdentity,
        call: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        tokio::select! {
            _ = cancel.cancelled() => Err(OperatorError::Cancelled {
                identity: identity.describe(),
            }),
            result = call => result,
        }
    }
}
