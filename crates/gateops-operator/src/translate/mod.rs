//! Bidirectional translation between the configuration model and the
//! control-plane contract.
//!
//! `expand_*` goes configuration -> contract. It always produces
//! concrete (possibly empty) collections and fills every optional
//! scalar with an explicit value, because the control plane requires
//! optional fields present on write. `flatten_*` goes contract ->
//! configuration and takes a field only when the remote value is
//! present, because the control plane omits truly-unset fields from
//! responses. Expand always fills; flatten only copies what the remote
//! sent.
//!
//! Callers must never distinguish "not configured" from "configured
//! empty": both sides of the translation collapse them.

mod operation;
mod parameter;
mod representation;

pub use operation::{
    expand_operation, expand_request, expand_responses, flatten_operation, flatten_request,
    flatten_responses,
};
pub use parameter::{expand_parameter_contracts, flatten_parameter_contracts};
pub use representation::{expand_representations, flatten_representations};
