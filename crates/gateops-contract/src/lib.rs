//! Shared wire contract for the gateops control plane.
//!
//! Defines the durable identity of an operation resource and the typed
//! JSON contract exchanged with the control-plane API.

pub mod identity;
pub mod operation;

pub use identity::{IdentityError, OperationIdentity};
pub use operation::{
    OperationContract, ParameterContract, RepresentationContract, RequestContract,
    ResponseContract,
};
