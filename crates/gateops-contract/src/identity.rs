//! Durable identity of an operation resource.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("identity segment `{0}` is empty")]
    EmptySegment(&'static str),

    #[error(
        "malformed operation identity {0:?}: expected \
         /groups/<group>/services/<service>/apis/<api>/operations/<operation>"
    )]
    Malformed(String),
}

/// Identity of an operation resource: parent group, gateway service,
/// API, and the operation's own name.
///
/// Renders as the canonical control-plane path, e.g.
/// `/groups/prod/services/edge/apis/users/operations/get-user`. That
/// path is both the resource's REST address and the durable key
/// correlating local state to the remote object. All four segments are
/// fixed at creation time; changing any of them is delete-then-create,
/// never an update.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct OperationIdentity {
    pub group: String,
    pub service: String,
    pub api: String,
    pub operation: String,
}

impl OperationIdentity {
    /// Build an identity from its four segments.
    ///
    /// The only check is that every segment is non-empty; naming rules
    /// for individual segments are enforced upstream.
    pub fn new(
        group: impl Into<String>,
        service: impl Into<String>,
        api: impl Into<String>,
        operation: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let identity = Self {
            group: group.into(),
            service: service.into(),
            api: api.into(),
            operation: operation.into(),
        };
        for (label, value) in [
            ("group", &identity.group),
            ("service", &identity.service),
            ("api", &identity.api),
            ("operation", &identity.operation),
        ] {
            if value.is_empty() {
                return Err(IdentityError::EmptySegment(label));
            }
        }
        Ok(identity)
    }

    /// Parse a previously stored identity string back into the full
    /// addressing tuple.
    pub fn parse(input: &str) -> Result<Self, IdentityError> {
        let malformed = || IdentityError::Malformed(input.to_string());

        let rest = input.strip_prefix('/').ok_or_else(malformed)?;
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != 8 {
            return Err(malformed());
        }

        let segment = |index: usize, label: &str| -> Result<String, IdentityError> {
            let name = parts[index + 1];
            if parts[index] != label || name.is_empty() {
                return Err(malformed());
            }
            Ok(name.to_string())
        };

        Ok(Self {
            group: segment(0, "groups")?,
            service: segment(2, "services")?,
            api: segment(4, "apis")?,
            operation: segment(6, "operations")?,
        })
    }

    /// Canonical path, also the resource's address on the control plane.
    pub fn path(&self) -> String {
        format!(
            "/groups/{}/services/{}/apis/{}/operations/{}",
            self.group, self.service, self.api, self.operation
        )
    }

    /// Identity rendered for error messages and logs.
    pub fn describe(&self) -> String {
        format!(
            "operation {:?} (api {:?} / service {:?} / group {:?})",
            self.operation, self.api, self.service, self.group
        )
    }
}

impl fmt::Display for OperationIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for OperationIdentity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        let identity = OperationIdentity::new("prod", "edge", "users", "get-user").unwrap();
        assert_eq!(
            identity.path(),
            "/groups/prod/services/edge/apis/users/operations/get-user"
        );
        assert_eq!(OperationIdentity::parse(&identity.path()).unwrap(), identity);
    }

    #[test]
    fn test_new_rejects_empty_segment() {
        let err = OperationIdentity::new("prod", "", "users", "get-user").unwrap_err();
        assert_eq!(err, IdentityError::EmptySegment("service"));
    }

    #[test]
    fn test_parse_rejects_missing_segments() {
        let err = OperationIdentity::parse("/groups/prod/services/edge").unwrap_err();
        assert!(matches!(err, IdentityError::Malformed(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_labels() {
        let err =
            OperationIdentity::parse("/groups/prod/services/edge/apis/users/things/get-user")
                .unwrap_err();
        assert!(matches!(err, IdentityError::Malformed(_)));
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let err = OperationIdentity::parse("/groups/prod/services//apis/users/operations/get")
            .unwrap_err();
        assert!(matches!(err, IdentityError::Malformed(_)));
    }

    #[test]
    fn test_parse_rejects_trailing_content() {
        let err = OperationIdentity::parse(
            "/groups/prod/services/edge/apis/users/operations/get-user/extra",
        )
        .unwrap_err();
        assert!(matches!(err, IdentityError::Malformed(_)));
    }

    #[test]
    fn test_parse_requires_leading_slash() {
        let err = OperationIdentity::parse("groups/prod/services/edge/apis/users/operations/get")
            .unwrap_err();
        assert!(matches!(err, IdentityError::Malformed(_)));
    }

    #[test]
    fn test_describe_carries_all_segments() {
        let identity = OperationIdentity::new("prod", "edge", "users", "get-user").unwrap();
        let description = identity.describe();
        for segment in ["get-user", "users", "edge", "prod"] {
            assert!(description.contains(segment));
        }
    }

    #[test]
    fn test_from_str() {
        let identity: OperationIdentity = "/groups/g/services/s/apis/a/operations/o"
            .parse()
            .unwrap();
        assert_eq!(identity.operation, "o");
    }
}
