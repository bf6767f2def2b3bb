//! Declarative configuration model for an operation resource.
//!
//! The orchestration engine parses its configuration tree into these
//! typed blocks once at the boundary, so the translators and the
//! controller only ever see typed values. Optional string fields carry
//! the configuration system's zero value (the empty string) instead of
//! an `Option`, and repeated blocks have set semantics: order never
//! matters and equality is structural. Serialization omits defaulted
//! fields, so a flattened snapshot never materializes `""` or `0`
//! placeholders.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Desired state of a single operation resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSpec {
    /// Name shown in the gateway portal.
    pub display_name: String,

    /// HTTP method of the operation. Any token the gateway accepts.
    pub method: String,

    /// URL template, e.g. `/users/{id}`.
    pub url_template: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// At most one block; the configuration shape guarantees zero or
    /// one entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub request: Vec<RequestBlock>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response: Vec<ResponseBlock>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub template_parameter: Vec<ParameterBlock>,
}

/// The operation's request shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestBlock {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<ParameterBlock>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_parameter: Vec<ParameterBlock>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub representation: Vec<RepresentationBlock>,
}

/// One response shape of the operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResponseBlock {
    /// Status code; 0 means "unset" and never reaches the wire.
    #[serde(default, skip_serializing_if = "status_code_unset")]
    pub status_code: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<ParameterBlock>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub representation: Vec<RepresentationBlock>,
}

/// One body representation of a request or response.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RepresentationBlock {
    /// Conventionally required by callers, but tolerated when absent.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub form_parameter: Vec<ParameterBlock>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sample: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub schema_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub type_name: String,
}

/// A named parameter block, shared by headers, query parameters, form
/// parameters, and template parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParameterBlock {
    /// Unique within its containing list.
    pub name: String,

    #[serde(rename = "type")]
    pub parameter_type: String,

    pub required: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_value: String,

    /// Allowed values; unordered and deduplicated.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub values: BTreeSet<String>,
}

fn status_code_unset(code: &i32) -> bool {
    *code == 0
}
