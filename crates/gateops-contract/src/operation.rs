//! Typed contract for the operation resource as the control plane
//! serves it.
//!
//! Every optional field is `Option` and omitted from the wire when
//! unset: the control plane leaves out truly-unset fields in responses,
//! while writers (the expand translators) fill every optional scalar
//! explicitly. Repeated members are ordered arrays on the wire even
//! though the configuration side treats them as sets.

use serde::{Deserialize, Serialize};

/// A named parameter: header, query parameter, form parameter, or URL
/// template parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterContract {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// One body representation of a request or response.
///
/// Several representations may share a content type; this layer does
/// not enforce uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepresentationContract {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_parameters: Option<Vec<ParameterContract>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

/// The operation's request shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContract {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<ParameterContract>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_parameters: Option<Vec<ParameterContract>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representations: Option<Vec<RepresentationContract>>,
}

/// One response shape, conceptually keyed by status code.
///
/// The contract permits duplicates and an absent status code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseContract {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<ParameterContract>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representations: Option<Vec<RepresentationContract>>,
}

/// The unit exchanged with the control plane: rebuilt fresh from the
/// configuration on every write, never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationContract {
    /// Server-assigned canonical identity string. Present in responses
    /// only; never sent on write.
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestContract>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Vec<ResponseContract>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_parameters: Option<Vec<ParameterContract>>,
}
