use gateops_contract::{OperationContract, RequestContract, ResponseContract};

use crate::spec::{OperationSpec, RequestBlock, ResponseBlock};

use super::{
    expand_parameter_contracts, expand_representations, flatten_parameter_contracts,
    flatten_representations,
};

/// Expand the whole desired configuration into a fresh write contract.
///
/// The contract is rebuilt from scratch on every create-or-update call;
/// nothing is patched incrementally.
pub fn expand_operation(spec: &OperationSpec) -> OperationContract {
    OperationContract {
        id: None,
        display_name: Some(spec.display_name.clone()),
        method: Some(spec.method.clone()),
        url_template: Some(spec.url_template.clone()),
        description: Some(spec.description.clone()),
        request: expand_request(&spec.request),
        responses: Some(expand_responses(&spec.response)),
        template_parameters: Some(expand_parameter_contracts(&spec.template_parameter)),
    }
}

/// Flatten a remote operation back into the configuration shape.
pub fn flatten_operation(contract: &OperationContract) -> OperationSpec {
    OperationSpec {
        display_name: contract.display_name.clone().unwrap_or_default(),
        method: contract.method.clone().unwrap_or_default(),
        url_template: contract.url_template.clone().unwrap_or_default(),
        description: contract.description.clone().unwrap_or_default(),
        request: flatten_request(contract.request.as_ref()),
        response: flatten_responses(contract.responses.as_deref()),
        template_parameter: flatten_parameter_contracts(contract.template_parameters.as_deref()),
    }
}

/// Expand the zero-or-one request block.
///
/// An empty slice means "no request configured" and expands to `None`.
/// A present block always expands fully, even when every field in it is
/// still at its default.
pub fn expand_request(blocks: &[RequestBlock]) -> Option<RequestContract> {
    let block = blocks.first()?;
    Some(RequestContract {
        description: Some(block.description.clone()),
        headers: Some(expand_parameter_contracts(&block.header)),
        query_parameters: Some(expand_parameter_contracts(&block.query_parameter)),
        representations: Some(expand_representations(&block.representation)),
    })
}

/// Flatten a remote request contract into the zero-or-one block shape.
pub fn flatten_request(input: Option<&RequestContract>) -> Vec<RequestBlock> {
    let Some(contract) = input else {
        return Vec::new();
    };
    vec![RequestBlock {
        description: contract.description.clone().unwrap_or_default(),
        header: flatten_parameter_contracts(contract.headers.as_deref()),
        query_parameter: flatten_parameter_contracts(contract.query_parameters.as_deref()),
        representation: flatten_representations(contract.representations.as_deref()),
    }]
}

/// Expand response blocks.
///
/// A status code of 0 means "unset": the field is left off the wire
/// rather than sent as the literal 0. A legitimate status code 0 would
/// be indistinguishable from "unset" here; the gateway contract has no
/// such code today.
pub fn expand_responses(blocks: &[ResponseBlock]) -> Vec<ResponseContract> {
    blocks
        .iter()
        .map(|block| ResponseContract {
            status_code: (block.status_code != 0).then_some(block.status_code),
            description: Some(block.description.clone()),
            headers: Some(expand_parameter_contracts(&block.header)),
            representations: Some(expand_representations(&block.representation)),
        })
        .collect()
}

/// Flatten remote responses. An absent remote status code flattens to
/// the configuration zero, which the configuration serializer omits.
pub fn flatten_responses(input: Option<&[ResponseContract]>) -> Vec<ResponseBlock> {
    let Some(contracts) = input else {
        return Vec::new();
    };

    contracts
        .iter()
        .map(|contract| ResponseBlock {
            status_code: contract.status_code.unwrap_or_default(),
            description: contract.description.clone().unwrap_or_default(),
            header: flatten_parameter_contracts(contract.headers.as_deref()),
            representation: flatten_representations(contract.representations.as_deref()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::RepresentationBlock;

    #[test]
    fn test_expand_request_absent_is_none() {
        assert!(expand_request(&[]).is_none());
    }

    #[test]
    fn test_flatten_request_none_is_length_zero() {
        assert_eq!(flatten_request(None).len(), 0);
    }

    #[test]
    fn test_present_but_default_request_expands_fully() {
        let contract = expand_request(&[RequestBlock::default()]).unwrap();
        assert_eq!(contract.description.as_deref(), Some(""));
        assert_eq!(contract.headers.as_deref(), Some(&[][..]));
        assert_eq!(contract.query_parameters.as_deref(), Some(&[][..]));
        assert_eq!(contract.representations.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_expand_responses_empty_is_empty_not_absent() {
        assert!(expand_responses(&[]).is_empty());
    }

    #[test]
    fn test_status_code_zero_never_reaches_the_wire() {
        let blocks = vec![ResponseBlock {
            description: "default response".into(),
            ..Default::default()
        }];
        let contracts = expand_responses(&blocks);
        assert_eq!(contracts[0].status_code, None);

        let json = serde_json::to_string(&contracts).unwrap();
        assert!(!json.contains("statusCode"));

        // Known boundary case: a configured 0 is indistinguishable from
        // "unset" and also stays off the wire.
        let round_tripped = flatten_responses(Some(&contracts));
        assert_eq!(round_tripped[0].status_code, 0);
        let flattened_json = serde_json::to_string(&round_tripped).unwrap();
        assert!(!flattened_json.contains("status_code"));
    }

    #[test]
    fn test_status_code_200_is_preserved_exactly() {
        let blocks = vec![ResponseBlock {
            status_code: 200,
            description: "successful operation".into(),
            ..Default::default()
        }];
        let contracts = expand_responses(&blocks);
        assert_eq!(contracts[0].status_code, Some(200));
        assert_eq!(flatten_responses(Some(&contracts))[0].status_code, 200);
    }

    #[test]
    fn test_delete_resource_expands_to_empty_collections() {
        let spec = OperationSpec {
            display_name: "DELETE Resource".into(),
            method: "DELETE".into(),
            url_template: "/resource".into(),
            ..Default::default()
        };

        let contract = expand_operation(&spec);
        assert!(contract.request.is_none());
        assert_eq!(contract.responses.as_deref(), Some(&[][..]));
        assert_eq!(contract.template_parameters.as_deref(), Some(&[][..]));

        let flattened = flatten_operation(&contract);
        assert_eq!(flattened, spec);
    }

    #[test]
    fn test_nested_round_trip_scenario() {
        let spec = OperationSpec {
            display_name: "Acceptance Test Operation".into(),
            method: "DELETE".into(),
            url_template: "/user1".into(),
            description: "This can only be done by the logged in user.".into(),
            request: vec![RequestBlock {
                description: "Created user object".into(),
                representation: vec![RepresentationBlock {
                    content_type: "application/json".into(),
                    schema_id: "592f6c1d0af5840ca8897f0c".into(),
                    type_name: "User".into(),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            response: vec![ResponseBlock {
                status_code: 200,
                description: "successful operation".into(),
                representation: vec![
                    RepresentationBlock {
                        content_type: "application/xml".into(),
                        ..Default::default()
                    },
                    RepresentationBlock {
                        content_type: "application/json".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
            ..Default::default()
        };

        let flattened = flatten_operation(&expand_operation(&spec));

        assert_eq!(flattened.display_name, spec.display_name);
        assert_eq!(flattened.request, spec.request);

        let response = &flattened.response[0];
        assert_eq!(response.status_code, 200);
        assert_eq!(response.representation.len(), 2);
        // Order of the representation set is not significant.
        let mut got: Vec<_> = response
            .representation
            .iter()
            .map(|r| r.content_type.as_str())
            .collect();
        got.sort_unstable();
        assert_eq!(got, vec!["application/json", "application/xml"]);
    }

    #[test]
    fn test_flatten_operation_tolerates_partial_remote_data() {
        let contract = OperationContract {
            display_name: Some("Ping".into()),
            method: Some("GET".into()),
            ..Default::default()
        };
        let spec = flatten_operation(&contract);
        assert_eq!(spec.display_name, "Ping");
        assert_eq!(spec.url_template, "");
        assert!(spec.request.is_empty());
        assert!(spec.response.is_empty());
        assert!(spec.template_parameter.is_empty());
    }
}
