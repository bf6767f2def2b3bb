use gateops_contract::RepresentationContract;

use crate::spec::RepresentationBlock;

use super::{expand_parameter_contracts, flatten_parameter_contracts};

/// Expand representation blocks into the wire contract.
///
/// Content type, sample, schema id and type name are written as
/// explicit (possibly empty) strings even when unconfigured; the write
/// contract has no notion of an absent optional.
pub fn expand_representations(blocks: &[RepresentationBlock]) -> Vec<RepresentationContract> {
    blocks
        .iter()
        .map(|block| RepresentationContract {
            content_type: Some(block.content_type.clone()),
            form_parameters: Some(expand_parameter_contracts(&block.form_parameter)),
            sample: Some(block.sample.clone()),
            schema_id: Some(block.schema_id.clone()),
            type_name: Some(block.type_name.clone()),
        })
        .collect()
}

/// Flatten remote representations back into configuration blocks.
///
/// Unlike expand, scalars are taken only when the remote carries them:
/// the control plane omits truly-unset optionals from responses.
pub fn flatten_representations(
    input: Option<&[RepresentationContract]>,
) -> Vec<RepresentationBlock> {
    let Some(contracts) = input else {
        return Vec::new();
    };

    contracts
        .iter()
        .map(|contract| RepresentationBlock {
            content_type: contract.content_type.clone().unwrap_or_default(),
            form_parameter: flatten_parameter_contracts(contract.form_parameters.as_deref()),
            sample: contract.sample.clone().unwrap_or_default(),
            schema_id: contract.schema_id.clone().unwrap_or_default(),
            type_name: contract.type_name.clone().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ParameterBlock;

    #[test]
    fn test_expand_empty_is_empty_not_absent() {
        assert!(expand_representations(&[]).is_empty());
    }

    #[test]
    fn test_flatten_absent_is_empty() {
        assert!(flatten_representations(None).is_empty());
    }

    #[test]
    fn test_expand_fills_every_optional_scalar() {
        let blocks = vec![RepresentationBlock {
            content_type: "application/json".into(),
            ..Default::default()
        }];
        let contract = &expand_representations(&blocks)[0];
        assert_eq!(contract.content_type.as_deref(), Some("application/json"));
        assert_eq!(contract.sample.as_deref(), Some(""));
        assert_eq!(contract.schema_id.as_deref(), Some(""));
        assert_eq!(contract.type_name.as_deref(), Some(""));
        assert_eq!(contract.form_parameters.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_flatten_leaves_remote_omissions_at_zero_value() {
        let contract = RepresentationContract {
            content_type: Some("application/xml".into()),
            ..Default::default()
        };
        let block = &flatten_representations(Some(&[contract]))[0];
        assert_eq!(block.content_type, "application/xml");
        assert_eq!(block.sample, "");
        assert_eq!(block.schema_id, "");
        assert_eq!(block.type_name, "");
        assert!(block.form_parameter.is_empty());
    }

    #[test]
    fn test_nested_form_parameters_round_trip() {
        let blocks = vec![RepresentationBlock {
            content_type: "application/x-www-form-urlencoded".into(),
            form_parameter: vec![ParameterBlock {
                name: "grant_type".into(),
                parameter_type: "string".into(),
                required: true,
                ..Default::default()
            }],
            ..Default::default()
        }];

        let round_tripped = flatten_representations(Some(&expand_representations(&blocks)));
        assert_eq!(round_tripped, blocks);
    }

    #[test]
    fn test_duplicate_content_types_are_not_collapsed() {
        let blocks = vec![
            RepresentationBlock {
                content_type: "application/json".into(),
                type_name: "User".into(),
                ..Default::default()
            },
            RepresentationBlock {
                content_type: "application/json".into(),
                type_name: "Account".into(),
                ..Default::default()
            },
        ];
        let contracts = expand_representations(&blocks);
        assert_eq!(contracts.len(), 2);
        assert_eq!(flatten_representations(Some(&contracts)).len(), 2);
    }
}
