use gateops_contract::ParameterContract;

use crate::spec::ParameterBlock;

/// Expand parameter blocks into the wire contract.
///
/// Empty input expands to an empty, concrete list. The `required` flag
/// maps straight through; description and default value are sent as
/// always-present strings, empty when unconfigured.
pub fn expand_parameter_contracts(blocks: &[ParameterBlock]) -> Vec<ParameterContract> {
    blocks
        .iter()
        .map(|block| ParameterContract {
            name: Some(block.name.clone()),
            description: Some(block.description.clone()),
            parameter_type: Some(block.parameter_type.clone()),
            default_value: Some(block.default_value.clone()),
            required: Some(block.required),
            values: Some(block.values.iter().cloned().collect()),
        })
        .collect()
}

/// Flatten the wire contract back into configuration blocks.
///
/// An absent remote list flattens to an empty list, never a sentinel,
/// so downstream diffing treats "no items" uniformly. Scalars flatten
/// to the configuration zero value when the remote omits them.
pub fn flatten_parameter_contracts(input: Option<&[ParameterContract]>) -> Vec<ParameterBlock> {
    let Some(contracts) = input else {
        return Vec::new();
    };

    contracts
        .iter()
        .map(|contract| ParameterBlock {
            name: contract.name.clone().unwrap_or_default(),
            description: contract.description.clone().unwrap_or_default(),
            parameter_type: contract.parameter_type.clone().unwrap_or_default(),
            default_value: contract.default_value.clone().unwrap_or_default(),
            required: contract.required.unwrap_or_default(),
            values: contract.values.iter().flatten().cloned().collect(),
        })
        .collect()
}
