use super::*;

/// The parameter type for the contract function `approve`.
#[derive(Serialize, SchemaType, Clone, PartialEq, Eq, Debug)]
pub struct ApproveParams {
    /// Address allowed to transfer the token. `None` revokes the approval.
    pub approved: Option<Address>,
    pub token_id: ContractTokenId,
}

/// The parameter type for the contract function `setApprovalForAll`.
#[derive(Serialize, SchemaType, Clone, Copy, PartialEq, Eq, Debug)]
pub struct SetApprovalForAllParams {
    pub operator: Address,
    /// `true` enables the operator, `false` disables it.
    pub approved: bool,
}

/// The parameter type for the contract function `isApprovedForAll`.
#[derive(Serialize, SchemaType, Clone, Copy, PartialEq, Eq, Debug)]
pub struct IsApprovedForAllParams {
    pub owner: Address,
    pub operator: Address,
}

/// The parameter type for the contract function `setImplementors`.
/// Takes a standard identifier and list of contract addresses providing
/// implementations of this standard.
#[derive(Debug, Serialize, PartialEq, Eq, SchemaType)]
pub struct SetImplementorsParams {
    /// The identifier for the standard.
    pub id: StandardIdentifierOwned,
    /// The addresses of the implementors of the standard.
    pub implementors: Vec<ContractAddress>,
}
