use super::*;

/// The parameter type for the contract function `transferFrom`.
#[derive(Serialize, SchemaType, Clone, PartialEq, Eq, Debug)]
pub struct TransferFromParams {
    /// The address owning the token being transferred.
    pub from: Address,
    /// The address receiving the token.
    pub to: Address,
    /// NFT token ID
    pub token_id: ContractTokenId,
}
