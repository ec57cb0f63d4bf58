use super::*;

/// Summary of the contract returned by `view`.
#[derive(Serialize, SchemaType, PartialEq, Eq, Debug)]
pub struct ViewState {
    pub name: String,
    pub symbol: String,
    /// Account that deployed the contract and may mint.
    pub owner: AccountAddress,
    pub total_supply: TokenCount,
}
