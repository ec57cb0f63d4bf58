use super::*;

/// Data kept for every minted token.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct TokenData {
    /// Current owner, never the zero address
    pub owner: Address,
    /// Address allowed to transfer this token on behalf of the owner
    pub approved: Option<Address>,
    /// Metadata URI given at mint
    pub uri: String,
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Account that deployed the contract, the only one allowed to mint.
    pub owner: AccountAddress,
    /// Collection name.
    pub name: String,
    /// Collection symbol.
    pub symbol: String,
    /// Number of minted tokens, also the ID of the last minted token.
    pub total_supply: TokenCount,
    /// All minted tokens.
    pub tokens: StateMap<ContractTokenId, TokenData, S>,
    /// Number of tokens owned by each address.
    pub balances: StateMap<Address, TokenCount, S>,
    /// Operators for each address.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
    /// Implementors registered through `setImplementors`.
    pub implementors: StateMap<StandardIdentifierOwned, Vec<ContractAddress>, S>,
}
