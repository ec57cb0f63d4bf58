use super::*;

/// The parameter type for the contract function `init`.
#[derive(Serialize, SchemaType, Clone, PartialEq, Eq, Debug)]
pub struct InitParams {
    /// Collection name, returned by `name`.
    pub name: String,
    /// Collection symbol, returned by `symbol`.
    pub symbol: String,
}

/// Minting Data.
#[derive(Serialize, SchemaType, Clone, PartialEq, Eq, Debug)]
pub struct MintParams {
    /// Address receiving the new token
    pub to: Address,
    /// Metadata URI stored for the new token
    pub token_uri: String,
}
