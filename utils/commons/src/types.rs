use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Token IDs are sequential positive integers, the first minted token is 1.
pub type ContractTokenId = TokenIdU32;

/// Contract token amount type.
/// Every token is unique so an amount is only ever 0 or 1.
pub type ContractTokenAmount = TokenAmountU8;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

/// Token counts: total supply and per-address balances.
pub type TokenCount = u64;
