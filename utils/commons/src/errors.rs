use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Tokens cannot be minted or transferred to the zero address
    /// (Error code: -4).
    InvalidRecipient,
    /// The `from` address does not own the token (Error code: -5).
    NotTokenOwner,
    /// Approving the current owner of a token (Error code: -6).
    ApprovalToOwner,
    /// An address cannot be its own operator (Error code: -7).
    ApproveToCaller,
    /// No token IDs left to mint (Error code: -8).
    TokenIdOverflow,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
