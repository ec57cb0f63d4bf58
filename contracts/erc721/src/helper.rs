use super::*;

/// CIS-2 metadata event pointing wallets at the URI a token was minted with.
pub fn token_metadata_event(
    token_id: ContractTokenId,
    url: String,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl { url, hash: None },
    })
}
