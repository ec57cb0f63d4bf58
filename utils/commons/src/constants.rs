use super::*;

/// Tag for the ERC721 Transfer event.
/// The tags `u8::MAX - 4 ..= u8::MAX` belong to the CIS-2 standard events.
pub const TRANSFER_TAG: u8 = u8::MAX - 5;

/// Tag for the ERC721 Approval event.
pub const APPROVAL_TAG: u8 = u8::MAX - 6;

/// Tag for the ERC721 ApprovalForAll event.
pub const APPROVAL_FOR_ALL_TAG: u8 = u8::MAX - 7;

/// Account made of zero bytes. Used as the `from` address of mint events and
/// never allowed to own a token.
pub const ZERO_ACCOUNT: AccountAddress = AccountAddress([0u8; 32]);

/// Zero address, see [`ZERO_ACCOUNT`].
pub const ZERO_ADDRESS: Address = Address::Account(ZERO_ACCOUNT);

/// Standard identifier answered by `supports` for the ERC721 style interface.
pub const ERC721_STANDARD_IDENTIFIER: StandardIdentifier<'static> =
    StandardIdentifier::new_unchecked("ERC721");

/// Standards this contract implements itself.
pub const SUPPORTS_STANDARDS: [StandardIdentifier<'static>; 2] =
    [CIS0_STANDARD_IDENTIFIER, ERC721_STANDARD_IDENTIFIER];
