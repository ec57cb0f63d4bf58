use super::*;

/// An ERC721 event of a token changing owner. `from` is the zero address
/// when the token is minted.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub token_id: ContractTokenId,
}

/// An ERC721 event of the approved address of a token being changed.
/// `approved` is the zero address when the approval is revoked.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ApprovalEvent {
    pub owner: Address,
    pub approved: Address,
    pub token_id: ContractTokenId,
}

/// An ERC721 event of an operator being enabled or disabled for an owner.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ApprovalForAllEvent {
    pub owner: Address,
    pub operator: Address,
    pub approved: bool,
}

/// Tagged ERC721 event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum Erc721Event {
    Transfer(TransferEvent),
    Approval(ApprovalEvent),
    ApprovalForAll(ApprovalForAllEvent),
}

impl Serial for Erc721Event {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            Erc721Event::Transfer(event) => {
                out.write_u8(TRANSFER_TAG)?;
                event.serial(out)
            }
            Erc721Event::Approval(event) => {
                out.write_u8(APPROVAL_TAG)?;
                event.serial(out)
            }
            Erc721Event::ApprovalForAll(event) => {
                out.write_u8(APPROVAL_FOR_ALL_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for Erc721Event {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            TRANSFER_TAG => TransferEvent::deserial(source).map(Erc721Event::Transfer),
            APPROVAL_TAG => ApprovalEvent::deserial(source).map(Erc721Event::Approval),
            APPROVAL_FOR_ALL_TAG => {
                ApprovalForAllEvent::deserial(source).map(Erc721Event::ApprovalForAll)
            }
            _ => Err(ParseError::default()),
        }
    }
}
