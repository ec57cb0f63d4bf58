use super::*;

/// Initialize contract instance with no tokens. The account deploying the
/// instance becomes its owner.
#[init(contract = "ERC721", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    // Parse the parameter.
    let params: InitParams = ctx.parameter_cursor().get()?;

    // Construct the initial contract state.
    let state = State::new(state_builder, params, ctx.init_origin());
    Ok(state)
}

/// Mint a new token with a given address as the owner and a given metadata
/// URI. The token ID is the successor of the last minted token ID, starting
/// at 1. Returns the new token ID.
/// Logs a `Transfer` event from the zero address and a `TokenMetadata` event
/// carrying the URI.
///
/// It rejects if:
/// - The sender is not the contract instance owner.
/// - Fails to parse parameter.
/// - The recipient is the zero address.
/// - Fails to log Transfer event
/// - Fails to log TokenMetadata event
#[receive(
    contract = "ERC721",
    name = "mint",
    parameter = "MintParams",
    return_value = "ContractTokenId",
    mutable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    // Parse the parameter.
    let params: MintParams = ctx.parameter_cursor().get()?;

    let state = host.state_mut();
    ensure!(
        ctx.sender() == Address::Account(state.owner),
        ContractError::Unauthorized
    );

    // Mint the token in the state.
    let token_id = state.mint(params.to, params.token_uri.clone())?;

    // Event for minted NFT.
    logger.log(&Erc721Event::Transfer(TransferEvent {
        from: ZERO_ADDRESS,
        to: params.to,
        token_id,
    }))?;

    // Metadata URL for the NFT.
    logger.log(&token_metadata_event(token_id, params.token_uri))?;

    Ok(token_id)
}

/// Transfer a token from one address to another.
/// Logs a `Transfer` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The `token_id` does not exist.
/// - The token is not owned by `from`.
/// - `to` is the zero address.
/// - The sender is not the owner of the token, the address approved for the
///   token, or an operator of the owner.
/// - Fails to log event.
#[receive(
    contract = "ERC721",
    name = "transferFrom",
    parameter = "TransferFromParams",
    mutable,
    enable_logger
)]
fn transfer_from<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: TransferFromParams = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    // Update the contract state
    host.state_mut().transfer(&sender, &params)?;

    // Log transfer event
    logger.log(&Erc721Event::Transfer(TransferEvent {
        from: params.from,
        to: params.to,
        token_id: params.token_id,
    }))?;

    Ok(())
}

/// Approve an address to transfer a single token, or revoke the approval
/// with `None`. Logs an `Approval` event, the zero address standing for a
/// revoked approval.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The `token_id` does not exist.
/// - The approved address is the owner of the token.
/// - The sender is neither the owner nor an operator of the owner.
/// - Fails to log event.
#[receive(
    contract = "ERC721",
    name = "approve",
    parameter = "ApproveParams",
    mutable,
    enable_logger
)]
fn approve<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: ApproveParams = ctx.parameter_cursor().get()?;

    let owner = host.state_mut().approve(&ctx.sender(), &params)?;

    logger.log(&Erc721Event::Approval(ApprovalEvent {
        owner,
        approved: params.approved.unwrap_or(ZERO_ADDRESS),
        token_id: params.token_id,
    }))?;

    Ok(())
}

/// Enable or disable an address as operator of the sender address.
/// Logs an `ApprovalForAll` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The operator address is the same as the sender address.
/// - The operator address is the zero address.
/// - Fails to log event.
#[receive(
    contract = "ERC721",
    name = "setApprovalForAll",
    parameter = "SetApprovalForAllParams",
    mutable,
    enable_logger
)]
fn set_approval_for_all<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: SetApprovalForAllParams = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();
    ensure!(
        params.operator != sender,
        CustomContractError::ApproveToCaller.into()
    );
    ensure!(
        params.operator != ZERO_ADDRESS,
        CustomContractError::InvalidRecipient.into()
    );

    let (state, state_builder) = host.state_and_builder();
    if params.approved {
        state.add_operator(&sender, &params.operator, state_builder);
    } else {
        state.remove_operator(&sender, &params.operator);
    }

    logger.log(&Erc721Event::ApprovalForAll(ApprovalForAllEvent {
        owner: sender,
        operator: params.operator,
        approved: params.approved,
    }))?;

    Ok(())
}

#[receive(contract = "ERC721", name = "name", return_value = "String")]
fn name<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().name.clone())
}

#[receive(contract = "ERC721", name = "symbol", return_value = "String")]
fn symbol<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().symbol.clone())
}

/// Number of tokens minted so far.
#[receive(contract = "ERC721", name = "totalSupply", return_value = "TokenCount")]
fn total_supply<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenCount> {
    Ok(host.state().total_supply)
}

/// Metadata URI the token was minted with.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The `token_id` does not exist.
#[receive(
    contract = "ERC721",
    name = "tokenURI",
    parameter = "ContractTokenId",
    return_value = "String"
)]
fn token_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().token_uri(&token_id)
}

/// Current owner of a token.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The `token_id` does not exist.
#[receive(
    contract = "ERC721",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().owner_of(&token_id)
}

/// Number of tokens owned by an address.
#[receive(
    contract = "ERC721",
    name = "balanceOf",
    parameter = "Address",
    return_value = "TokenCount"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenCount> {
    let address: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().balance_of(&address))
}

/// Address approved for a single token, if any.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The `token_id` does not exist.
#[receive(
    contract = "ERC721",
    name = "getApproved",
    parameter = "ContractTokenId",
    return_value = "Option<Address>"
)]
fn get_approved<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<Address>> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().get_approved(&token_id)
}

#[receive(
    contract = "ERC721",
    name = "isApprovedForAll",
    parameter = "IsApprovedForAllParams",
    return_value = "bool"
)]
fn is_approved_for_all<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let params: IsApprovedForAllParams = ctx.parameter_cursor().get()?;
    Ok(host.state().is_operator(&params.owner, &params.operator))
}

/// Get the supported standards or addresses for a implementation given list
/// of standard identifiers.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "ERC721",
    name = "supports",
    parameter = "SupportsQueryParams",
    return_value = "SupportsQueryResponse"
)]
fn supports<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<SupportsQueryResponse> {
    // Parse the parameter.
    let params: SupportsQueryParams = ctx.parameter_cursor().get()?;

    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    for std_id in params.queries {
        if SUPPORTS_STANDARDS.contains(&std_id.as_standard_identifier()) {
            response.push(SupportResult::Support);
        } else {
            response.push(host.state().have_implementors(&std_id));
        }
    }

    Ok(SupportsQueryResponse::from(response))
}

/// Set the addresses for an implementation given a standard identifier and a
/// list of contract addresses.
///
/// It rejects if:
/// - Sender is not the owner of the contract instance.
/// - It fails to parse the parameter.
#[receive(
    contract = "ERC721",
    name = "setImplementors",
    parameter = "SetImplementorsParams",
    mutable
)]
fn set_implementors<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let state = host.state_mut();
    ensure!(
        ctx.sender() == Address::Account(state.owner),
        ContractError::Unauthorized
    );

    // Parse the parameter.
    let params: SetImplementorsParams = ctx.parameter_cursor().get()?;
    state.set_implementors(params.id, params.implementors);

    Ok(())
}

/// View the collection summary.
#[receive(contract = "ERC721", name = "view", return_value = "ViewState")]
fn view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewState> {
    let state = host.state();
    Ok(ViewState {
        name: state.name.clone(),
        symbol: state.symbol.clone(),
        owner: state.owner,
        total_supply: state.total_supply,
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    type Erc721Host = TestHost<State<TestStateApi>>;

    const ACCOUNT_0: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([2u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const ACCOUNT_2: AccountAddress = AccountAddress([3u8; 32]);
    const ADDRESS_2: Address = Address::Account(ACCOUNT_2);

    /// Deploys a fresh `Sample` collection from `ACCOUNT_0`. Every test gets
    /// its own instance, so no state is shared between tests.
    fn erc721() -> Erc721Host {
        let params = InitParams {
            name: String::from("Sample"),
            symbol: String::from("SAMP"),
        };
        let parameter_bytes = to_bytes(&params);

        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ACCOUNT_0);
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = init(&ctx, &mut state_builder).expect_report("Contract initialization failed");
        TestHost::new(state, state_builder)
    }

    fn mint_to(
        host: &mut Erc721Host,
        logger: &mut TestLogger,
        sender: Address,
        to: Address,
        uri: &str,
    ) -> ContractResult<ContractTokenId> {
        let parameter_bytes = to_bytes(&MintParams {
            to,
            token_uri: String::from(uri),
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender);
        ctx.set_parameter(&parameter_bytes);

        mint(&ctx, host, logger)
    }

    fn transfer_as(
        host: &mut Erc721Host,
        logger: &mut TestLogger,
        sender: Address,
        params: TransferFromParams,
    ) -> ContractResult<()> {
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender);
        ctx.set_parameter(&parameter_bytes);

        transfer_from(&ctx, host, logger)
    }

    fn query_total_supply(host: &Erc721Host) -> TokenCount {
        let ctx = TestReceiveContext::empty();
        total_supply(&ctx, host).expect_report("totalSupply should not reject")
    }

    fn query_token_uri(host: &Erc721Host, token_id: ContractTokenId) -> ContractResult<String> {
        let parameter_bytes = to_bytes(&token_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&parameter_bytes);

        token_uri(&ctx, host)
    }

    fn query_owner_of(host: &Erc721Host, token_id: ContractTokenId) -> ContractResult<Address> {
        let parameter_bytes = to_bytes(&token_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&parameter_bytes);

        owner_of(&ctx, host)
    }

    fn query_balance_of(host: &Erc721Host, address: Address) -> TokenCount {
        let parameter_bytes = to_bytes(&address);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&parameter_bytes);

        balance_of(&ctx, host).expect_report("balanceOf should not reject")
    }

    /// Test initialization stores the collection details and no tokens.
    #[concordium_test]
    fn test_init() {
        let host = erc721();
        let ctx = TestReceiveContext::empty();

        claim_eq!(name(&ctx, &host), Ok(String::from("Sample")));
        claim_eq!(symbol(&ctx, &host), Ok(String::from("SAMP")));
        claim_eq!(
            view(&ctx, &host),
            Ok(ViewState {
                name: String::from("Sample"),
                symbol: String::from("SAMP"),
                owner: ACCOUNT_0,
                total_supply: 0,
            })
        );
    }

    /// Test minting increments the supply, logs a transfer from the zero
    /// address and stores the token URI.
    #[concordium_test]
    fn test_minting() {
        let mut host = erc721();
        let mut logger = TestLogger::init();

        claim_eq!(query_total_supply(&host), 0);

        let result = mint_to(
            &mut host,
            &mut logger,
            ADDRESS_0,
            ADDRESS_1,
            "http://hello/bob",
        );

        claim_eq!(result, Ok(TokenIdU32(1)));
        claim_eq!(query_total_supply(&host), 1);

        // Check the logs
        claim_eq!(logger.logs.len(), 2, "Transfer and metadata should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Erc721Event::Transfer(TransferEvent {
                from: ZERO_ADDRESS,
                to: ADDRESS_1,
                token_id: TokenIdU32(1),
            })),
            "Incorrect event emitted"
        );
        claim_eq!(
            logger.logs[1],
            to_bytes(&token_metadata_event(
                TokenIdU32(1),
                String::from("http://hello/bob")
            )),
            "Incorrect metadata event emitted"
        );

        claim_eq!(
            query_token_uri(&host, TokenIdU32(1)),
            Ok(String::from("http://hello/bob"))
        );
    }

    /// Test the standards answered by `supports`.
    #[concordium_test]
    fn test_interfaces() {
        let host = erc721();

        let params = SupportsQueryParams {
            queries: vec![
                StandardIdentifierOwned::new_unchecked(String::from("CIS-0")),
                StandardIdentifierOwned::new_unchecked(String::from("ERC721")),
                StandardIdentifierOwned::new_unchecked(String::from("CIS-2")),
            ],
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&parameter_bytes);

        let response = supports(&ctx, &host).expect_report("supports should not reject");

        claim_eq!(
            to_bytes(&response),
            to_bytes(&SupportsQueryResponse::from(vec![
                SupportResult::Support,
                SupportResult::Support,
                SupportResult::NoSupport,
            ]))
        );
    }

    /// Test a registered implementor is reported and only the owner can
    /// register one.
    #[concordium_test]
    fn test_set_implementors() {
        let mut host = erc721();
        let implementor = ContractAddress {
            index: 42,
            subindex: 0,
        };

        let params = SetImplementorsParams {
            id: StandardIdentifierOwned::new_unchecked(String::from("CIS-2")),
            implementors: vec![implementor],
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&parameter_bytes);

        ctx.set_sender(ADDRESS_1);
        claim_eq!(
            set_implementors(&ctx, &mut host),
            Err(ContractError::Unauthorized)
        );

        ctx.set_sender(ADDRESS_0);
        claim_eq!(set_implementors(&ctx, &mut host), Ok(()));

        let query = SupportsQueryParams {
            queries: vec![StandardIdentifierOwned::new_unchecked(String::from("CIS-2"))],
        };
        let parameter_bytes = to_bytes(&query);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&parameter_bytes);

        let response = supports(&ctx, &host).expect_report("supports should not reject");
        claim_eq!(
            to_bytes(&response),
            to_bytes(&SupportsQueryResponse::from(vec![SupportResult::SupportBy(
                vec![implementor]
            )]))
        );
    }

    /// Test repeated mints get sequential token IDs.
    #[concordium_test]
    fn test_sequential_minting() {
        let mut host = erc721();
        let mut logger = TestLogger::init();

        for (expected, uri) in ["ipfs://one", "ipfs://two", "ipfs://three"].iter().enumerate() {
            let token_id = mint_to(&mut host, &mut logger, ADDRESS_0, ADDRESS_1, uri)
                .expect_report("Minting should succeed");
            claim_eq!(token_id, TokenIdU32(expected as u32 + 1));
        }

        claim_eq!(query_total_supply(&host), 3);
        claim_eq!(query_balance_of(&host, ADDRESS_1), 3);
        claim_eq!(
            query_token_uri(&host, TokenIdU32(2)),
            Ok(String::from("ipfs://two"))
        );

        let last: Erc721Event = from_bytes(&logger.logs[4]).expect_report("Expected an ERC721 event");
        claim_eq!(
            last,
            Erc721Event::Transfer(TransferEvent {
                from: ZERO_ADDRESS,
                to: ADDRESS_1,
                token_id: TokenIdU32(3),
            })
        );
    }

    /// Test minting fails, when the sender is not the contract owner.
    #[concordium_test]
    fn test_mint_not_owner() {
        let mut host = erc721();
        let mut logger = TestLogger::init();

        let result = mint_to(
            &mut host,
            &mut logger,
            ADDRESS_1,
            ADDRESS_1,
            "http://hello/bob",
        );

        claim_eq!(result, Err(ContractError::Unauthorized));
        claim_eq!(query_total_supply(&host), 0);
        claim!(logger.logs.is_empty(), "No event should be logged");
    }

    /// Test minting to the zero address is rejected.
    #[concordium_test]
    fn test_mint_to_zero_address() {
        let mut host = erc721();
        let mut logger = TestLogger::init();

        let result = mint_to(
            &mut host,
            &mut logger,
            ADDRESS_0,
            ZERO_ADDRESS,
            "http://hello/bob",
        );

        claim_eq!(result, Err(CustomContractError::InvalidRecipient.into()));
        claim_eq!(query_total_supply(&host), 0);
    }

    /// Test querying an unminted token is rejected.
    #[concordium_test]
    fn test_token_uri_unknown_token() {
        let host = erc721();

        claim_eq!(
            query_token_uri(&host, TokenIdU32(1)),
            Err(ContractError::InvalidTokenId)
        );
        claim_eq!(
            query_owner_of(&host, TokenIdU32(0)),
            Err(ContractError::InvalidTokenId)
        );
    }

    /// Test transfer succeeds, when `from` is the sender.
    #[concordium_test]
    fn test_transfer_account() {
        let mut host = erc721();
        let mut logger = TestLogger::init();
        let token_id = mint_to(&mut host, &mut logger, ADDRESS_0, ADDRESS_1, "ipfs://token")
            .expect_report("Minting should succeed");
        let mut logger = TestLogger::init();

        let result = transfer_as(
            &mut host,
            &mut logger,
            ADDRESS_1,
            TransferFromParams {
                from: ADDRESS_1,
                to: ADDRESS_2,
                token_id,
            },
        );

        claim_eq!(result, Ok(()));
        claim_eq!(query_owner_of(&host, token_id), Ok(ADDRESS_2));
        claim_eq!(query_balance_of(&host, ADDRESS_1), 0);
        claim_eq!(query_balance_of(&host, ADDRESS_2), 1);
        claim_eq!(query_total_supply(&host), 1);

        // Check the logs.
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Erc721Event::Transfer(TransferEvent {
                from: ADDRESS_1,
                to: ADDRESS_2,
                token_id,
            })),
            "Incorrect event emitted"
        );
    }

    /// Test transfer token fails, when sender is neither the owner, the
    /// approved address or an operator of the owner.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        let mut host = erc721();
        let mut logger = TestLogger::init();
        let token_id = mint_to(&mut host, &mut logger, ADDRESS_0, ADDRESS_1, "ipfs://token")
            .expect_report("Minting should succeed");

        let result = transfer_as(
            &mut host,
            &mut logger,
            ADDRESS_2,
            TransferFromParams {
                from: ADDRESS_1,
                to: ADDRESS_2,
                token_id,
            },
        );

        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
        claim_eq!(query_owner_of(&host, token_id), Ok(ADDRESS_1));
    }

    /// Test approving an address, which then transfers the token.
    #[concordium_test]
    fn test_approve_and_transfer() {
        let mut host = erc721();
        let mut logger = TestLogger::init();
        let token_id = mint_to(&mut host, &mut logger, ADDRESS_0, ADDRESS_1, "ipfs://token")
            .expect_report("Minting should succeed");
        let mut logger = TestLogger::init();

        let parameter_bytes = to_bytes(&ApproveParams {
            approved: Some(ADDRESS_2),
            token_id,
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        ctx.set_parameter(&parameter_bytes);

        claim_eq!(approve(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(
            logger.logs[0],
            to_bytes(&Erc721Event::Approval(ApprovalEvent {
                owner: ADDRESS_1,
                approved: ADDRESS_2,
                token_id,
            })),
            "Incorrect event emitted"
        );

        let parameter_bytes = to_bytes(&token_id);
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(get_approved(&ctx, &host), Ok(Some(ADDRESS_2)));

        let result = transfer_as(
            &mut host,
            &mut logger,
            ADDRESS_2,
            TransferFromParams {
                from: ADDRESS_1,
                to: ADDRESS_2,
                token_id,
            },
        );
        claim_eq!(result, Ok(()));
        claim_eq!(query_owner_of(&host, token_id), Ok(ADDRESS_2));
        claim_eq!(get_approved(&ctx, &host), Ok(None));
    }

    /// Test an operator set with `setApprovalForAll` can transfer, and loses
    /// that right when disabled again.
    #[concordium_test]
    fn test_operator_transfer() {
        let mut host = erc721();
        let mut logger = TestLogger::init();
        let first = mint_to(&mut host, &mut logger, ADDRESS_0, ADDRESS_1, "ipfs://first")
            .expect_report("Minting should succeed");
        let second = mint_to(&mut host, &mut logger, ADDRESS_0, ADDRESS_1, "ipfs://second")
            .expect_report("Minting should succeed");
        let mut logger = TestLogger::init();

        let parameter_bytes = to_bytes(&SetApprovalForAllParams {
            operator: ADDRESS_2,
            approved: true,
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        ctx.set_parameter(&parameter_bytes);

        claim_eq!(set_approval_for_all(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(
            logger.logs[0],
            to_bytes(&Erc721Event::ApprovalForAll(ApprovalForAllEvent {
                owner: ADDRESS_1,
                operator: ADDRESS_2,
                approved: true,
            })),
            "Incorrect event emitted"
        );

        let parameter_bytes = to_bytes(&IsApprovedForAllParams {
            owner: ADDRESS_1,
            operator: ADDRESS_2,
        });
        let mut query_ctx = TestReceiveContext::empty();
        query_ctx.set_parameter(&parameter_bytes);
        claim_eq!(is_approved_for_all(&query_ctx, &host), Ok(true));

        let result = transfer_as(
            &mut host,
            &mut logger,
            ADDRESS_2,
            TransferFromParams {
                from: ADDRESS_1,
                to: ADDRESS_0,
                token_id: first,
            },
        );
        claim_eq!(result, Ok(()));
        claim_eq!(query_balance_of(&host, ADDRESS_1), 1);
        claim_eq!(query_balance_of(&host, ADDRESS_0), 1);

        let parameter_bytes = to_bytes(&SetApprovalForAllParams {
            operator: ADDRESS_2,
            approved: false,
        });
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(set_approval_for_all(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(is_approved_for_all(&query_ctx, &host), Ok(false));

        let result = transfer_as(
            &mut host,
            &mut logger,
            ADDRESS_2,
            TransferFromParams {
                from: ADDRESS_1,
                to: ADDRESS_0,
                token_id: second,
            },
        );
        claim_eq!(result, Err(ContractError::Unauthorized));
    }

    /// Test an address cannot become its own operator.
    #[concordium_test]
    fn test_approval_for_all_to_caller() {
        let mut host = erc721();
        let mut logger = TestLogger::init();

        let parameter_bytes = to_bytes(&SetApprovalForAllParams {
            operator: ADDRESS_1,
            approved: true,
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        ctx.set_parameter(&parameter_bytes);

        claim_eq!(
            set_approval_for_all(&ctx, &mut host, &mut logger),
            Err(CustomContractError::ApproveToCaller.into())
        );
        claim!(logger.logs.is_empty(), "No event should be logged");
    }

    /// Test the zero address cannot become an operator.
    #[concordium_test]
    fn test_approval_for_all_to_zero_address() {
        let mut host = erc721();
        let mut logger = TestLogger::init();

        let parameter_bytes = to_bytes(&SetApprovalForAllParams {
            operator: ZERO_ADDRESS,
            approved: true,
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        ctx.set_parameter(&parameter_bytes);

        claim_eq!(
            set_approval_for_all(&ctx, &mut host, &mut logger),
            Err(CustomContractError::InvalidRecipient.into())
        );
        claim!(logger.logs.is_empty(), "No event should be logged");

        let parameter_bytes = to_bytes(&IsApprovedForAllParams {
            owner: ADDRESS_1,
            operator: ZERO_ADDRESS,
        });
        let mut query_ctx = TestReceiveContext::empty();
        query_ctx.set_parameter(&parameter_bytes);
        claim_eq!(is_approved_for_all(&query_ctx, &host), Ok(false));
    }

    /// Test a parameter that cannot be parsed is rejected.
    #[concordium_test]
    fn test_token_uri_malformed_parameter() {
        let mut host = erc721();
        let mut logger = TestLogger::init();
        mint_to(&mut host, &mut logger, ADDRESS_0, ADDRESS_1, "http://hello/bob")
            .expect_report("Minting should succeed");

        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&[]);

        claim_eq!(
            token_uri(&ctx, &host),
            Err(CustomContractError::ParseParams.into())
        );
    }
}
