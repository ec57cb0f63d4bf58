use super::*;
use core::ops::DerefMut;

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a new state with no tokens.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        params: InitParams,
        owner: AccountAddress,
    ) -> Self {
        Self {
            owner,
            name: params.name,
            symbol: params.symbol,
            total_supply: 0,
            tokens: state_builder.new_map(),
            balances: state_builder.new_map(),
            operators: state_builder.new_map(),
            implementors: state_builder.new_map(),
        }
    }

    /// Get the owner of a token.
    /// Results in an error if the token ID does not exist in the state.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.tokens
            .get(token_id)
            .map(|token| token.owner)
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Get the metadata URI of a token.
    /// Results in an error if the token ID does not exist in the state.
    pub fn token_uri(&self, token_id: &ContractTokenId) -> ContractResult<String> {
        self.tokens
            .get(token_id)
            .map(|token| token.uri.clone())
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Get the approved address of a token.
    /// Results in an error if the token ID does not exist in the state.
    pub fn get_approved(&self, token_id: &ContractTokenId) -> ContractResult<Option<Address>> {
        self.tokens
            .get(token_id)
            .map(|token| token.approved)
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Number of tokens owned by `address`, zero if it never owned any.
    pub fn balance_of(&self, address: &Address) -> TokenCount {
        self.balances
            .get(address)
            .map(|balance| *balance)
            .unwrap_or(0)
    }

    /// Mint a new token owned by `to`. The token gets the ID following the
    /// last minted one.
    ///
    /// Results in an error if
    /// - `to` is the zero address
    /// - the token ID space is exhausted
    pub fn mint(&mut self, to: Address, uri: String) -> ContractResult<ContractTokenId> {
        ensure!(
            to != ZERO_ADDRESS,
            CustomContractError::InvalidRecipient.into()
        );

        let next = self.total_supply + 1;
        ensure!(
            next <= u32::MAX as TokenCount,
            CustomContractError::TokenIdOverflow.into()
        );
        let token_id = TokenIdU32(next as u32);

        self.tokens.insert(
            token_id,
            TokenData {
                owner: to,
                approved: None,
                uri,
            },
        );
        self.balances
            .entry(to)
            .and_modify(|balance| *balance += 1)
            .or_insert(1);
        self.total_supply = next;

        Ok(token_id)
    }

    /// Move a token from `params.from` to `params.to` on behalf of `sender`
    /// and clear its approval.
    ///
    /// Results in an error if
    /// - the token ID does not exist in the state
    /// - the token is not owned by `params.from`
    /// - `params.to` is the zero address
    /// - `sender` is neither the owner, the approved address nor an operator
    ///   of the owner
    pub fn transfer(&mut self, sender: &Address, params: &TransferFromParams) -> ContractResult<()> {
        let (owner, approved) = self
            .tokens
            .get(&params.token_id)
            .map(|token| (token.owner, token.approved))
            .ok_or(ContractError::InvalidTokenId)?;

        ensure!(
            owner == params.from,
            CustomContractError::NotTokenOwner.into()
        );
        ensure!(
            params.to != ZERO_ADDRESS,
            CustomContractError::InvalidRecipient.into()
        );
        ensure!(
            *sender == owner || approved == Some(*sender) || self.is_operator(&owner, sender),
            ContractError::Unauthorized
        );

        if let Some(mut token) = self.tokens.get_mut(&params.token_id) {
            token.owner = params.to;
            token.approved = None;
        }

        self.balances
            .entry(params.from)
            .and_modify(|balance| *balance -= 1);
        self.balances
            .entry(params.to)
            .and_modify(|balance| *balance += 1)
            .or_insert(1);

        Ok(())
    }

    /// Set the approved address of a token on behalf of `sender`. `None` or
    /// the zero address clears the approval. Returns the owner of the token.
    ///
    /// Results in an error if
    /// - the token ID does not exist in the state
    /// - the approved address is the owner
    /// - `sender` is neither the owner nor an operator of the owner
    pub fn approve(&mut self, sender: &Address, params: &ApproveParams) -> ContractResult<Address> {
        let owner = self.owner_of(&params.token_id)?;

        ensure!(
            params.approved != Some(owner),
            CustomContractError::ApprovalToOwner.into()
        );
        ensure!(
            *sender == owner || self.is_operator(&owner, sender),
            ContractError::Unauthorized
        );

        // Approving the zero address is a revocation.
        let approved = params.approved.filter(|address| *address != ZERO_ADDRESS);
        if let Some(mut token) = self.tokens.get_mut(&params.token_id) {
            token.approved = approved;
        }

        Ok(owner)
    }

    /// Add a new operator for the given address.
    ///
    /// Succeeds even if the `operator` is already an operator for the `owner`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        self.operators
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the `address`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.operators
            .get_mut(owner)
            .map(|mut operators| operators.remove(operator));
    }

    /// Check if `address` is an operator for `owner`.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(address))
            .unwrap_or(false)
    }

    /// Update the list of contracts implementing the specified standard.
    pub fn set_implementors(
        &mut self,
        id: StandardIdentifierOwned,
        contracts: Vec<ContractAddress>,
    ) {
        self.implementors.insert(id, contracts);
    }

    /// Get the contracts registered as implementors of a standard.
    pub fn have_implementors(&self, id: &StandardIdentifierOwned) -> SupportResult {
        if let Some(addresses) = self.implementors.get(id) {
            SupportResult::SupportBy(addresses.to_vec())
        } else {
            SupportResult::NoSupport
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([1u8; 32]);
    const ALICE: Address = Address::Account(AccountAddress([2u8; 32]));
    const BOB: Address = Address::Account(AccountAddress([3u8; 32]));
    const CAROL: Address = Address::Contract(ContractAddress {
        index: 7,
        subindex: 0,
    });

    fn sample_state(state_builder: &mut TestStateBuilder) -> State<TestStateApi> {
        State::new(
            state_builder,
            InitParams {
                name: String::from("Sample"),
                symbol: String::from("SAMP"),
            },
            OWNER,
        )
    }

    #[concordium_test]
    fn test_mint_assigns_sequential_ids() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = sample_state(&mut state_builder);

        let first = state
            .mint(ALICE, String::from("ipfs://first"))
            .expect_report("Failed to mint first token");
        let second = state
            .mint(BOB, String::from("ipfs://second"))
            .expect_report("Failed to mint second token");
        let third = state
            .mint(ALICE, String::from("ipfs://third"))
            .expect_report("Failed to mint third token");

        claim_eq!(first, TokenIdU32(1));
        claim_eq!(second, TokenIdU32(2));
        claim_eq!(third, TokenIdU32(3));
        claim_eq!(state.total_supply, 3);
        claim_eq!(state.balance_of(&ALICE), 2);
        claim_eq!(state.balance_of(&BOB), 1);
        claim_eq!(state.owner_of(&second), Ok(BOB));
        claim_eq!(state.token_uri(&third), Ok(String::from("ipfs://third")));
    }

    #[concordium_test]
    fn test_mint_to_zero_address() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = sample_state(&mut state_builder);

        let result = state.mint(ZERO_ADDRESS, String::from("ipfs://lost"));

        claim_eq!(
            result,
            Err(CustomContractError::InvalidRecipient.into()),
            "Zero address must not receive tokens"
        );
        claim_eq!(state.total_supply, 0);
    }

    #[concordium_test]
    fn test_unknown_token() {
        let mut state_builder = TestStateBuilder::new();
        let state = sample_state(&mut state_builder);

        claim_eq!(
            state.owner_of(&TokenIdU32(1)),
            Err(ContractError::InvalidTokenId)
        );
        claim_eq!(
            state.token_uri(&TokenIdU32(1)),
            Err(ContractError::InvalidTokenId)
        );
        claim_eq!(
            state.get_approved(&TokenIdU32(1)),
            Err(ContractError::InvalidTokenId)
        );
        claim_eq!(state.balance_of(&ALICE), 0);
    }

    #[concordium_test]
    fn test_transfer_by_approved_clears_approval() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = sample_state(&mut state_builder);
        let token_id = state
            .mint(ALICE, String::from("ipfs://token"))
            .expect_report("Failed to mint token");

        let owner = state
            .approve(
                &ALICE,
                &ApproveParams {
                    approved: Some(BOB),
                    token_id,
                },
            )
            .expect_report("Owner should be able to approve");
        claim_eq!(owner, ALICE);
        claim_eq!(state.get_approved(&token_id), Ok(Some(BOB)));

        let params = TransferFromParams {
            from: ALICE,
            to: CAROL,
            token_id,
        };
        claim_eq!(state.transfer(&BOB, &params), Ok(()));

        claim_eq!(state.owner_of(&token_id), Ok(CAROL));
        claim_eq!(state.get_approved(&token_id), Ok(None));
        claim_eq!(state.balance_of(&ALICE), 0);
        claim_eq!(state.balance_of(&CAROL), 1);

        // The approval does not survive the transfer.
        let back = TransferFromParams {
            from: CAROL,
            to: BOB,
            token_id,
        };
        claim_eq!(
            state.transfer(&BOB, &back),
            Err(ContractError::Unauthorized)
        );
    }

    #[concordium_test]
    fn test_transfer_checks() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = sample_state(&mut state_builder);
        let token_id = state
            .mint(ALICE, String::from("ipfs://token"))
            .expect_report("Failed to mint token");

        let wrong_from = TransferFromParams {
            from: BOB,
            to: CAROL,
            token_id,
        };
        claim_eq!(
            state.transfer(&BOB, &wrong_from),
            Err(CustomContractError::NotTokenOwner.into())
        );

        let to_zero = TransferFromParams {
            from: ALICE,
            to: ZERO_ADDRESS,
            token_id,
        };
        claim_eq!(
            state.transfer(&ALICE, &to_zero),
            Err(CustomContractError::InvalidRecipient.into())
        );

        let unknown = TransferFromParams {
            from: ALICE,
            to: BOB,
            token_id: TokenIdU32(2),
        };
        claim_eq!(
            state.transfer(&ALICE, &unknown),
            Err(ContractError::InvalidTokenId)
        );
    }

    #[concordium_test]
    fn test_approve_checks() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = sample_state(&mut state_builder);
        let token_id = state
            .mint(ALICE, String::from("ipfs://token"))
            .expect_report("Failed to mint token");

        claim_eq!(
            state.approve(
                &ALICE,
                &ApproveParams {
                    approved: Some(ALICE),
                    token_id,
                }
            ),
            Err(CustomContractError::ApprovalToOwner.into())
        );
        claim_eq!(
            state.approve(
                &BOB,
                &ApproveParams {
                    approved: Some(BOB),
                    token_id,
                }
            ),
            Err(ContractError::Unauthorized)
        );

        state.add_operator(&ALICE, &BOB, &mut state_builder);
        claim_eq!(
            state.approve(
                &BOB,
                &ApproveParams {
                    approved: Some(CAROL),
                    token_id,
                }
            ),
            Ok(ALICE),
            "Operator should be able to approve"
        );
    }

    #[concordium_test]
    fn test_operators() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = sample_state(&mut state_builder);

        claim!(!state.is_operator(&ALICE, &BOB));
        claim!(
            !state.is_operator(&ALICE, &ALICE),
            "An owner is not its own operator"
        );

        state.add_operator(&ALICE, &BOB, &mut state_builder);
        state.add_operator(&ALICE, &BOB, &mut state_builder);
        claim!(state.is_operator(&ALICE, &BOB));
        claim!(!state.is_operator(&BOB, &ALICE));

        state.remove_operator(&ALICE, &BOB);
        claim!(!state.is_operator(&ALICE, &BOB));

        // Removing an operator that was never added is a no-op.
        state.remove_operator(&CAROL, &BOB);
        claim!(!state.is_operator(&CAROL, &BOB));
    }

    #[concordium_test]
    fn test_mint_exhausted_token_ids() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = sample_state(&mut state_builder);
        state.total_supply = u32::MAX as TokenCount;

        let result = state.mint(ALICE, String::from("ipfs://overflow"));

        claim_eq!(
            result,
            Err(CustomContractError::TokenIdOverflow.into()),
            "Token IDs past u32::MAX must not be minted"
        );
        claim_eq!(state.total_supply, u32::MAX as TokenCount);
        claim_eq!(state.balance_of(&ALICE), 0);
    }

    #[concordium_test]
    fn test_approve_zero_address_revokes() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = sample_state(&mut state_builder);
        let token_id = state
            .mint(ALICE, String::from("ipfs://token"))
            .expect_report("Failed to mint token");

        state
            .approve(
                &ALICE,
                &ApproveParams {
                    approved: Some(BOB),
                    token_id,
                },
            )
            .expect_report("Owner should be able to approve");
        claim_eq!(state.get_approved(&token_id), Ok(Some(BOB)));

        state
            .approve(
                &ALICE,
                &ApproveParams {
                    approved: Some(ZERO_ADDRESS),
                    token_id,
                },
            )
            .expect_report("Owner should be able to revoke");
        claim_eq!(state.get_approved(&token_id), Ok(None));
    }
}
