//! An ERC721 style NFT smart contract.
//!
//! # Description
//! An instance of this contract is a single collection with a name and a
//! symbol. Every token is unique and identified by a sequential token ID
//! starting at 1, and carries an owner and a metadata URI.
//!
//! The contract is initialized with no tokens. Tokens are minted through the
//! `mint` contract function, which only succeeds for the account that
//! deployed the instance. Each mint logs an ERC721 `Transfer` event from the
//! zero address followed by a CIS-2 `TokenMetadata` event with the URI.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.
//!
//! An owner can transfer a token with `transferFrom`, approve a single
//! address per token with `approve`, and enable or disable operators with
//! `setApprovalForAll`. An operator of some address may transfer and approve
//! any token owned by this address.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, helper::*, structs::*};
use commons::*;
use concordium_cis2::{
    Cis2Event, MetadataUrl, StandardIdentifierOwned, SupportResult, SupportsQueryParams,
    SupportsQueryResponse, TokenIdU32, TokenMetadataEvent,
};
use concordium_std::*;

mod contract;
mod events;
mod helper;
mod impls;
mod structs;
