//! Types, errors and constants shared by the ERC721 token contract and its
//! tests.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{constants::*, errors::*, structs::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod errors;
mod structs;
mod types;
