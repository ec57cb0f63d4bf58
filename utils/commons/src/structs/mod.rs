use super::*;

mod erc721;

pub use self::erc721::*;
