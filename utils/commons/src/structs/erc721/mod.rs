use super::*;

mod approval;
mod mint;
mod transfer;
mod view;

pub use self::{approval::*, mint::*, transfer::*, view::*};
