pub mod account;
pub mod game;
pub mod identity;
mod result;

pub use game::{
    character::{Character, CharacterInput},
    directory::Directory,
};
pub use identity::Identity;
pub use result::{Error, Result, ResultExt};
