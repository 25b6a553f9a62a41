pub mod character;
pub mod directory;
pub mod seed;
