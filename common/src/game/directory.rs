use std::{
    collections::HashMap,
    fmt::Debug,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::debug;
use uuid::Uuid;

use super::{
    character::{Character, CharacterInput},
    seed,
};
use crate::Identity;

/// In-memory collection of characters, filtered by who is asking.
///
/// A caller sees a character when it is public or when the caller owns it.
/// Anything else is reported exactly like a missing id. Cloning yields
/// another handle to the same collection.
#[derive(Clone, Default)]
pub struct Directory {
    characters: Arc<RwLock<HashMap<String, Character>>>,
}

impl Debug for Directory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Directory")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Directory {
    pub fn new() -> Directory {
        Directory::default()
    }

    pub fn seeded() -> Directory {
        Directory::from_characters(seed::characters())
    }

    pub fn from_characters<I: IntoIterator<Item = Character>>(characters: I) -> Directory {
        let characters = characters
            .into_iter()
            .map(|character| (character.id.clone(), character))
            .collect();

        Directory {
            characters: Arc::new(RwLock::new(characters)),
        }
    }

    // Every mutation is a single insert or remove, so a poisoned map is still
    // consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Character>> {
        self.characters.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Character>> {
        self.characters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_by_id(&self, id: &str, identity: &Identity) -> Option<Character> {
        self.read()
            .get(id)
            .filter(|character| character.is_visible_to(identity))
            .cloned()
    }

    pub fn list_all(&self, identity: &Identity) -> Vec<Character> {
        self.read()
            .values()
            .filter(|character| character.is_visible_to(identity))
            .cloned()
            .collect()
    }

    /// Stores a new character owned by `owner` under a freshly generated id.
    ///
    /// The owner written on `input` is replaced by `owner`.
    pub fn add<S: Into<String>>(&self, input: CharacterInput, owner: S) -> Character {
        let mut characters = self.write();

        let mut id = Uuid::now_v7().as_simple().to_string();
        while characters.contains_key(&id) {
            id = Uuid::now_v7().as_simple().to_string();
        }

        let character = Character::from_input(
            id,
            CharacterInput {
                owner: owner.into(),
                ..input
            },
        );

        debug!(id = %character.id, owner = %character.owner, "Added character");

        characters.insert(character.id.clone(), character.clone());

        character
    }

    /// Removes the character if `identity` owns it. Returns how many
    /// characters were removed.
    pub fn remove(&self, id: &str, identity: &Identity) -> u32 {
        let mut characters = self.write();

        match characters.get(id) {
            Some(character) if character.is_owned_by(identity) => {
                characters.remove(id);
                debug!(id, owner = %identity.user_name, "Removed character");
                1
            }
            _ => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
