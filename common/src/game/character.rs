use serde::{Deserialize, Serialize};

use crate::Identity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub debut_game: String,
    pub release_year: i32,
    pub img: String,
    pub desc: String,
    pub wiki: String,
    pub public: bool,
    pub owner: String,
}

impl Character {
    pub fn from_input<S: Into<String>>(id: S, input: CharacterInput) -> Self {
        Character {
            id: id.into(),
            name: input.name,
            debut_game: input.debut_game,
            release_year: input.release_year,
            img: input.img,
            desc: input.desc,
            wiki: input.wiki,
            public: input.public,
            owner: input.owner,
        }
    }

    pub fn is_visible_to(&self, identity: &Identity) -> bool {
        self.public || self.is_owned_by(identity)
    }

    pub fn is_owned_by(&self, identity: &Identity) -> bool {
        self.owner == identity.user_name
    }
}

/// A character as submitted for creation, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterInput {
    pub name: String,
    pub debut_game: String,
    pub release_year: i32,
    pub img: String,
    pub desc: String,
    pub wiki: String,
    pub public: bool,
    pub owner: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn private_of(owner: &str) -> Character {
        Character::from_input(
            "x",
            CharacterInput {
                name: "Test".to_owned(),
                owner: owner.to_owned(),
                public: false,
                ..Default::default()
            },
        )
    }

    #[test]
    fn private_character_only_visible_to_owner() {
        let character = private_of("alice");

        assert!(character.is_visible_to(&Identity::user("alice")));
        assert!(!character.is_visible_to(&Identity::user("bob")));
        assert!(!character.is_visible_to(&Identity::anonymous()));
    }

    #[test]
    fn public_character_visible_to_anyone() {
        let mut character = private_of("alice");
        character.public = true;

        assert!(character.is_visible_to(&Identity::user("bob")));
        assert!(character.is_visible_to(&Identity::anonymous()));
    }

    #[test]
    fn ownership_ignores_authenticated_flag() {
        let character = private_of("alice");
        let identity = Identity {
            user_name: "alice".to_owned(),
            authenticated: false,
        };

        assert!(character.is_owned_by(&identity));
    }
}
