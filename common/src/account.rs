use std::{fmt::Debug, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{Error, Result, ResultExt};

const USERS_TREE: &str = "Users";

pub const MIN_USER_NAME_LEN: usize = 2;
pub const MAX_USER_NAME_LEN: usize = 16;
pub const MIN_PASSWORD_LEN: usize = 4;

/// A persisted user account. Keyed by `user_name` in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    UserName,
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub field: Field,
    pub error: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUp {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl Debug for SignUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUp")
            .field("user_name", &self.user_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl SignUp {
    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        let name_len = self.user_name.chars().count();
        if !(MIN_USER_NAME_LEN..=MAX_USER_NAME_LEN).contains(&name_len) {
            errors.push(FieldError {
                field: Field::UserName,
                error: format!(
                    "User name {} must be between {MIN_USER_NAME_LEN} and {MAX_USER_NAME_LEN} characters long.",
                    self.user_name
                ),
            });
        }

        if !is_email(&self.email) {
            errors.push(FieldError {
                field: Field::Email,
                error: format!("{} is not a valid email address.", self.email),
            });
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError {
                field: Field::Password,
                error: format!("Password is too short. Minimum length is {MIN_PASSWORD_LEN}."),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }
}

fn is_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Accounts persisted in the `Users` tree of a sled database.
#[derive(Clone)]
pub struct AccountStore {
    db: sled::Db,
    users: sled::Tree,
    cost: u32,
}

impl Debug for AccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountStore")
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}

impl AccountStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<AccountStore> {
        let path = path.as_ref();
        let db = sled::open(path).context(format!("Opening {}", path.display()))?;

        AccountStore::from_db(db)
    }

    /// A store that is deleted when dropped.
    pub fn temporary() -> Result<AccountStore> {
        let db = sled::Config::new().temporary(true).open()?;

        AccountStore::from_db(db)
    }

    fn from_db(db: sled::Db) -> Result<AccountStore> {
        let users = db.open_tree(USERS_TREE)?;

        Ok(AccountStore {
            db,
            users,
            cost: bcrypt::DEFAULT_COST,
        })
    }

    /// Sets the bcrypt cost used for new password hashes.
    pub fn with_cost(mut self, cost: u32) -> AccountStore {
        self.cost = cost;
        self
    }

    pub fn exists(&self, user_name: &str) -> Result<bool> {
        Ok(self.users.contains_key(user_name.as_bytes())?)
    }

    pub fn get(&self, user_name: &str) -> Result<Option<Account>> {
        self.users
            .get(user_name.as_bytes())?
            .map(|bytes| serde_json::from_slice(&bytes).map_err(Error::from))
            .transpose()
    }

    pub fn create(&self, sign_up: SignUp) -> Result<Account> {
        sign_up.validate()?;

        if self.exists(&sign_up.user_name)? {
            return Err(Error::UserNameTaken);
        }

        let account = Account {
            id: Uuid::now_v7().as_simple().to_string(),
            password_hash: bcrypt::hash(&sign_up.password, self.cost)
                .context("Unable to process password")?,
            user_name: sign_up.user_name,
            email: sign_up.email,
        };

        let bytes = serde_json::to_vec(&account)?;

        // Another sign up for the same name may have landed while hashing.
        if self
            .users
            .compare_and_swap(
                account.user_name.as_bytes(),
                None as Option<&[u8]>,
                Some(bytes),
            )?
            .is_err()
        {
            return Err(Error::UserNameTaken);
        }

        self.db.flush()?;

        info!("User {} created", account.user_name);

        Ok(account)
    }

    /// Returns the account when the password matches. A missing user and a
    /// wrong password fail the same way.
    pub fn verify(&self, user_name: &str, password: &str) -> Result<Account> {
        let Some(account) = self.get(user_name)? else {
            return Err(Error::InvalidCredentials);
        };

        if bcrypt::verify(password, &account.password_hash)? {
            Ok(account)
        } else {
            Err(Error::InvalidCredentials)
        }
    }
}
