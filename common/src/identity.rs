use serde::{Deserialize, Serialize};

/// The caller a request is made on behalf of.
///
/// Anonymous callers carry an empty user name, which never matches the owner
/// of a seeded character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_name: String,
    pub authenticated: bool,
}

impl Identity {
    pub fn anonymous() -> Self {
        Identity::default()
    }

    pub fn user<S: Into<String>>(user_name: S) -> Self {
        Identity {
            user_name: user_name.into(),
            authenticated: true,
        }
    }
}
