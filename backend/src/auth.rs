use axum::{Json, extract::State};
use axum_extra::extract::cookie::SignedCookieJar;
use common::account::{AccountStore, SignUp};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, instrument};

use crate::{error::AppError, session};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Login {
    pub user_name: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedIn {
    pub user_name: String,
}

#[instrument(skip_all, fields(user_name = %payload.user_name))]
pub async fn sign_up(
    State(accounts): State<AccountStore>,
    jar: SignedCookieJar,
    Json(payload): Json<SignUp>,
) -> Result<(SignedCookieJar, Json<SignedIn>), AppError> {
    // Hashing blocks for the whole bcrypt cost, run it off the async workers.
    let account = tokio::task::spawn_blocking(move || accounts.create(payload)).await??;

    let jar = session::sign_in(jar, account.user_name.as_str())?;

    Ok((
        jar,
        Json(SignedIn {
            user_name: account.user_name,
        }),
    ))
}

#[instrument(skip_all, fields(user_name = %payload.user_name))]
pub async fn login(
    State(accounts): State<AccountStore>,
    jar: SignedCookieJar,
    Json(payload): Json<Login>,
) -> Result<(SignedCookieJar, Json<SignedIn>), AppError> {
    let account =
        tokio::task::spawn_blocking(move || accounts.verify(&payload.user_name, &payload.password))
            .await??;

    let jar = session::sign_in(jar, account.user_name.as_str())?;

    info!("User {} logged in", account.user_name);

    Ok((
        jar,
        Json(SignedIn {
            user_name: account.user_name,
        }),
    ))
}

#[instrument(skip_all)]
pub async fn logout(jar: SignedCookieJar) -> Result<(SignedCookieJar, Json<Value>), AppError> {
    let identity = session::identity_from_jar(&jar).unwrap_or_default();

    let jar = session::sign_out(jar)?;

    if identity.authenticated {
        info!("User {} logged out", identity.user_name);
    }

    Ok((jar, Json(json!({ "status": "OK" }))))
}
