use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLBatchRequest, GraphQLResponse};
use axum::{
    Router,
    extract::{FromRef, State},
    http::{HeaderValue, Method, header},
    response::Html,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Key, SignedCookieJar};
use common::{Directory, Error, Identity, account::AccountStore};
use schema::GameSchema;
use tower_http::cors::CorsLayer;
use tracing::warn;

pub mod auth;
pub mod config;
pub mod error;
pub mod schema;
pub mod session;

pub use error::AppError;

#[derive(Clone)]
pub struct AppState {
    accounts: AccountStore,
    schema: GameSchema,
    key: Key,
}

impl AppState {
    pub fn new(directory: Directory, accounts: AccountStore, key: Key) -> AppState {
        AppState {
            accounts,
            schema: schema::build(directory),
            key,
        }
    }
}

impl FromRef<AppState> for AccountStore {
    fn from_ref(state: &AppState) -> Self {
        state.accounts.clone()
    }
}

impl FromRef<AppState> for GameSchema {
    fn from_ref(state: &AppState) -> Self {
        state.schema.clone()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

pub fn app(state: AppState, allowed_origin: &str) -> Result<Router, AppError> {
    // Credentialed CORS needs an exact origin.
    if allowed_origin.trim() == "*" {
        return Err(Error::InvalidOrigin.into());
    }

    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_str(allowed_origin)?)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Router::new()
        .route("/", get(graphiql))
        .route("/graphiql", get(graphiql))
        .route("/graphql", post(graphql))
        .route("/auth/signup", post(auth::sign_up))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .layer(cors)
        .with_state(state))
}

async fn graphql(
    State(schema): State<GameSchema>,
    jar: SignedCookieJar,
    request: GraphQLBatchRequest,
) -> GraphQLResponse {
    let identity = session::identity_from_jar(&jar).unwrap_or_else(|err| {
        warn!("Serving request as anonymous: {err}");
        Identity::anonymous()
    });

    schema
        .execute_batch(request.into_inner().data(identity))
        .await
        .into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
