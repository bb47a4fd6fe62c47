use std::sync::Arc;

use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;

use tressa_client::ClientConfig;
use tressa_client::common::messages::SessionEventBus;
use tressa_client::domains::user::UserStore;
use tressa_client::infrastructure::ApiClient;
use tressa_client::infrastructure::services::{
    AuthApiAdapter, AuthService, LogErrorReporter, UsersApiAdapter,
};
use tressa_model::LoginCredentials;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("tressa_client", LevelFilter::Debug)
        .init();
}

/// Signs in (when `TRESSA_USERNAME`/`TRESSA_PASSWORD` are set), loads the
/// current user, prints the profile, then signs out again.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = ClientConfig::from_environment();
    let client = Arc::new(ApiClient::new(&config).context("building API client")?);
    let bus = SessionEventBus::new();

    let auth = Arc::new(AuthApiAdapter::new(Arc::clone(&client), bus.clone()));
    let store = Arc::new(UserStore::new(
        Arc::new(UsersApiAdapter::new(Arc::clone(&client))),
        auth.clone(),
        Arc::new(LogErrorReporter),
    ));
    let listener = store.spawn_session_listener(&bus);

    if let (Ok(username), Ok(password)) = (
        std::env::var("TRESSA_USERNAME"),
        std::env::var("TRESSA_PASSWORD"),
    ) {
        auth.login(LoginCredentials::new(username, password))
            .await
            .context("signing in")?;
    }

    store.fetch_self().await;
    println!("status: {}", store.status());
    println!(
        "profile: {}",
        serde_json::to_string_pretty(&store.profile()).context("rendering profile")?
    );

    let mut changes = store.subscribe();
    auth.logout().await.context("signing out")?;
    changes
        .wait_for(|state| state.profile.is_empty())
        .await
        .context("waiting for the session listener")?;
    listener.abort();

    Ok(())
}
