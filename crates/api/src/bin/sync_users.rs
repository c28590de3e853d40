//! `presence-sync-users` -- refresh the local user directory.
//!
//! # Environment variables
//!
//! | Variable           | Required | Default                  | Description                 |
//! |--------------------|----------|--------------------------|-----------------------------|
//! | `USERS_SOURCE_URL` | yes      | --                       | Intranet directory XML URL  |
//! | `USERS_XML`        | no       | `runtime/data/users.xml` | Where to store the document |

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use presence_api::users_sync::UserDirectorySync;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "presence_api=info,presence_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let source_url = std::env::var("USERS_SOURCE_URL").unwrap_or_else(|_| {
        tracing::error!("USERS_SOURCE_URL environment variable is required");
        std::process::exit(1);
    });

    let dest: PathBuf = std::env::var("USERS_XML")
        .unwrap_or_else(|_| "runtime/data/users.xml".into())
        .into();

    match UserDirectorySync::new()
        .update_user_names(&source_url, &dest)
        .await
    {
        Ok(count) => tracing::info!(count, dest = %dest.display(), "Sync complete"),
        Err(e) => {
            tracing::error!(error = %e, "User directory sync failed");
            std::process::exit(1);
        }
    }
}
