//! Command-line driver for the passport API access layer.
//!
//! Connection settings come from `PASSPORT_*` environment variables; the
//! command line only selects the operation.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};

use clap::{Parser, Subcommand};
use ortho_config::OrthoConfig;
use passport_client::domain::TenantKey;
use passport_client::{ClientSettings, PassportClient};
use serde_json::Value;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `passport-cli` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "passport-cli",
    about = "Drive the digital product passport REST service",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that the configured admin key is accepted.
    AuthCheck,
    /// Typed GET; fails on non-2xx or undecodable JSON.
    Get {
        /// Resource path relative to the base URL.
        path: String,
    },
    /// Raw GET; prints the body whatever the status.
    GetRaw {
        /// Resource path relative to the base URL.
        path: String,
    },
    /// Tenant-scoped GET using a tenant key.
    TenantGet {
        /// Resource path relative to the base URL.
        path: String,
        /// Tenant key; falls back to `PASSPORT_TENANT_KEY` when omitted.
        #[arg(long = "tenant-key", value_name = "key")]
        tenant_key: Option<String>,
    },
    /// POST a JSON document.
    Post {
        /// Resource path relative to the base URL.
        path: String,
        /// JSON request body.
        body: String,
    },
    /// PUT a JSON document.
    Put {
        /// Resource path relative to the base URL.
        path: String,
        /// JSON request body.
        body: String,
    },
    /// DELETE a resource.
    Delete {
        /// Resource path relative to the base URL.
        path: String,
    },
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = ClientSettings::load_from_iter([OsString::from("passport-cli")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let client = PassportClient::from_settings(&settings).map_err(io::Error::other)?;

    let authenticated = match settings.admin_key() {
        Some(key) => client.authenticate(key).await,
        None => false,
    };

    let output = match args.command {
        Command::AuthCheck => {
            if !authenticated {
                return Err(io::Error::other("administrative key rejected or missing"));
            }
            "authenticated".to_owned()
        }
        Command::Get { path } => client
            .get_typed::<Value>(&path)
            .await
            .into_result()
            .and_then(|value| serde_json::to_string_pretty(&value).map_err(|e| e.to_string()))
            .map_err(io::Error::other)?,
        Command::GetRaw { path } => require_body(client.get_raw(&path).await)?,
        Command::TenantGet { path, tenant_key } => {
            let key = tenant_key
                .map(TenantKey::new)
                .or_else(|| settings.tenant_key())
                .ok_or_else(|| io::Error::other("no tenant key supplied"))?;
            require_body(client.get_with_tenant_key(&path, &key).await)?
        }
        Command::Post { path, body } => {
            let document = parse_body(&body)?;
            require_body(client.post_json(&path, &document).await)?
        }
        Command::Put { path, body } => {
            let document = parse_body(&body)?;
            require_body(client.put_json(&path, &document).await)?
        }
        Command::Delete { path } => require_body(client.delete_resource(&path).await)?,
    };

    client.logout().await;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")
}

fn parse_body(raw: &str) -> io::Result<Value> {
    serde_json::from_str(raw).map_err(|error| io::Error::other(format!("invalid JSON body: {error}")))
}

fn require_body(body: Option<String>) -> io::Result<String> {
    body.ok_or_else(|| io::Error::other("request did not complete; see logs for the transport error"))
}
