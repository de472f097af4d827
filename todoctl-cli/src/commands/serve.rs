//! HTTP server command
//!
//! Runs the todo API and serves the embedded frontend.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::db::MemoryTodoStore;
use todoctl_server::http::{run_server, AppState, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "TODOCTL_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep todos in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub ephemeral: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();

    let state = if args.ephemeral {
        if args.database.database_url.is_some() {
            tracing::warn!("--ephemeral set, ignoring DATABASE_URL");
        }
        tracing::warn!("Using in-memory store; todos are lost on exit");
        AppState::new(MemoryTodoStore::new())
    } else {
        AppState::new(args.database.connect_store().await?)
    };

    tracing::info!("Starting todoctl server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use todoctl_server::db::pool::DEFAULT_MAX_CONNECTIONS;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn flags_build_bind_address() {
        let wrapper = Wrapper::parse_from(["todoctl", "--host", "0.0.0.0", "--port", "8080"]);
        let config = wrapper.serve.server_config();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert!(!config.cors_permissive);
    }

    #[test]
    fn pool_cap_defaults_to_library_constant() {
        let wrapper = Wrapper::parse_from(["todoctl", "--max-connections", "2"]);
        assert_eq!(wrapper.serve.database.max_connections, 2);

        let arg = Wrapper::command()
            .get_arguments()
            .find(|a| a.get_id() == "max_connections")
            .map(|a| {
                a.get_default_values()
                    .iter()
                    .map(|v| v.to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
            })
            .unwrap();
        assert_eq!(arg, [DEFAULT_MAX_CONNECTIONS.to_string()]);
    }

    #[test]
    fn host_reads_namespaced_env_var() {
        let env = Wrapper::command()
            .get_arguments()
            .find(|a| a.get_id() == "host")
            .and_then(|a| a.get_env().map(|e| e.to_os_string()))
            .unwrap();
        assert_eq!(env, "TODOCTL_HOST");
    }
}
