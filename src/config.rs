//! Connection configuration.
//!
//! Credentials come from five environment variables. The same struct doubles
//! as a clap argument group so every value can also be given on the command
//! line.

use crate::error::{Error, Result};
use clap::Args;
use mysql_async::{Opts, OptsBuilder};
use std::fmt;

pub const DATABASE_IP: &str = "DATABASE_IP";
pub const DATABASE_PORT: &str = "DATABASE_PORT";
pub const DATABASE_USERNAME: &str = "DATABASE_USERNAME";
pub const DATABASE_PASSWORD: &str = "DATABASE_PASSWORD";
pub const DATABASE_DATABASE: &str = "DATABASE_DATABASE";

/// Where and as whom to connect.
#[derive(Args, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// MySQL server host name or IP address
    #[arg(long, env = DATABASE_IP)]
    pub host: String,

    /// MySQL server port
    #[arg(long, env = DATABASE_PORT)]
    pub port: u16,

    /// MySQL user name
    #[arg(long, env = DATABASE_USERNAME)]
    pub username: String,

    /// MySQL password
    #[arg(long, env = DATABASE_PASSWORD, hide_env_values = true)]
    pub password: String,

    /// Working database
    #[arg(long, env = DATABASE_DATABASE)]
    pub database: String,
}

impl ConnectionConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to
    /// its value. Unset and empty variables are both reported as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(Error::MissingVariable(name))
        };

        let host = require(DATABASE_IP)?;
        let port = require(DATABASE_PORT)?;
        let username = require(DATABASE_USERNAME)?;
        let password = require(DATABASE_PASSWORD)?;
        let database = require(DATABASE_DATABASE)?;

        let port = port.trim().parse().map_err(|_| Error::InvalidVariable {
            name: DATABASE_PORT,
            value: port.clone(),
        })?;

        Ok(Self {
            host,
            port,
            username,
            password,
            database,
        })
    }

    /// Driver options. When `select_database` is false the session starts
    /// without a default database, which is needed when the working database
    /// may not exist yet.
    pub fn opts(&self, select_database: bool) -> Opts {
        let builder = OptsBuilder::default()
            .ip_or_hostname(self.host.clone())
            .tcp_port(self.port)
            .user(Some(self.username.clone()))
            .pass(Some(self.password.clone()));

        if select_database {
            builder.db_name(Some(self.database.clone())).into()
        } else {
            builder.into()
        }
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

impl fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:***@{}:{}/{}",
            self.username, self.host, self.port, self.database
        )
    }
}
