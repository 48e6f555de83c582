//! Docker container management for MySQL testing

use crate::config::ConnectionConfig;
use crate::connect::connect_server;
use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, info};

const ROOT_PASSWORD: &str = "testpass";

/// Configuration for a test MySQL container
pub struct MySQLContainer {
    /// Container name
    pub container_name: String,
    /// Host port to bind to
    pub host_port: u16,
    /// Image name (uses official mysql image)
    pub image_name: String,
    /// Database created at startup
    pub database: String,
}

impl MySQLContainer {
    /// Creates a new MySQL container configuration
    pub fn new(container_name: &str, host_port: u16) -> Self {
        Self {
            container_name: container_name.to_string(),
            host_port,
            image_name: "mysql:8.0".to_string(),
            database: "testdb".to_string(),
        }
    }

    /// Connection settings for the container's root user
    pub fn config(&self) -> ConnectionConfig {
        ConnectionConfig {
            host: "127.0.0.1".to_string(),
            port: self.host_port,
            username: "root".to_string(),
            password: ROOT_PASSWORD.to_string(),
            database: self.database.clone(),
        }
    }

    /// Starts the MySQL container
    pub fn start(&self) -> Result<()> {
        info!("Starting MySQL container: {}", self.container_name);

        // Remove any leftover container with the same name
        self.remove();

        let output = Command::new("docker")
            .args([
                "run",
                "--name",
                &self.container_name,
                "-e",
                &format!("MYSQL_ROOT_PASSWORD={ROOT_PASSWORD}"),
                "-e",
                &format!("MYSQL_DATABASE={}", self.database),
                "-p",
                &format!("{}:3306", self.host_port),
                "-d",
                &self.image_name,
            ])
            .output()
            .context("Failed to start Docker container")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Failed to start container: {stderr}");
        }

        let container_id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        info!("Started container: {}", container_id);

        Ok(())
    }

    /// Waits for MySQL to be ready to accept connections
    pub async fn wait_until_ready(&self, timeout_secs: u64) -> Result<()> {
        info!("Waiting for MySQL to be ready...");

        let start = Instant::now();
        let timeout = Duration::from_secs(timeout_secs);

        while start.elapsed() < timeout {
            match connect_server(&self.config()).await {
                Ok(conn) => {
                    conn.close().await.context("Failed to disconnect")?;
                    info!("MySQL is ready!");
                    return Ok(());
                }
                Err(e) => {
                    debug!("Connection attempt failed: {}", e);
                    tokio::time::sleep(Duration::from_millis(1000)).await;
                }
            }
        }

        anyhow::bail!("MySQL did not become ready within {timeout_secs} seconds")
    }

    /// Stops and removes the container
    pub fn stop(&self) {
        info!("Stopping container: {}", self.container_name);
        self.remove();
        info!("Container stopped and removed");
    }

    fn remove(&self) {
        for action in ["stop", "rm"] {
            let status = Command::new("docker")
                .args([action, &self.container_name])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
            if !matches!(status, Ok(s) if s.success()) {
                debug!("docker {action} {} failed (may not exist)", self.container_name);
            }
        }
    }
}

impl Drop for MySQLContainer {
    fn drop(&mut self) {
        // Best effort cleanup
        self.stop();
    }
}
