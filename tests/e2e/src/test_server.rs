use anyhow::{Context, Result};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

/// A `web` server process on a free local port, killed on drop.
pub struct TestServer {
    url: String,
    process: Option<Child>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let port = free_port()?;

        let process = Command::new("cargo")
            .args(["run", "--package", "web", "--features", "server"])
            .env("APP_MODE", "production")
            .env("CONTACT_DELAY_MS", "0")
            .env("PORT", port.to_string())
            .env("IP", "127.0.0.1")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("spawning web server")?;

        let server = Self {
            url: format!("http://localhost:{port}"),
            process: Some(process),
        };
        server.wait_until_ready().await?;
        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Absolute URL for a path (with optional query) on this server.
    pub fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.url)
    }

    async fn wait_until_ready(&self) -> Result<()> {
        // Compilation happens on first start, so allow a generous window.
        for attempt in 0..600 {
            if let Ok(response) = reqwest::get(&self.url).await {
                if response.status().is_success() {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;

            if attempt > 0 && attempt % 50 == 0 {
                eprintln!("Still waiting for server... ({}s)", attempt / 10);
            }
        }
        anyhow::bail!("Server did not start in time (waited 60s)")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
        }
    }
}

fn free_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}
