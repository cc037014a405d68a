//! CommandNavigator — opens URLs by spawning the configured command
//! (`xdg-open`, `open`, … or whatever `[navigator] command` names).

use std::process::Stdio;

use anyhow::Context;
use tracing::{debug, info, warn};
use tv_core::navigator::Navigator;

pub struct CommandNavigator {
    program: String,
    args: Vec<String>,
}

impl CommandNavigator {
    /// Build from a command line; the URL is appended as the last argument.
    pub fn new(command_line: Vec<String>) -> anyhow::Result<Self> {
        let mut parts = command_line.into_iter();
        let program = parts.next().context("navigator command is empty")?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl Navigator for CommandNavigator {
    fn open(&self, url: &str) -> anyhow::Result<()> {
        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to run {}", self.program))?;
        info!("navigator: spawned {} (pid {:?}) for {}", self.program, child.id(), url);

        // Reap the child so it does not linger as a zombie.
        let program = self.program.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => debug!("navigator: {} exited", program),
                Ok(status) => warn!("navigator: {} exited with {}", program, status),
                Err(e) => warn!("navigator: waiting on {} failed: {}", program, e),
            }
        });
        Ok(())
    }
}
