//! Host navigation seam: opening a URL in an independent browsing context.
//!
//! The core decides *what* to open; the host decides *how*.

/// Opens URLs outside the application (browser tab, external player, …).
pub trait Navigator {
    fn open(&self, url: &str) -> anyhow::Result<()>;
}

/// Records every URL it is asked to open.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    opened: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn open(&self, url: &str) -> anyhow::Result<()> {
        self.opened
            .lock()
            .map_err(|_| anyhow::anyhow!("navigator lock poisoned"))?
            .push(url.to_string());
        Ok(())
    }
}
