//! Opens external video links in the system browser.
//!
//! Fire-and-forget: the opener process is spawned and never waited on.

use crate::error::{AppError, Result};
use log::info;
use std::process::{Command, Stdio};
use url::Url;

/// Service for launching the platform URL opener.
pub struct LinkService;

impl LinkService {
    /// Creates a new link service.
    pub fn new() -> Self {
        Self
    }

    /// Validates `raw` and hands it to the system browser.
    pub fn open(&self, raw: &str) -> Result<()> {
        let url = Self::validate(raw)?;
        info!("Opening external link {}", url);

        Self::opener_command(&url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_child| ())
            .map_err(|e| AppError::LinkOpen(format!("{}: {}", url, e)))
    }

    /// Only absolute http(s) URLs are handed to the opener.
    fn validate(raw: &str) -> Result<Url> {
        let url = Url::parse(raw)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AppError::InvalidLink(format!(
                "unsupported scheme {} in {}",
                other, raw
            ))),
        }
    }

    #[cfg(target_os = "macos")]
    fn opener_command(url: &Url) -> Command {
        let mut command = Command::new("open");
        command.arg(url.as_str());
        command
    }

    #[cfg(target_os = "windows")]
    fn opener_command(url: &Url) -> Command {
        // the empty string is the window title expected by `start`
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url.as_str()]);
        command
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn opener_command(url: &Url) -> Command {
        let mut command = Command::new("xdg-open");
        command.arg(url.as_str());
        command
    }
}

impl Default for LinkService {
    fn default() -> Self {
        Self::new()
    }
}
