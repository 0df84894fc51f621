//! Handing deep links to the host environment.
//!
//! The system opener passes the URL to the platform's default URL handler as
//! a separate process. The handler starts a fresh browsing context: it has no
//! opener relationship with this process and receives no referrer.

use crate::error::{LaunchError, LaunchResult};
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Something that can open a URL for the user.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> LaunchResult<()>;

    /// Whether opening already shows the link to the user.
    fn prints_link(&self) -> bool {
        false
    }
}

/// Opens links with the operating system's URL handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    /// Program and arguments used to open `url` on this platform.
    pub fn command_for(url: &str) -> (&'static str, Vec<String>) {
        if cfg!(target_os = "macos") {
            ("open", vec![url.to_string()])
        } else if cfg!(target_os = "windows") {
            // The empty string is the window title `start` expects first.
            (
                "cmd",
                vec![
                    "/C".to_string(),
                    "start".to_string(),
                    String::new(),
                    url.to_string(),
                ],
            )
        } else {
            ("xdg-open", vec![url.to_string()])
        }
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> LaunchResult<()> {
        let (program, args) = Self::command_for(url);
        tracing::debug!("Opening {} with {}", url, program);

        let status = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(LaunchError::Failed {
                program: program.to_string(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

/// Prints links to stdout instead of opening them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintOpener;

impl LinkOpener for PrintOpener {
    fn open(&self, url: &str) -> LaunchResult<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", url)?;
        stdout.flush()?;
        Ok(())
    }

    fn prints_link(&self) -> bool {
        true
    }
}
