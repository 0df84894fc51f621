//! Interactive terminal session.
//!
//! The session owns the [`PhoneForm`] and is its only writer. It interleaves
//! lines typed by the user with the single result of the location suggester;
//! whichever arrives first wins, and a suggestion that arrives after the user
//! started typing is dropped by the form.

use crate::domain::ValidationError;
use crate::form::PhoneForm;
use crate::launcher::LinkOpener;
use crate::suggester::Suggestion;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::oneshot;
use tracing::{debug, error};

pub const HELP: &str = "\
Type the number in international format, e.g. +1 555 123 4567.
  <text>        append text to the number
  <empty line>  open the WhatsApp chat (same as :send)
  :set <text>   replace the number
  :clear        clear the number
  :show         show the current number
  :privacy      show the privacy notice
  :help         show this help
  :quit         exit";

pub const PRIVACY_NOTICE: &str = "\
Privacy notice
- No data storage: numbers you enter are only used to build a wa.me link and
  are never stored, tracked or shared.
- Not affiliated with WhatsApp: this is an independent tool.
- Geolocation (optional): only when enabled, your coordinates are sent to the
  configured reverse-geocoding service (OpenStreetMap Nominatim by default,
  see https://nominatim.org/privacy.html) to suggest your country's dial code.
  The location is not stored.";

/// What the caller should do after a line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Result of trying to open the chat for the current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The link was handed to the opener.
    Opened(String),
    /// The opener failed; the link is shown for manual use.
    OpenFailed(String),
    /// Validation failed and nothing was opened.
    Invalid(ValidationError),
}

pub struct Session<W: Write> {
    form: PhoneForm,
    opener: Arc<dyn LinkOpener>,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(opener: Arc<dyn LinkOpener>, out: W) -> Self {
        Self {
            form: PhoneForm::new(),
            opener,
            out,
        }
    }

    pub fn form(&self) -> &PhoneForm {
        &self.form
    }

    /// Mutable access to the form for one-shot use before the loop starts.
    pub fn form_mut(&mut self) -> &mut PhoneForm {
        &mut self.form
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Validate the input and, if valid, open the chat.
    pub fn send(&mut self) -> io::Result<SendOutcome> {
        let target = match self.form.submit() {
            Ok(target) => target,
            Err(e) => {
                writeln!(self.out, "Error: {}", e.message())?;
                return Ok(SendOutcome::Invalid(e));
            }
        };

        let url = target.whatsapp_url();
        match self.opener.open(&url) {
            Ok(()) => {
                if !self.opener.prints_link() {
                    writeln!(self.out, "Opening {}", url)?;
                }
                Ok(SendOutcome::Opened(url))
            }
            Err(e) => {
                error!("Failed to open {}: {}", url, e);
                writeln!(self.out, "Could not open the link, open it manually: {}", url)?;
                Ok(SendOutcome::OpenFailed(url))
            }
        }
    }

    /// Handle one line typed by the user.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed == ":send" {
            self.send()?;
            return Ok(Flow::Continue);
        }

        if let Some(command) = trimmed.strip_prefix(':') {
            let (name, arg) = command
                .split_once(char::is_whitespace)
                .map_or((command, ""), |(name, arg)| (name, arg.trim()));

            match name {
                "set" => {
                    self.form.set_input(arg);
                    self.show()?;
                }
                "clear" => {
                    self.form.clear();
                    self.show()?;
                }
                "show" => self.show()?,
                "privacy" => writeln!(self.out, "{}", PRIVACY_NOTICE)?,
                "help" => writeln!(self.out, "{}", HELP)?,
                "quit" | "q" | "exit" => return Ok(Flow::Quit),
                other => writeln!(self.out, "Unknown command :{} (try :help)", other)?,
            }
            return Ok(Flow::Continue);
        }

        self.form.append(line);
        Ok(Flow::Continue)
    }

    /// Offer a suggestion to the form; it is dropped if the user typed anything.
    pub fn offer_suggestion(&mut self, suggestion: &Suggestion) -> io::Result<bool> {
        if !self.form.apply_suggestion(suggestion) {
            debug!(
                "Dropping dial code suggestion {}, input already edited",
                suggestion.country.dial_code
            );
            return Ok(false);
        }

        writeln!(
            self.out,
            "Detected {} ({}). Number: {}",
            suggestion.country.name,
            suggestion.country.dial_code,
            self.form.input()
        )?;
        Ok(true)
    }

    fn show(&mut self) -> io::Result<()> {
        writeln!(self.out, "Number: {}", self.form.input())?;
        if let Some(e) = self.form.error() {
            writeln!(self.out, "Error: {}", e.message())?;
        }
        Ok(())
    }

    /// Run until the user quits or input ends.
    pub async fn run<R>(
        &mut self,
        input: R,
        mut suggestions: oneshot::Receiver<Suggestion>,
    ) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut suggestion_pending = true;

        loop {
            self.out.flush()?;
            tokio::select! {
                received = &mut suggestions, if suggestion_pending => {
                    suggestion_pending = false;
                    if let Ok(suggestion) = received {
                        self.offer_suggestion(&suggestion)?;
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if self.handle_line(&line)? == Flow::Quit {
                        break;
                    }
                }
            }
        }

        self.out.flush()
    }
}
