use std::io::{self, Write};
use std::sync::Mutex;

use log::warn;

use crate::presenters::{Presenter, LOADING_TEXT};
use crate::renderer::RenderPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Text,
    Json,
}

/// Writes results to a terminal (or any writer) as text or JSON lines.
pub struct TerminalPresenter<W: Write + Send> {
    out: Mutex<W>,
    style: OutputStyle,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout(style: OutputStyle) -> Self {
        Self::new(io::stdout(), style)
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W, style: OutputStyle) -> Self {
        Self {
            out: Mutex::new(out),
            style,
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn emit(&self, text: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            warn!("Failed to write output: {}", e);
        }
    }

    fn format_text(payload: &RenderPayload) -> String {
        let mut text = String::new();
        match payload {
            RenderPayload::Results { time, cards } => {
                if let Some(time) = time {
                    text.push_str(&format!(
                        "Current time in {}: {}\n\n",
                        time.location, time.time
                    ));
                }
                for card in cards {
                    text.push_str(&format!(
                        "[{}] {}\n    {}\n    {}\n",
                        card.id, card.name, card.description, card.image_url
                    ));
                }
            }
            RenderPayload::Empty { message } | RenderPayload::Failed { message } => {
                text.push_str(message);
            }
        }
        text.trim_end().to_string()
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn show_loading(&self) {
        if self.style == OutputStyle::Text {
            self.emit(LOADING_TEXT);
        }
    }

    fn render(&self, payload: &RenderPayload) {
        match self.style {
            OutputStyle::Text => self.emit(&Self::format_text(payload)),
            OutputStyle::Json => match serde_json::to_string(payload) {
                Ok(json) => self.emit(&json),
                Err(e) => warn!("Failed to serialize payload: {}", e),
            },
        }
    }

    fn show_error(&self, message: &str) {
        match self.style {
            OutputStyle::Text => self.emit(message),
            OutputStyle::Json => self.render(&RenderPayload::Failed {
                message: message.to_string(),
            }),
        }
    }

    fn close(&self) {}

    fn navigate(&self, target: &str) {
        if self.style == OutputStyle::Text {
            self.emit(&format!("Opening {}", target));
        }
    }
}
