use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::presenters::Presenter;
use crate::renderer::RenderPayload;

pub const LOADING_TEXT: &str = "Searching for recommendations...";

const CARD_CLASS: &str = r#"class="recommendation-card""#;
const ANIMATED_CARD_CLASS: &str = r#"class="recommendation-card animate""#;

/// Render a payload as the HTML fragment placed in the results panel.
pub fn render_html(payload: &RenderPayload) -> String {
    let mut html = String::new();

    match payload {
        RenderPayload::Results { time, cards } => {
            if let Some(time) = time {
                html.push_str(&format!(
                    concat!(
                        r#"<div class="time-display">"#,
                        r#"<div class="location">Current time in {}</div>"#,
                        r#"<div class="current-time">{}</div>"#,
                        "</div>\n"
                    ),
                    encode_text(&time.location),
                    encode_text(&time.time),
                ));
            }

            for (index, card) in cards.iter().enumerate() {
                html.push_str(&format!(
                    concat!(
                        r#"<div {} data-index="{}">"#,
                        r#"<img src="{}" alt="{}" class="card-image">"#,
                        r#"<div class="card-content">"#,
                        r#"<div class="card-title">{}</div>"#,
                        r#"<div class="card-description">{}</div>"#,
                        r#"<button class="card-button" data-visit="{}">Visit</button>"#,
                        "</div></div>\n"
                    ),
                    CARD_CLASS,
                    index,
                    encode_double_quoted_attribute(&card.image_url),
                    encode_double_quoted_attribute(&card.name),
                    encode_text(&card.name),
                    encode_text(&card.description),
                    card.visit.id,
                ));
            }
        }
        RenderPayload::Empty { message } => {
            html.push_str(&format!(
                "<div class=\"empty-state\">{}</div>\n",
                encode_text(message)
            ));
        }
        RenderPayload::Failed { message } => html.push_str(&error_html(message)),
    }

    html
}

fn loading_html() -> String {
    format!(
        "<div class=\"loading\"><div class=\"spinner\"></div>{}</div>\n",
        LOADING_TEXT
    )
}

fn error_html(message: &str) -> String {
    format!(
        "<div class=\"error-state\">{}</div>\n",
        encode_text(message)
    )
}

/// Keeps the results panel as an HTML fragment plus its visibility flag.
#[derive(Debug, Default)]
pub struct HtmlPresenter {
    content: Mutex<String>,
    shown: AtomicBool,
    navigated_to: Mutex<Option<String>>,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of the results panel.
    pub fn content(&self) -> String {
        self.lock_content().clone()
    }

    pub fn is_shown(&self) -> bool {
        self.shown.load(Ordering::SeqCst)
    }

    pub fn navigated_to(&self) -> Option<String> {
        match self.navigated_to.lock() {
            Ok(target) => target.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn lock_content(&self) -> std::sync::MutexGuard<'_, String> {
        match self.content.lock() {
            Ok(content) => content,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn replace(&self, html: String) {
        *self.lock_content() = html;
        self.shown.store(true, Ordering::SeqCst);
    }
}

impl Presenter for HtmlPresenter {
    fn show_loading(&self) {
        self.replace(loading_html());
    }

    fn render(&self, payload: &RenderPayload) {
        self.replace(render_html(payload));
    }

    fn show_error(&self, message: &str) {
        // Visibility stays as the loading state left it.
        *self.lock_content() = error_html(message);
    }

    fn close(&self) {
        self.shown.store(false, Ordering::SeqCst);
    }

    fn animate_cards(&self, _count: usize) {
        let mut content = self.lock_content();
        *content = content.replace(CARD_CLASS, ANIMATED_CARD_CLASS);
    }

    fn navigate(&self, target: &str) {
        match self.navigated_to.lock() {
            Ok(mut slot) => *slot = Some(target.to_string()),
            Err(poisoned) => *poisoned.into_inner() = Some(target.to_string()),
        }
    }
}
