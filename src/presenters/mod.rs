mod html;
mod terminal;

pub use html::{render_html, HtmlPresenter, LOADING_TEXT};
pub use terminal::{OutputStyle, TerminalPresenter};

use crate::renderer::RenderPayload;

/// Presentation boundary the search pipeline drives.
///
/// Implementations own whatever the results end up in (a terminal, an HTML
/// fragment, a test recorder); the pipeline never touches them directly.
pub trait Presenter: Send + Sync {
    /// Show the loading indicator and make the results panel visible.
    fn show_loading(&self);

    /// Replace the panel content with `payload` and keep the panel visible.
    fn render(&self, payload: &RenderPayload);

    /// Replace the panel content with a failure message.
    fn show_error(&self, message: &str);

    /// Hide the results panel.
    fn close(&self);

    /// Start the entrance animation of the `count` rendered cards.
    fn animate_cards(&self, _count: usize) {}

    /// Empty the search input and give it focus again.
    fn clear_input(&self) {}

    /// Leave the page for `target`.
    fn navigate(&self, _target: &str) {}
}
