use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::{debug, error, info};
use tokio::time::sleep;

use crate::classifier::classify;
use crate::config::SearchConfig;
use crate::fetchers::DatasetSource;
use crate::panel::{DismissSignal, ResultsPanel};
use crate::presenters::Presenter;
use crate::renderer::{render, render_failure, RenderPayload, VisitAction};

/// What became of one submitted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The term was blank; nothing was fetched.
    Ignored,
    /// The payload was handed to the presenter.
    Rendered(RenderPayload),
    /// A newer search was submitted before this one finished; its result was dropped.
    Superseded,
}

/// Drives one results panel: submit, fetch, classify, render.
///
/// Each submit takes the next sequence number. A search only reaches the
/// presenter if no newer search was submitted while its fetch was in flight.
pub struct SearchPipeline<S, P> {
    source: S,
    presenter: P,
    panel: ResultsPanel,
    latest: AtomicU64,
    card_animation_delay: Duration,
    visit_target: String,
}

impl<S: DatasetSource, P: Presenter> SearchPipeline<S, P> {
    pub fn new(source: S, presenter: P) -> Self {
        Self::with_config(source, presenter, &SearchConfig::default())
    }

    pub fn with_config(source: S, presenter: P, config: &SearchConfig) -> Self {
        Self {
            source,
            presenter,
            panel: ResultsPanel::new(),
            latest: AtomicU64::new(0),
            card_animation_delay: config.card_animation_delay(),
            visit_target: config.visit_target.clone(),
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn panel(&self) -> &ResultsPanel {
        &self.panel
    }

    /// Run a search for `search_term` and push the result to the presenter.
    ///
    /// Fetch failures are logged and shown as the generic failure payload.
    pub async fn submit(&self, search_term: &str) -> SearchOutcome {
        let term = search_term.trim();
        if term.is_empty() {
            return SearchOutcome::Ignored;
        }

        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Search #{} for '{}'", seq, term);

        self.panel.show();
        self.presenter.show_loading();

        let result = self.source.fetch_dataset().await;
        if !self.is_current(seq) {
            debug!("Dropping result of search #{}: superseded", seq);
            return SearchOutcome::Superseded;
        }

        let payload = match result {
            Ok(dataset) => {
                let category = classify(term);
                debug!("'{}' classified as {:?}", term, category);
                render(category, &dataset, term)
            }
            Err(e) => {
                error!("There was a problem with the fetch operation: {}", e);
                render_failure()
            }
        };

        match &payload {
            RenderPayload::Failed { message } => self.presenter.show_error(message),
            _ => {
                self.presenter.render(&payload);
                self.panel.show();
            }
        }

        let card_count = payload.cards().len();
        if card_count > 0 {
            sleep(self.card_animation_delay).await;
            if self.is_current(seq) {
                self.presenter.animate_cards(card_count);
            }
        }

        SearchOutcome::Rendered(payload)
    }

    /// Close the panel if `signal` calls for it. Returns whether it closed.
    pub fn dismiss(&self, signal: DismissSignal) -> bool {
        if !self.panel.should_dismiss(signal) {
            return false;
        }

        if signal == DismissSignal::Clear {
            self.presenter.clear_input();
        }
        self.panel.hide();
        self.presenter.close();
        true
    }

    pub fn visit(&self, action: VisitAction) {
        info!("Visiting recommendation with ID: {}", action.id);
        self.presenter.navigate(&self.visit_target);
    }

    pub fn book_now(&self) {
        self.presenter.navigate(&self.visit_target);
    }

    fn is_current(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }
}
