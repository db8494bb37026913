// src/session.rs

//! Result session state machine.
//!
//! One session backs one results screen. It owns the active mood, the
//! item list, the pagination cursor, the load/error status, and the
//! detail selection; the presentation layer reads accessors and issues
//! intents, nothing else.
//!
//! Fetches follow a split begin/apply protocol: `begin_mood` and
//! `begin_load_more` hand out a [`FetchTicket`], the driver runs the
//! fetch, and [`ResultSession::apply`] folds the outcome back in.
//! Every ticket carries a sequence number and `apply` honors only the
//! latest one, so when a new request starts before an old one lands
//! the old result is dropped (last-requested-wins). [`resolve_mood`]
//! and [`load_more`] bundle the three steps for single-driver callers
//! like the CLI.
//!
//! [`resolve_mood`]: ResultSession::resolve_mood
//! [`load_more`]: ResultSession::load_more

use std::sync::Arc;

use crate::error::Result;
use crate::models::{CatalogItem, FetchCursor};
use crate::moods::Mood;
use crate::services::CatalogClient;

/// Lifecycle phase of a results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No mood resolved yet.
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// The last fetch succeeded; items (possibly zero) are current.
    Loaded,
    /// The last fetch failed; the reason is recorded.
    Failed,
}

/// Handle for one issued fetch, redeemed through
/// [`ResultSession::apply`].
#[derive(Debug, Clone)]
pub struct FetchTicket {
    seq: u64,
    /// Mood the fetch is for.
    pub mood: Mood,
    /// Cursor position the fetch reads from.
    pub cursor: FetchCursor,
    /// Window size of the fetch; a successful apply advances the
    /// cursor by this much.
    pub page_size: u32,
}

/// Per-screen result state machine.
pub struct ResultSession {
    client: Arc<dyn CatalogClient>,
    mood: Option<Mood>,
    phase: SessionPhase,
    items: Vec<CatalogItem>,
    error: Option<String>,
    cursor: FetchCursor,
    selected: Option<CatalogItem>,
    next_seq: u64,
    pending: Option<u64>,
}

impl ResultSession {
    /// Create an idle session backed by the given catalog client.
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        let cursor = client.initial_cursor();
        Self {
            client,
            mood: None,
            phase: SessionPhase::Idle,
            items: Vec::new(),
            error: None,
            cursor,
            selected: None,
            next_seq: 0,
            pending: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    /// Items from the most recent successful fetch.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Reason the last fetch failed, while in [`SessionPhase::Failed`].
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Cursor the next fetch will read from.
    pub fn cursor(&self) -> FetchCursor {
        self.cursor
    }

    /// Item currently shown in the detail overlay.
    pub fn selected(&self) -> Option<&CatalogItem> {
        self.selected.as_ref()
    }

    /// Start resolving a mood key into results.
    ///
    /// Returns `None` with state untouched when the key is not in the
    /// catalog, or when the mood is already the active one (retrying a
    /// failed fetch goes through [`Self::begin_load_more`]). Otherwise
    /// the cursor resets to the provider's start, items, selection, and
    /// error are cleared, the phase enters `Loading`, and the ticket
    /// for the fetch comes back. Valid from any phase; a fetch already
    /// in flight is superseded.
    pub fn begin_mood(&mut self, key: &str) -> Option<FetchTicket> {
        let mood = Mood::from_key(key)?;
        if self.mood == Some(mood) {
            log::debug!("mood '{mood}' already active, ignoring re-select");
            return None;
        }

        self.mood = Some(mood);
        self.cursor = self.client.initial_cursor();
        self.items.clear();
        self.selected = None;
        self.error = None;
        self.phase = SessionPhase::Loading;
        Some(self.issue(mood))
    }

    /// Start fetching the next page for the active mood.
    ///
    /// Only valid from `Loaded` or `Failed`. The cursor does not move
    /// until the fetch succeeds, so from `Failed` this retries the
    /// page that just failed. Current items stay visible while the
    /// fetch runs.
    pub fn begin_load_more(&mut self) -> Option<FetchTicket> {
        let mood = self.mood?;
        if !matches!(self.phase, SessionPhase::Loaded | SessionPhase::Failed) {
            return None;
        }
        self.phase = SessionPhase::Loading;
        Some(self.issue(mood))
    }

    fn issue(&mut self, mood: Mood) -> FetchTicket {
        self.next_seq += 1;
        self.pending = Some(self.next_seq);
        FetchTicket {
            seq: self.next_seq,
            mood,
            cursor: self.cursor,
            page_size: self.client.page_size(),
        }
    }

    /// Fold a fetch outcome back into the session.
    ///
    /// Returns `false` with state untouched when the ticket is not the
    /// latest issued request: a newer fetch superseded it, or its
    /// outcome was already applied. On success items are replaced
    /// wholesale and the cursor advances by the ticket's page size; on
    /// failure items are cleared and the reason is recorded, with the
    /// cursor left where it was. Either way the selection is dropped.
    pub fn apply(&mut self, ticket: FetchTicket, outcome: Result<Vec<CatalogItem>>) -> bool {
        if self.pending != Some(ticket.seq) {
            log::debug!("dropping superseded fetch result for '{}'", ticket.mood);
            return false;
        }
        self.pending = None;
        self.selected = None;

        match outcome {
            Ok(items) => {
                log::debug!("fetch for '{}' landed with {} items", ticket.mood, items.len());
                self.items = items;
                self.error = None;
                self.cursor = ticket.cursor.advance(ticket.page_size);
                self.phase = SessionPhase::Loaded;
            }
            Err(e) => {
                log::warn!("fetch for '{}' failed: {e}", ticket.mood);
                self.items.clear();
                self.error = Some(e.to_string());
                self.phase = SessionPhase::Failed;
            }
        }
        true
    }

    /// Select the item with the given key for the detail overlay.
    ///
    /// Returns `false` when no current item has that key.
    pub fn select_item(&mut self, key: &str) -> bool {
        match self.items.iter().find(|item| item.key() == key) {
            Some(item) => {
                self.selected = Some(item.clone());
                true
            }
            None => false,
        }
    }

    /// Dismiss the detail overlay.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Resolve a mood end to end: begin, fetch, apply.
    ///
    /// Returns whether a fetch was issued; `false` means the key was
    /// unknown or the mood was already active. Fetch failures land in
    /// the `Failed` phase, not in the return value.
    pub async fn resolve_mood(&mut self, key: &str) -> bool {
        match self.begin_mood(key) {
            Some(ticket) => {
                self.run(ticket).await;
                true
            }
            None => false,
        }
    }

    /// Fetch the next page end to end: begin, fetch, apply.
    ///
    /// Returns whether a fetch was issued; `false` means no mood is
    /// active yet or a fetch is already in flight.
    pub async fn load_more(&mut self) -> bool {
        match self.begin_load_more() {
            Some(ticket) => {
                self.run(ticket).await;
                true
            }
            None => false,
        }
    }

    async fn run(&mut self, ticket: FetchTicket) {
        let client = Arc::clone(&self.client);
        let outcome = client.fetch(ticket.mood.entry(), ticket.cursor).await;
        self.apply(ticket, outcome);
    }
}
