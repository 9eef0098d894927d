use std::sync::Arc;

use memoban_core::{MemobanError, MemobanResult};
use memoban_domain::{BoardId, Card, CardId, Column, ColumnId};
use memoban_remote::RemoteStore;
use uuid::Uuid;

use crate::position::append_position;
use crate::resolver::resolve_drop;
use crate::state::BoardState;

/// Owns the board snapshot and reconciles drag gestures and card edits
/// against the remote store.
///
/// Every mutation follows the same policy: one remote write, then a full
/// re-fetch that replaces local state. Nothing is mutated optimistically, so
/// a failed write leaves the board exactly as it was before the gesture.
pub struct BoardController {
    store: Arc<dyn RemoteStore>,
    state: BoardState,
    active_card: Option<Card>,
}

impl BoardController {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            state: BoardState::new(),
            active_card: None,
        }
    }

    /// Fetch the board's columns and cards, replacing any prior snapshot.
    pub async fn load(&mut self, board_id: BoardId) -> MemobanResult<()> {
        let columns = self.store.fetch_columns_with_cards(board_id).await?;
        self.state.replace(board_id, columns);
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        self.state.columns()
    }

    /// Card currently being dragged, for the drag overlay.
    pub fn active_card(&self) -> Option<&Card> {
        self.active_card.as_ref()
    }

    pub fn handle_drag_start(&mut self, card_id: CardId) {
        self.active_card = self.state.find_card(card_id).cloned();
    }

    /// Complete a drag gesture.
    ///
    /// `over_id` is the identifier under the pointer at release: a column id,
    /// a card id, or `None` when the gesture ended outside every drop zone.
    /// Unresolvable or same-column drops are no-ops; a cross-column drop
    /// issues exactly one location update followed by a re-fetch.
    pub async fn handle_drag_end(
        &mut self,
        active_id: CardId,
        over_id: Option<Uuid>,
    ) -> MemobanResult<()> {
        self.active_card = None;

        let Some(over_id) = over_id else {
            tracing::debug!(%active_id, "drag ended outside any drop target");
            return Ok(());
        };

        let resolved = match resolve_drop(self.state.columns(), active_id, over_id) {
            Some(resolved) => resolved,
            None => {
                tracing::debug!(%active_id, %over_id, "drop target did not resolve");
                return Ok(());
            }
        };

        if resolved.source.id == resolved.target.id {
            tracing::debug!(column_id = %resolved.source.id, "card dropped in its own column");
            return Ok(());
        }

        let card_id = resolved.card.id;
        let target_id = resolved.target.id;
        let new_position = append_position(resolved.target);

        tracing::debug!(%card_id, %target_id, new_position, "moving card across columns");
        self.store
            .update_card_location(card_id, target_id, new_position)
            .await?;
        self.refresh().await
    }

    /// Add a card at the end of `column_id`. Blank titles are ignored.
    pub async fn add_card(
        &mut self,
        column_id: ColumnId,
        title: &str,
        description: &str,
    ) -> MemobanResult<()> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(());
        }
        let column = self
            .state
            .find_column(column_id)
            .ok_or_else(|| MemobanError::NotFound(format!("column {column_id}")))?;
        let position = append_position(column);
        let description = non_empty(description);

        self.store
            .create_card(column_id, title.to_string(), description, position)
            .await?;
        self.refresh().await
    }

    /// Update a card's title and description. Blank titles are ignored.
    pub async fn edit_card(
        &mut self,
        card_id: CardId,
        title: &str,
        description: &str,
    ) -> MemobanResult<()> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(());
        }
        self.store
            .update_card(card_id, title.to_string(), non_empty(description))
            .await?;
        self.refresh().await
    }

    pub async fn delete_card(&mut self, card_id: CardId) -> MemobanResult<()> {
        self.store.delete_card(card_id).await?;
        self.refresh().await
    }

    /// Add a column at the end of the board. Blank titles are ignored.
    pub async fn add_column(&mut self, title: &str) -> MemobanResult<()> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(());
        }
        let board_id = self
            .state
            .board_id()
            .ok_or_else(|| MemobanError::Internal("no board loaded".to_string()))?;
        let position = self.state.columns().len() as i32;

        self.store
            .create_column(board_id, title.to_string(), position)
            .await?;
        self.refresh().await
    }

    pub async fn rename_column(&mut self, column_id: ColumnId, title: &str) -> MemobanResult<()> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(());
        }
        self.store.rename_column(column_id, title.to_string()).await?;
        self.refresh().await
    }

    pub async fn remove_column(&mut self, column_id: ColumnId) -> MemobanResult<()> {
        self.store.delete_column(column_id).await?;
        self.refresh().await
    }

    async fn refresh(&mut self) -> MemobanResult<()> {
        let Some(board_id) = self.state.board_id() else {
            return Ok(());
        };
        self.load(board_id).await
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
