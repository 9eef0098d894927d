use memoban_domain::{BoardId, Card, CardId, Column, ColumnId};

/// Last-fetched snapshot of the selected board's columns and cards.
///
/// The only mutation path is [`BoardState::replace`], which swaps in a whole
/// fetched snapshot; there is no partial patching, so the local view always
/// matches some full read of the remote source of truth.
#[derive(Debug, Default)]
pub struct BoardState {
    board_id: Option<BoardId>,
    columns: Vec<Column>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board_id(&self) -> Option<BoardId> {
        self.board_id
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Replace the snapshot, normalizing ordering: columns by position
    /// ascending, each column's cards by position ascending.
    pub fn replace(&mut self, board_id: BoardId, mut columns: Vec<Column>) {
        columns.sort_by_key(|column| column.position);
        for column in &mut columns {
            column.sort_cards();
        }
        self.board_id = Some(board_id);
        self.columns = columns;
    }

    pub fn find_card(&self, card_id: CardId) -> Option<&Card> {
        self.columns
            .iter()
            .flat_map(|column| column.cards.iter())
            .find(|card| card.id == card_id)
    }

    pub fn find_column(&self, column_id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }
}
