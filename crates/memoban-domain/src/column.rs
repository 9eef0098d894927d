use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{board::BoardId, card::Card};

pub type ColumnId = Uuid;

/// A column and its cards, as returned by the columns-with-cards join.
///
/// `cards` is kept sorted by `position` ascending whenever the column is
/// read back from the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub board_id: BoardId,
    pub title: String,
    pub position: i32,
    #[serde(default)]
    pub cards: Vec<Card>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Column {
    pub fn new(board_id: BoardId, title: String, position: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            title,
            position,
            cards: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn update_position(&mut self, position: i32) {
        self.position = position;
        self.updated_at = Utc::now();
    }

    pub fn sort_cards(&mut self) {
        self.cards.sort_by_key(|card| card.position);
    }

    pub fn contains_card(&self, card_id: Uuid) -> bool {
        self.cards.iter().any(|card| card.id == card_id)
    }
}
