use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column::ColumnId;

pub type CardId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub column_id: ColumnId,
    pub title: String,
    pub description: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(
        column_id: ColumnId,
        title: String,
        description: Option<String>,
        position: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            column_id,
            title,
            description,
            position,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn move_to_column(&mut self, column_id: ColumnId, position: i32) {
        self.column_id = column_id;
        self.position = position;
        self.updated_at = Utc::now();
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_to_column() {
        let source = Uuid::new_v4();
        let target = Uuid::new_v4();
        let mut card = Card::new(source, "Ship it".to_string(), None, 3);

        card.move_to_column(target, 0);

        assert_eq!(card.column_id, target);
        assert_eq!(card.position, 0);
    }

    #[test]
    fn test_new_card_keeps_given_position() {
        let card = Card::new(Uuid::new_v4(), "Task".to_string(), Some("desc".into()), 5);
        assert_eq!(card.position, 5);
        assert_eq!(card.description.as_deref(), Some("desc"));
    }
}
