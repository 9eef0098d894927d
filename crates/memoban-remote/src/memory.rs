use async_trait::async_trait;
use memoban_core::{MemobanError, MemobanResult};
use memoban_domain::{
    Board, BoardId, BoardUpdate, Card, CardId, Column, ColumnId, Memo, MemoId, MemoTag, Tag,
    TagId, TagUpdate,
};
use tokio::sync::RwLock;

use crate::traits::RemoteStore;

#[derive(Default)]
struct Tables {
    boards: Vec<Board>,
    columns: Vec<Column>,
    cards: Vec<Card>,
    memos: Vec<Memo>,
    memo_tags: Vec<MemoTag>,
    tags: Vec<Tag>,
}

/// In-memory implementation of [`RemoteStore`].
///
/// Mirrors the hosted service's row semantics (position ordering, join
/// hydration, cascading deletes) so the application layer can be exercised
/// without a network. Column rows are stored with empty `cards`; the join is
/// materialized on read.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RemoteStore for InMemoryStore {
    async fn fetch_boards(&self) -> MemobanResult<Vec<Board>> {
        let tables = self.tables.read().await;
        let mut boards = tables.boards.clone();
        boards.sort_by_key(|board| board.position);
        Ok(boards)
    }

    async fn create_board(
        &self,
        title: String,
        color: String,
        icon: String,
    ) -> MemobanResult<Board> {
        let mut tables = self.tables.write().await;
        let position = tables
            .boards
            .iter()
            .map(|board| board.position + 1)
            .max()
            .unwrap_or(0);
        let board = Board::new(title, color, icon, position);
        tracing::debug!(board_id = %board.id, position, "created board");
        tables.boards.push(board.clone());
        Ok(board)
    }

    async fn update_board(&self, id: BoardId, update: BoardUpdate) -> MemobanResult<()> {
        let mut tables = self.tables.write().await;
        let board = tables
            .boards
            .iter_mut()
            .find(|board| board.id == id)
            .ok_or_else(|| MemobanError::NotFound(format!("board {id}")))?;
        if let Some(title) = update.title {
            board.update_title(title);
        }
        if let Some(color) = update.color {
            board.update_color(color);
        }
        if let Some(icon) = update.icon {
            board.update_icon(icon);
        }
        Ok(())
    }

    async fn delete_board(&self, id: BoardId) -> MemobanResult<()> {
        let mut tables = self.tables.write().await;
        tables.boards.retain(|board| board.id != id);
        let orphaned: Vec<ColumnId> = tables
            .columns
            .iter()
            .filter(|column| column.board_id == id)
            .map(|column| column.id)
            .collect();
        tables.columns.retain(|column| column.board_id != id);
        tables
            .cards
            .retain(|card| !orphaned.contains(&card.column_id));
        Ok(())
    }

    async fn fetch_columns_with_cards(&self, board_id: BoardId) -> MemobanResult<Vec<Column>> {
        let tables = self.tables.read().await;
        let mut columns: Vec<Column> = tables
            .columns
            .iter()
            .filter(|column| column.board_id == board_id)
            .cloned()
            .collect();
        columns.sort_by_key(|column| column.position);
        for column in &mut columns {
            column.cards = tables
                .cards
                .iter()
                .filter(|card| card.column_id == column.id)
                .cloned()
                .collect();
            column.sort_cards();
        }
        Ok(columns)
    }

    async fn create_column(
        &self,
        board_id: BoardId,
        title: String,
        position: i32,
    ) -> MemobanResult<Column> {
        let mut tables = self.tables.write().await;
        if !tables.boards.iter().any(|board| board.id == board_id) {
            return Err(MemobanError::NotFound(format!("board {board_id}")));
        }
        let column = Column::new(board_id, title, position);
        tables.columns.push(column.clone());
        Ok(column)
    }

    async fn rename_column(&self, id: ColumnId, title: String) -> MemobanResult<()> {
        let mut tables = self.tables.write().await;
        let column = tables
            .columns
            .iter_mut()
            .find(|column| column.id == id)
            .ok_or_else(|| MemobanError::NotFound(format!("column {id}")))?;
        column.update_title(title);
        Ok(())
    }

    async fn delete_column(&self, id: ColumnId) -> MemobanResult<()> {
        let mut tables = self.tables.write().await;
        tables.columns.retain(|column| column.id != id);
        tables.cards.retain(|card| card.column_id != id);
        Ok(())
    }

    async fn create_card(
        &self,
        column_id: ColumnId,
        title: String,
        description: Option<String>,
        position: i32,
    ) -> MemobanResult<Card> {
        let mut tables = self.tables.write().await;
        if !tables.columns.iter().any(|column| column.id == column_id) {
            return Err(MemobanError::NotFound(format!("column {column_id}")));
        }
        let card = Card::new(column_id, title, description, position);
        tracing::debug!(card_id = %card.id, %column_id, position, "created card");
        tables.cards.push(card.clone());
        Ok(card)
    }

    async fn update_card(
        &self,
        id: CardId,
        title: String,
        description: Option<String>,
    ) -> MemobanResult<()> {
        let mut tables = self.tables.write().await;
        let card = tables
            .cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or_else(|| MemobanError::NotFound(format!("card {id}")))?;
        card.update_title(title);
        card.update_description(description);
        Ok(())
    }

    async fn update_card_location(
        &self,
        id: CardId,
        column_id: ColumnId,
        position: i32,
    ) -> MemobanResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.columns.iter().any(|column| column.id == column_id) {
            return Err(MemobanError::NotFound(format!("column {column_id}")));
        }
        let card = tables
            .cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or_else(|| MemobanError::NotFound(format!("card {id}")))?;
        card.move_to_column(column_id, position);
        tracing::debug!(card_id = %id, %column_id, position, "moved card");
        Ok(())
    }

    async fn delete_card(&self, id: CardId) -> MemobanResult<()> {
        let mut tables = self.tables.write().await;
        tables.cards.retain(|card| card.id != id);
        Ok(())
    }

    async fn fetch_memos_with_tags(&self) -> MemobanResult<Vec<Memo>> {
        let tables = self.tables.read().await;
        let mut memos = tables.memos.clone();
        memos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for memo in &mut memos {
            memo.tags = tables
                .memo_tags
                .iter()
                .filter(|link| link.memo_id == memo.id)
                .cloned()
                .map(|mut link| {
                    link.tag = tables.tags.iter().find(|tag| tag.id == link.tag_id).cloned();
                    link
                })
                .collect();
        }
        Ok(memos)
    }

    async fn create_memo(
        &self,
        title: String,
        content: String,
        tag_ids: Vec<TagId>,
    ) -> MemobanResult<Memo> {
        let mut tables = self.tables.write().await;
        for tag_id in &tag_ids {
            if !tables.tags.iter().any(|tag| tag.id == *tag_id) {
                return Err(MemobanError::NotFound(format!("tag {tag_id}")));
            }
        }
        let memo = Memo::new(title, content);
        for tag_id in tag_ids {
            tables.memo_tags.push(MemoTag::new(memo.id, tag_id));
        }
        tables.memos.push(memo.clone());
        Ok(memo)
    }

    async fn update_memo(
        &self,
        id: MemoId,
        title: String,
        content: String,
        tag_ids: Vec<TagId>,
    ) -> MemobanResult<()> {
        let mut tables = self.tables.write().await;
        for tag_id in &tag_ids {
            if !tables.tags.iter().any(|tag| tag.id == *tag_id) {
                return Err(MemobanError::NotFound(format!("tag {tag_id}")));
            }
        }
        let memo = tables
            .memos
            .iter_mut()
            .find(|memo| memo.id == id)
            .ok_or_else(|| MemobanError::NotFound(format!("memo {id}")))?;
        memo.update_content(title, content);
        // Tag links are replaced wholesale, never patched.
        tables.memo_tags.retain(|link| link.memo_id != id);
        for tag_id in tag_ids {
            tables.memo_tags.push(MemoTag::new(id, tag_id));
        }
        Ok(())
    }

    async fn delete_memo(&self, id: MemoId) -> MemobanResult<()> {
        let mut tables = self.tables.write().await;
        tables.memos.retain(|memo| memo.id != id);
        tables.memo_tags.retain(|link| link.memo_id != id);
        Ok(())
    }

    async fn fetch_tags(&self) -> MemobanResult<Vec<Tag>> {
        let tables = self.tables.read().await;
        let mut tags = tables.tags.clone();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    async fn create_tag(&self, name: String, color: Option<String>) -> MemobanResult<Tag> {
        let mut tables = self.tables.write().await;
        let tag = Tag::new(name, color);
        tables.tags.push(tag.clone());
        Ok(tag)
    }

    async fn update_tag(&self, id: TagId, update: TagUpdate) -> MemobanResult<()> {
        let mut tables = self.tables.write().await;
        let tag = tables
            .tags
            .iter_mut()
            .find(|tag| tag.id == id)
            .ok_or_else(|| MemobanError::NotFound(format!("tag {id}")))?;
        if let Some(name) = update.name {
            tag.update_name(name);
        }
        if let Some(color) = update.color {
            tag.update_color(color);
        }
        Ok(())
    }

    async fn delete_tag(&self, id: TagId) -> MemobanResult<()> {
        let mut tables = self.tables.write().await;
        tables.tags.retain(|tag| tag.id != id);
        tables.memo_tags.retain(|link| link.tag_id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_boards_append_at_next_position() {
        let store = InMemoryStore::new();
        let first = store
            .create_board("Work".into(), "#3b82f6".into(), "layout-grid".into())
            .await
            .unwrap();
        let second = store
            .create_board("Home".into(), "#ef4444".into(), "home".into())
            .await
            .unwrap();
        assert_eq!(first.position, 0);
        assert_eq!(second.position, 1);
    }

    #[tokio::test]
    async fn test_columns_with_cards_sorted_by_position() {
        let store = InMemoryStore::new();
        let board = store
            .create_board("Work".into(), "#3b82f6".into(), "layout-grid".into())
            .await
            .unwrap();
        let done = store
            .create_column(board.id, "Done".into(), 1)
            .await
            .unwrap();
        let todo = store
            .create_column(board.id, "To Do".into(), 0)
            .await
            .unwrap();
        store
            .create_card(todo.id, "b".into(), None, 1)
            .await
            .unwrap();
        store
            .create_card(todo.id, "a".into(), None, 0)
            .await
            .unwrap();

        let columns = store.fetch_columns_with_cards(board.id).await.unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].id, todo.id);
        assert_eq!(columns[1].id, done.id);
        assert_eq!(columns[0].cards[0].title, "a");
        assert_eq!(columns[0].cards[1].title, "b");
    }

    #[tokio::test]
    async fn test_fetch_is_idempotent() {
        let store = InMemoryStore::new();
        let board = store
            .create_board("Work".into(), "#3b82f6".into(), "layout-grid".into())
            .await
            .unwrap();
        let column = store
            .create_column(board.id, "To Do".into(), 0)
            .await
            .unwrap();
        store
            .create_card(column.id, "task".into(), None, 0)
            .await
            .unwrap();

        let first = store.fetch_columns_with_cards(board.id).await.unwrap();
        let second = store.fetch_columns_with_cards(board.id).await.unwrap();
        let ids = |columns: &[Column]| {
            columns
                .iter()
                .map(|c| (c.id, c.cards.iter().map(|k| (k.id, k.position)).collect()))
                .collect::<Vec<(ColumnId, Vec<(CardId, i32)>)>>()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[tokio::test]
    async fn test_delete_column_cascades_cards() {
        let store = InMemoryStore::new();
        let board = store
            .create_board("Work".into(), "#3b82f6".into(), "layout-grid".into())
            .await
            .unwrap();
        let column = store
            .create_column(board.id, "To Do".into(), 0)
            .await
            .unwrap();
        let card = store
            .create_card(column.id, "task".into(), None, 0)
            .await
            .unwrap();

        store.delete_column(column.id).await.unwrap();

        let columns = store.fetch_columns_with_cards(board.id).await.unwrap();
        assert!(columns.is_empty());
        let err = store.update_card(card.id, "task".into(), None).await;
        assert!(matches!(err, Err(MemobanError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_memo_rejects_unknown_tag() {
        let store = InMemoryStore::new();
        let err = store
            .create_memo("note".into(), "content".into(), vec![Uuid::new_v4()])
            .await;
        assert!(matches!(err, Err(MemobanError::NotFound(_))));
        assert!(store.fetch_memos_with_tags().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_memo_rejects_unknown_tag_untouched() {
        let store = InMemoryStore::new();
        let tag = store.create_tag("alpha".into(), None).await.unwrap();
        let memo = store
            .create_memo("note".into(), "content".into(), vec![tag.id])
            .await
            .unwrap();

        let err = store
            .update_memo(memo.id, "note".into(), "changed".into(), vec![Uuid::new_v4()])
            .await;
        assert!(matches!(err, Err(MemobanError::NotFound(_))));

        // Neither the memo row nor its links were touched.
        let memos = store.fetch_memos_with_tags().await.unwrap();
        assert_eq!(memos[0].content, "content");
        assert_eq!(memos[0].tag_ids(), vec![tag.id]);
    }

    #[tokio::test]
    async fn test_memo_tags_replaced_wholesale() {
        let store = InMemoryStore::new();
        let tag_a = store.create_tag("alpha".into(), None).await.unwrap();
        let tag_b = store.create_tag("beta".into(), None).await.unwrap();
        let memo = store
            .create_memo("note".into(), "content".into(), vec![tag_a.id])
            .await
            .unwrap();

        store
            .update_memo(memo.id, "note".into(), "content".into(), vec![tag_b.id])
            .await
            .unwrap();

        let memos = store.fetch_memos_with_tags().await.unwrap();
        assert_eq!(memos.len(), 1);
        assert_eq!(memos[0].tag_ids(), vec![tag_b.id]);
        assert_eq!(
            memos[0].tags[0].tag.as_ref().map(|t| t.name.as_str()),
            Some("beta")
        );
    }

    #[tokio::test]
    async fn test_memos_newest_first() {
        let store = InMemoryStore::new();
        store
            .create_memo("old".into(), "first".into(), vec![])
            .await
            .unwrap();
        store
            .create_memo("new".into(), "second".into(), vec![])
            .await
            .unwrap();

        let memos = store.fetch_memos_with_tags().await.unwrap();
        assert_eq!(memos[0].title, "new");
        assert_eq!(memos[1].title, "old");
    }

    #[tokio::test]
    async fn test_delete_tag_cascades_links() {
        let store = InMemoryStore::new();
        let tag = store.create_tag("alpha".into(), None).await.unwrap();
        store
            .create_memo("note".into(), "content".into(), vec![tag.id])
            .await
            .unwrap();

        store.delete_tag(tag.id).await.unwrap();

        let memos = store.fetch_memos_with_tags().await.unwrap();
        assert!(memos[0].tags.is_empty());
        assert!(store.fetch_tags().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_tags_sorted_by_name() {
        let store = InMemoryStore::new();
        store.create_tag("zeta".into(), None).await.unwrap();
        store.create_tag("alpha".into(), None).await.unwrap();

        let tags = store.fetch_tags().await.unwrap();
        assert_eq!(tags[0].name, "alpha");
        assert_eq!(tags[1].name, "zeta");
    }
}
