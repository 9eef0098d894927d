use async_trait::async_trait;
use memoban_core::MemobanResult;
use memoban_domain::{
    Board, BoardId, BoardUpdate, Card, CardId, Column, ColumnId, Memo, MemoId, Tag, TagId,
    TagUpdate,
};

/// Narrow contract over the hosted table service.
///
/// Every update is a single-row write with last-write-wins semantics; reads
/// return full snapshots. Implementations must not invent ordering: boards
/// and columns come back sorted by `position`, cards by `position` within
/// their column, memos by `created_at` descending, tags by name.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    // Boards
    async fn fetch_boards(&self) -> MemobanResult<Vec<Board>>;
    async fn create_board(&self, title: String, color: String, icon: String)
        -> MemobanResult<Board>;
    async fn update_board(&self, id: BoardId, update: BoardUpdate) -> MemobanResult<()>;
    async fn delete_board(&self, id: BoardId) -> MemobanResult<()>;

    // Columns
    async fn fetch_columns_with_cards(&self, board_id: BoardId) -> MemobanResult<Vec<Column>>;
    async fn create_column(
        &self,
        board_id: BoardId,
        title: String,
        position: i32,
    ) -> MemobanResult<Column>;
    async fn rename_column(&self, id: ColumnId, title: String) -> MemobanResult<()>;
    async fn delete_column(&self, id: ColumnId) -> MemobanResult<()>;

    // Cards
    async fn create_card(
        &self,
        column_id: ColumnId,
        title: String,
        description: Option<String>,
        position: i32,
    ) -> MemobanResult<Card>;
    async fn update_card(
        &self,
        id: CardId,
        title: String,
        description: Option<String>,
    ) -> MemobanResult<()>;
    async fn update_card_location(
        &self,
        id: CardId,
        column_id: ColumnId,
        position: i32,
    ) -> MemobanResult<()>;
    async fn delete_card(&self, id: CardId) -> MemobanResult<()>;

    // Memos
    async fn fetch_memos_with_tags(&self) -> MemobanResult<Vec<Memo>>;
    async fn create_memo(
        &self,
        title: String,
        content: String,
        tag_ids: Vec<TagId>,
    ) -> MemobanResult<Memo>;
    async fn update_memo(
        &self,
        id: MemoId,
        title: String,
        content: String,
        tag_ids: Vec<TagId>,
    ) -> MemobanResult<()>;
    async fn delete_memo(&self, id: MemoId) -> MemobanResult<()>;

    // Tags
    async fn fetch_tags(&self) -> MemobanResult<Vec<Tag>>;
    async fn create_tag(&self, name: String, color: Option<String>) -> MemobanResult<Tag>;
    async fn update_tag(&self, id: TagId, update: TagUpdate) -> MemobanResult<()>;
    async fn delete_tag(&self, id: TagId) -> MemobanResult<()>;
}
