use std::sync::Arc;

use memoban_core::{AppConfig, MemobanResult};
use memoban_domain::{Board, BoardId, BoardUpdate};
use memoban_remote::RemoteStore;

/// The board tab strip: every board the user owns, position-ordered.
///
/// New boards take the configured default color and icon; the remote store
/// appends them after the existing boards.
pub struct BoardCatalog {
    store: Arc<dyn RemoteStore>,
    config: AppConfig,
    boards: Vec<Board>,
}

impl BoardCatalog {
    pub fn new(store: Arc<dyn RemoteStore>, config: AppConfig) -> Self {
        Self {
            store,
            config,
            boards: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> MemobanResult<()> {
        self.boards = self.store.fetch_boards().await?;
        Ok(())
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn find(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == id)
    }

    pub async fn create_board(&mut self, title: &str) -> MemobanResult<Board> {
        let board = self
            .store
            .create_board(
                title.to_string(),
                self.config.default_board_color.clone(),
                self.config.default_board_icon.clone(),
            )
            .await?;
        self.load().await?;
        Ok(board)
    }

    pub async fn update_board(&mut self, id: BoardId, update: BoardUpdate) -> MemobanResult<()> {
        if update.is_empty() {
            return Ok(());
        }
        self.store.update_board(id, update).await?;
        self.load().await
    }

    pub async fn delete_board(&mut self, id: BoardId) -> MemobanResult<()> {
        self.store.delete_board(id).await?;
        self.load().await
    }
}
