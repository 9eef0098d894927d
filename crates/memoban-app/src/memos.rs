use std::sync::Arc;

use memoban_core::MemobanResult;
use memoban_domain::{Memo, MemoFilter, MemoId, TagId};
use memoban_remote::RemoteStore;

/// Fetched memo list with client-side filtering.
///
/// Filters narrow the read view only; the full fetched list is kept so
/// changing the filter never needs a network round trip. Mutations follow
/// the same write-then-refetch policy as the board.
pub struct MemoFeed {
    store: Arc<dyn RemoteStore>,
    memos: Vec<Memo>,
    filter: MemoFilter,
}

impl MemoFeed {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            memos: Vec::new(),
            filter: MemoFilter::default(),
        }
    }

    pub async fn load(&mut self) -> MemobanResult<()> {
        self.memos = self.store.fetch_memos_with_tags().await?;
        Ok(())
    }

    /// Memos passing the current filter, newest first.
    pub fn memos(&self) -> Vec<&Memo> {
        self.memos
            .iter()
            .filter(|memo| self.filter.matches(memo))
            .collect()
    }

    pub fn all_memos(&self) -> &[Memo] {
        &self.memos
    }

    pub fn filter(&self) -> &MemoFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: MemoFilter) {
        self.filter = filter;
    }

    pub async fn create_memo(
        &mut self,
        title: &str,
        content: &str,
        tag_ids: Vec<TagId>,
    ) -> MemobanResult<Memo> {
        let memo = self
            .store
            .create_memo(title.to_string(), content.to_string(), tag_ids)
            .await?;
        self.load().await?;
        Ok(memo)
    }

    pub async fn edit_memo(
        &mut self,
        id: MemoId,
        title: &str,
        content: &str,
        tag_ids: Vec<TagId>,
    ) -> MemobanResult<()> {
        self.store
            .update_memo(id, title.to_string(), content.to_string(), tag_ids)
            .await?;
        self.load().await
    }

    pub async fn remove_memo(&mut self, id: MemoId) -> MemobanResult<()> {
        self.store.delete_memo(id).await?;
        self.load().await
    }
}
