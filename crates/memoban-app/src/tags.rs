use std::sync::Arc;

use memoban_core::MemobanResult;
use memoban_domain::{Tag, TagId, TagUpdate};
use memoban_remote::RemoteStore;

/// The user's tag list, name-ordered, refetched after every mutation.
pub struct TagCatalog {
    store: Arc<dyn RemoteStore>,
    tags: Vec<Tag>,
}

impl TagCatalog {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            tags: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> MemobanResult<()> {
        self.tags = self.store.fetch_tags().await?;
        Ok(())
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub async fn add_tag(&mut self, name: &str, color: Option<String>) -> MemobanResult<Tag> {
        let tag = self.store.create_tag(name.to_string(), color).await?;
        self.load().await?;
        Ok(tag)
    }

    pub async fn edit_tag(&mut self, id: TagId, update: TagUpdate) -> MemobanResult<()> {
        self.store.update_tag(id, update).await?;
        self.load().await
    }

    pub async fn remove_tag(&mut self, id: TagId) -> MemobanResult<()> {
        self.store.delete_tag(id).await?;
        self.load().await
    }
}
