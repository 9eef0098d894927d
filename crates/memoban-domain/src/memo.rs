use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tag::{Tag, TagId};

pub type MemoId = Uuid;

/// A memo-to-tag link row, optionally hydrated with the tag itself when the
/// memos-with-tags join is fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoTag {
    pub id: Uuid,
    pub memo_id: MemoId,
    pub tag_id: TagId,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tag: Option<Tag>,
}

impl MemoTag {
    pub fn new(memo_id: MemoId, tag_id: TagId) -> Self {
        Self {
            id: Uuid::new_v4(),
            memo_id,
            tag_id,
            created_at: Utc::now(),
            tag: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memo {
    pub id: MemoId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<MemoTag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Memo {
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_content(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.updated_at = Utc::now();
    }

    pub fn tag_ids(&self) -> Vec<TagId> {
        self.tags.iter().map(|link| link.tag_id).collect()
    }

    pub fn has_tag(&self, tag_id: TagId) -> bool {
        self.tags.iter().any(|link| link.tag_id == tag_id)
    }
}
