use serde::{Deserialize, Serialize};

use crate::memo::Memo;
use crate::tag::TagId;

/// Client-side memo filter. All criteria must match; empty criteria match
/// everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoFilter {
    /// Case-insensitive substring match against the memo content.
    pub search: Option<String>,
    /// `YYYY-MM-DD` prefix match against the creation timestamp.
    pub date: Option<String>,
    /// Memo must carry at least one of these tags.
    pub tag_ids: Vec<TagId>,
}

impl MemoFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.date.is_none() && self.tag_ids.is_empty()
    }

    pub fn matches(&self, memo: &Memo) -> bool {
        if let Some(search) = &self.search {
            if !memo.content.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }

        if let Some(date) = &self.date {
            if !memo.created_at.to_rfc3339().starts_with(date.as_str()) {
                return false;
            }
        }

        if !self.tag_ids.is_empty() && !self.tag_ids.iter().any(|id| memo.has_tag(*id)) {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::MemoTag;
    use uuid::Uuid;

    fn memo_with_tag(content: &str, tag_id: TagId) -> Memo {
        let mut memo = Memo::new("note".to_string(), content.to_string());
        memo.tags = vec![MemoTag::new(memo.id, tag_id)];
        memo
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let memo = Memo::new("a".to_string(), "b".to_string());
        let filter = MemoFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&memo));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let memo = Memo::new("note".to_string(), "Buy More Milk".to_string());
        let filter = MemoFilter {
            search: Some("more milk".to_string()),
            ..MemoFilter::default()
        };
        assert!(filter.matches(&memo));

        let miss = MemoFilter {
            search: Some("bread".to_string()),
            ..MemoFilter::default()
        };
        assert!(!miss.matches(&memo));
    }

    #[test]
    fn test_date_prefix_match() {
        let memo = Memo::new("note".to_string(), "content".to_string());
        let today = memo.created_at.format("%Y-%m-%d").to_string();
        let filter = MemoFilter {
            date: Some(today),
            ..MemoFilter::default()
        };
        assert!(filter.matches(&memo));

        let other_day = MemoFilter {
            date: Some("1999-01-01".to_string()),
            ..MemoFilter::default()
        };
        assert!(!other_day.matches(&memo));
    }

    #[test]
    fn test_any_of_tags() {
        let tagged = Uuid::new_v4();
        let other = Uuid::new_v4();
        let memo = memo_with_tag("content", tagged);

        let filter = MemoFilter {
            tag_ids: vec![other, tagged],
            ..MemoFilter::default()
        };
        assert!(filter.matches(&memo));

        let miss = MemoFilter {
            tag_ids: vec![other],
            ..MemoFilter::default()
        };
        assert!(!miss.matches(&memo));
    }
}
