use serde::{Deserialize, Serialize};

/// Partial update for a board. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardUpdate {
    pub title: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl BoardUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.color.is_none() && self.icon.is_none()
    }
}

/// Partial update for a tag. `None` fields are left unchanged; color is
/// wrapped twice so it can be cleared back to no color.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagUpdate {
    pub name: Option<String>,
    pub color: Option<Option<String>>,
}

impl TagUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_update_title_only() {
        let update = BoardUpdate::title("Renamed");
        assert_eq!(update.title.as_deref(), Some("Renamed"));
        assert!(update.color.is_none());
        assert!(!update.is_empty());
        assert!(BoardUpdate::default().is_empty());
    }
}
