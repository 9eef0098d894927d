use memoban_domain::Column;

/// Position assigned to a card entering `column`.
///
/// Cards are always appended after the current siblings, so the new position
/// is the column's card count. This is the only sibling-position policy:
/// dropping between two cards does not insert between them.
pub fn append_position(column: &Column) -> i32 {
    column.cards.len() as i32
}
