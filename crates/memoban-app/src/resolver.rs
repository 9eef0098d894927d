use memoban_domain::{Card, CardId, Column};
use uuid::Uuid;

/// A resolved drop gesture: the column the card came from, the column it was
/// released over, and the card itself.
#[derive(Debug)]
pub struct DropTarget<'a> {
    pub source: &'a Column,
    pub target: &'a Column,
    pub card: &'a Card,
}

/// Map a drag gesture's identifiers onto concrete columns.
///
/// `over_id` shares one namespace between columns and cards: the pointer may
/// be released over a column's empty area or over another card. Columns are
/// checked first, then the card lists; if neither matches (or the active
/// card is unknown) the gesture resolves to nothing and the caller treats it
/// as a no-op.
pub fn resolve_drop(
    columns: &[Column],
    active_card_id: CardId,
    over_id: Uuid,
) -> Option<DropTarget<'_>> {
    let source = columns
        .iter()
        .find(|column| column.contains_card(active_card_id))?;
    let card = source.cards.iter().find(|card| card.id == active_card_id)?;

    let target = columns
        .iter()
        .find(|column| column.id == over_id)
        .or_else(|| columns.iter().find(|column| column.contains_card(over_id)))?;

    Some(DropTarget {
        source,
        target,
        card,
    })
}
