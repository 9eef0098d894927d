pub mod board;
pub mod card;
pub mod column;
pub mod filter;
pub mod memo;
pub mod tag;
pub mod update;

pub use board::{Board, BoardId};
pub use card::{Card, CardId};
pub use column::{Column, ColumnId};
pub use filter::MemoFilter;
pub use memo::{Memo, MemoId, MemoTag};
pub use tag::{Tag, TagId};
pub use update::{BoardUpdate, TagUpdate};
