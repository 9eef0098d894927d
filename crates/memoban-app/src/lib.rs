pub mod board;
pub mod catalog;
pub mod memos;
pub mod position;
pub mod resolver;
pub mod state;
pub mod tags;

pub use board::BoardController;
pub use catalog::BoardCatalog;
pub use memos::MemoFeed;
pub use position::append_position;
pub use resolver::{resolve_drop, DropTarget};
pub use state::BoardState;
pub use tags::TagCatalog;
