use crate::error::MemobanError;

pub type MemobanResult<T> = Result<T, MemobanError>;
