use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("symbol {symbol:?} at position {position} is outside the alphabet")]
    SymbolOutOfAlphabet { symbol: char, position: usize },

    #[error("invalid alphabet: {len} symbols starting at {first:?}")]
    InvalidAlphabet { first: char, len: usize },

    #[error("no pair of elements sums to the target")]
    PairNotFound,
}
