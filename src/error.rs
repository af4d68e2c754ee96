use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported radix group width {0}, expected one of 4, 8, 16 or 32 bits")]
    InvalidGroupWidth(u32),

    #[error("a sort race needs at least one contender")]
    NoContenders,
}
