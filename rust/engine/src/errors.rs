use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Deck count out of range: {requested}, supported: {min}-{max}")]
    DeckCountOutOfRange { requested: u8, min: u8, max: u8 },
}
