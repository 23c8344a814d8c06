use thiserror::Error;

/// Errors crossing the transport and handler boundary.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Unexpected event for handler: {0}")]
    UnexpectedEvent(String),

    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    #[error("State error: {0}")]
    State(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
