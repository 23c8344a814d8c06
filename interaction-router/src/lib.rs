//! # Interaction router
//!
//! Maps each inbound event to exactly one registered handler by channel and selector, threads the
//! sender's state through it, and delivers the replies. Callback events are acknowledged before
//! the handler runs. Handlers registered through [`Router::register`] get the score
//! post-condition ([`ScoreAward`]) when the router has a [`ScorePolicy`].

mod handler;
mod router;
mod score;

pub use handler::{Channel, Handler};
pub use router::{DispatchReport, Router};
pub use score::{ScoreAward, ScorePolicy};

// Integration tests live in tests/router_test.rs
