pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod session;
pub mod surface;
pub mod terminal;
pub mod widget;

pub use client::ExchangeClient;
pub use config::ClientConfig;
pub use error::{ExchangeError, TransportError};
pub use session::{SessionId, initialize_session};
pub use widget::{ChatWidget, Outcome};
