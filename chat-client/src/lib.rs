pub mod api;
pub mod config;
pub mod format;
pub mod models;
pub mod session;

pub use api::{ChatFailure, RelayClient};
pub use config::ClientConfig;
pub use models::{Message, Sender};
pub use session::{ChatSession, InputError, SendState};
