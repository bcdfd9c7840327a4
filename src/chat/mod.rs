mod responder;
mod session;

pub use responder::Responder;
pub use session::{ChatEntry, ChatSession, Speaker};
