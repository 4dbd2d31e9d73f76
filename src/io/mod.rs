//! The line protocol: requests are read from a token stream, responses are written as text.

pub mod request;
pub use request::*;
pub mod response;
pub use response::*;
