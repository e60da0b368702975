//! Echo function implementation.
//!
//! Registered under the name `echoRequest`. Responds to every request with
//! the request body prefixed by `Echo: `:
//!
//! ```text
//! Content-Type: application/json   {"msg":"hi"}   ->   Echo: {"msg":"hi"}
//! Content-Type: text/plain         hello          ->   Echo: hello
//! (no Content-Type)                hello          ->   Echo: hello
//! Content-Type: application/xml    <a/>           ->   Echo: <a/>
//! ```
//!
//! The function itself ([`handler::echo_request`]) is synchronous and holds no state.
//! Body decoding lives in [`parser`] and mirrors what a functions host does
//! before invoking the function: JSON media types are deserialized, anything
//! else is passed as text.

pub mod handler;
pub mod parser;

pub use handler::handle_request;

/// Name the echo function is registered under.
pub const FUNCTION_NAME: &str = "echoRequest";
