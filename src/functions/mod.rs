//! Function implementations.
//!
//! Each function has a parser module that decodes the request body the way
//! a managed functions host would, and a handler module with the function
//! itself.
//!
//! ## Functions
//! - `echo`: Echoes the request body back, registered as `echoRequest`

pub mod echo;
