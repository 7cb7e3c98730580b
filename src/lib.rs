//! Native side of the Q&A chat client: the `reqwest` backend, the terminal
//! front-end and the local dev server that fronts the real Q&A service.

pub mod client;
pub mod errors;
pub mod proxy;
pub mod repl;
pub mod settings;
pub mod telemetry;

pub use client::HttpBackend;
pub use errors::AppError;
