//! Interactive terminal chat with the Ogun Startup Advisor.
//!
//! Talks to a running relay server over HTTP, keeping the transcript in
//! memory for the life of the process. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
