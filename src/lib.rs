pub mod candidates;
pub mod config;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod share;
pub mod stderr_buffer;
pub mod tui;
