mod assemble;
mod classify;
mod config;
mod db;
mod extract;
mod generate;
mod handler;
mod llm;
mod schemes;
mod server;
mod state;
mod templates;

// Re-export public API
pub use server::run_server;
