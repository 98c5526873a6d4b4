//! Reelgate Engine library.
//!
//! Gateway between a browser UI and third-party video generation and LLM APIs.
//!
//! ## Structure
//!
//! - `use_cases/` - Request validation and orchestration over ports
//! - `infrastructure/` - Port traits and their adapters (DashScope, OpenAI-compatible LLMs, media)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod prompt_templates;
pub mod use_cases;

pub use app::App;
