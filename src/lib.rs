//! Scour: search general web and academic indexes together.
//!
//! This crate is the front-end over [`scour_search`]:
//! Form → engine choice → search core → session → paged JSON
//!
//! # Architecture
//!
//! - **Dispatch**: maps an engine selection to one source or all of them
//! - **Session**: per-browser result list and saved results, held in memory
//! - **Pagination**: fixed-size pages over the stored result list
//! - **Web**: `axum` routes tying the above together

pub mod config;
pub mod dispatch;
pub mod error;
pub mod pagination;
pub mod session;
pub mod web;

pub use config::AppConfig;
pub use dispatch::{EngineChoice, LiveSearcher, Searcher, perform_search};
pub use error::{AppError, Result};
pub use pagination::{Page, paginate};
pub use session::{SessionData, SessionStore};
pub use web::{AppState, router, serve};
