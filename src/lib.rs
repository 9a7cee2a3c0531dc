//! Encoder Tutorial
//!
//! Server-rendered, tabbed walkthrough of four ways to encode categorical data
//! (LabelEncoder, pd.get_dummies, OneHotEncoder, ColumnTransformer).
//!
//! - `catalog/`: static content per encoder (text, sample tables, code)
//! - `view/`: selection state, table rendering, copy button
//! - `web/` + `api_server`: Axum routes, Askama pages, JSON API (feature `server`)

pub mod catalog;
pub mod config;
pub mod view;

#[cfg(feature = "server")]
pub mod api_server;
#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use catalog::{content, ContentRecord, EncoderVariant};
pub use config::ServerConfig;
pub use view::{PageView, ViewComposer};

#[cfg(feature = "server")]
pub use api_server::{create_router, AppState};
