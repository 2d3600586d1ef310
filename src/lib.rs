//! # Backend Service
//!
//! User registration, login with password verification, token issuance, a
//! bearer-token middleware, and the authenticated wishlist endpoint.

pub mod auth;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use database::DbPool;
pub use error::{AppError, Result};
pub use server::{start_server, AppState, ServerConfig};
