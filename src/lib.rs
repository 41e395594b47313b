//! Mergington High School activity sign-up service.
//!
//! An in-memory directory of extracurricular activities, exposed over HTTP for
//! listing activities and signing students up or off.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use database::ActivityDirectory;
pub use error::{ActivityError, ErrorKind};
pub use web::router::build_router;
