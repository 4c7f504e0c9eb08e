//! Plant care chatbot: maps a message to a canned answer by keyword.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
