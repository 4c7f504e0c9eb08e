pub mod chatbot;
pub mod database;
