pub mod auth;
pub mod bot;
pub mod commands;
