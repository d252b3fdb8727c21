pub mod auth;
pub mod effects;
pub mod error;
pub mod gui;
pub mod history;
pub mod imaging;
pub mod logging;
pub mod notify;
pub mod settings;
pub mod stego;
pub mod store;
