// studio-backend/src/api/handlers/mod.rs

pub mod consent;
pub mod forms;
pub mod language;
pub mod pages;
pub mod session;
