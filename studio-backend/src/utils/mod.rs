// studio-backend/src/utils/mod.rs

pub mod validation;
