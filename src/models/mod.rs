pub mod error;
pub mod health;
