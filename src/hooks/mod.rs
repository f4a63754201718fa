pub mod use_health;
