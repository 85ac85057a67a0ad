// src/application/ports/mod.rs
pub mod render;
pub mod seed;
pub mod time;
