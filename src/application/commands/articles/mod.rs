// src/application/commands/articles/mod.rs
mod delete;
mod insert;
mod service;
mod truncate;
mod update;

pub use service::ArticleCommandService;
