// src/infrastructure/http/mod.rs
mod error;
mod remote;

pub use error::map_reqwest;
pub use remote::{ReqwestArticleRemote, build_client};
