pub mod http;
pub mod render;
pub mod seed;
pub mod time;
