pub mod chat_avatar;

pub use chat_avatar::*;
