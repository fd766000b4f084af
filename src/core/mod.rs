// src/core/mod.rs

pub mod clock;
pub mod encoding;
pub mod html;
pub mod net;
pub mod sanitize;
