pub mod analyzer;
pub mod messages;
pub mod prompt;

#[cfg(not(target_arch = "wasm32"))]
pub mod groq;
