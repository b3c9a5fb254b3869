pub mod cache;
pub mod client;
pub mod generations;
pub mod items;
pub mod natures;
pub mod records;
