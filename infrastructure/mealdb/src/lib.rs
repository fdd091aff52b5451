pub mod catalog;
pub mod client;
mod dto;
