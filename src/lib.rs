pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod maps;
pub mod scorer;
pub mod session;
pub mod store;
// cmd and reports are binary modules, see main.rs.
