pub mod audit;
pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod markup;
pub mod results;
pub mod scorer;
pub mod session;
// cmd and reports are binary modules, declared from main.rs.
