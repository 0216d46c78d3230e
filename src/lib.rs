pub mod error;
pub mod query;
pub mod services;
pub mod structures;
pub mod web;
