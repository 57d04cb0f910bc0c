#![forbid(unsafe_code)]

pub mod file;
pub mod record;
pub mod repository;
pub mod sqlite;
