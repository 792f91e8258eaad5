pub mod db;
pub mod errors;
pub mod store;
pub mod wish;
