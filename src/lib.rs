pub mod config;
pub mod db;
pub mod grpc;
pub mod types;
pub mod utils;
