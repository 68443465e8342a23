pub mod ai;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod migrations;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod schemas;
pub mod version;
