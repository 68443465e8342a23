pub mod ai;
pub mod catalog;
pub mod collections;
pub mod health;
pub mod users;
