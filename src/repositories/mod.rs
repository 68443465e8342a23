//! Access layer. Every method is one unit of work: a single transaction on a
//! pooled connection, committed before the method returns.

pub mod catalog_repo;
pub mod collection_repo;
pub mod user_repo;

pub use catalog_repo::CatalogRepository;
pub use collection_repo::CollectionRepository;
pub use user_repo::UserRepository;
