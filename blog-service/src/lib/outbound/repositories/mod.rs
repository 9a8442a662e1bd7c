pub mod blog;
pub mod memory;
pub mod user;

pub use blog::PostgresBlogRepository;
pub use memory::InMemoryStore;
pub use user::PostgresUserRepository;
