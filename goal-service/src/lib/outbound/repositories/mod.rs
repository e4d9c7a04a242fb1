pub mod goal;
pub mod memory;
pub mod user;

pub use goal::PostgresGoalRepository;
pub use memory::InMemoryGoalRepository;
pub use memory::InMemoryUserRepository;
pub use user::PostgresUserRepository;
