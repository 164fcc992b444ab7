pub mod automobile_repo;
pub mod errors;
pub mod memory_automobile_repo;
pub mod pg_automobile_repo;

pub use automobile_repo::AutomobileRepository;
pub use errors::RepositoryError;
pub use memory_automobile_repo::InMemoryAutomobileRepository;
pub use pg_automobile_repo::PgAutomobileRepository;
