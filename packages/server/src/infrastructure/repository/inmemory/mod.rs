mod user;

pub use user::InMemoryUserRepository;
