#[path = "trait.rs"]
mod trait_;
mod memory;


pub use memory::InMemoryAccountRepository;
pub use trait_::AccountRepository;
