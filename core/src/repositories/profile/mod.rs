#[path = "trait.rs"]
mod trait_;
mod memory;


pub use memory::InMemoryProfileRepository;
pub use trait_::ProfileRepository;
