#[path = "trait.rs"]
mod trait_;
mod memory;


pub use memory::InMemoryPropertyRepository;
pub use trait_::PropertyRepository;
