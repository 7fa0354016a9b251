#[path = "trait.rs"]
mod trait_;
mod memory;


pub use memory::InMemoryDepositOrderRepository;
pub use trait_::DepositOrderRepository;
