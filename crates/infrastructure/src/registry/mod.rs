mod memory;

pub use memory::InMemoryClusterRegistry;
