pub mod allocator;
pub mod scorer;

pub use allocator::IMilestoneAllocator;
pub use scorer::IScopeScorer;
