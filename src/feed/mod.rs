pub mod loader;
pub mod sorter;

pub use loader::{FeedLoader, FeedState};
pub use sorter::sort_newest_first;
