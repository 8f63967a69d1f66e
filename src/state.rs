//! Read-through facades over the remote lookup sources.
//!
//! Each facade owns its remote source and an explicitly constructed [`ReplayCache`];
//! nothing here is ambient or global. Every lookup follows the same contract: derive
//! the canonical key, `get_or_populate`, await the handle. Consumers never learn
//! whether a call was a hit or a miss — only that identical parameters never trigger
//! more than one remote request per retention window.
//!
//! [`ReplayCache`]: crate::cache::ReplayCache

pub mod aces;
pub mod resource;
pub mod service_category;

pub use aces::AcesState;
pub use resource::ResourceState;
pub use service_category::ServiceCategoryState;
