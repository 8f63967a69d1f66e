//! # replay-cache
//!
//! Keyed single-flight replay cache for reference and lookup data.
//!
//! Think of it as the client-side L1 for dropdowns, organizational hierarchies, and
//! taxonomy lookups that are expensive to fetch and rarely change.
//!
//! # The Basics
//!
//! The crate is designed for the following use case:
//!
//! - Lookup-style remote data: the same parameters always name the same result set.
//! - Many interleaved callers asking for the same thing at almost the same time.
//! - No tolerance for redundant network round trips.
//!
//! The cache operates on the following principles:
//!
//! - It is transport-agnostic: anything that eventually produces a value or fails can
//!   be cached.
//! - One string key maps to at most one [`ReplayHandle`] — a lazy, memoized,
//!   multi-subscriber future that computes at most once and replays its outcome to
//!   every subscriber, including late ones.
//! - The handle is stored *before* the computation starts; callers racing on the same
//!   key all land on the same in-flight operation.
//! - Retention is purely capacity-driven, LRU by default, with the eviction strategy
//!   behind a trait. No TTL, no cancellation.
//! - A failed computation is cached like any other outcome and replays the identical
//!   error until its key is overwritten or evicted.
//!
//! # The Facades
//!
//! [`state`] carries the three read-through facades exercising the contract —
//! [`ResourceState`](state::ResourceState), [`ServiceCategoryState`](state::ServiceCategoryState),
//! and [`AcesState`](state::AcesState). Each derives a canonical key from its call
//! parameters ([`key`]), asks its own [`ReplayCache`] to get-or-populate, and awaits
//! the handle. Their consumers never observe hits or misses, only the guarantee that
//! identical parameters cost at most one remote request per retention window.

pub mod cache;
pub mod eviction;
pub mod handle;
pub mod key;
pub mod state;
pub mod traits;
pub mod types;

#[doc(inline)]
pub use cache::ReplayCache;
#[doc(inline)]
pub use handle::ReplayHandle;

pub mod prelude {
    pub use crate::cache::ReplayCache;
    pub use crate::eviction::EvictionPolicy;
    pub use crate::eviction::Lru;
    pub use crate::handle::ReplayHandle;
    pub use crate::key::resource_key;
    pub use crate::key::resource_query_key;
    pub use crate::key::service_category_key;
    pub use crate::key::vehicle_make_key;
    pub use crate::state::AcesState;
    pub use crate::state::ResourceState;
    pub use crate::state::ServiceCategoryState;
    pub use crate::traits::ResourceSource;
    pub use crate::traits::ServiceCategorySource;
    pub use crate::traits::VehicleSource;
    pub use crate::types::*;
}
