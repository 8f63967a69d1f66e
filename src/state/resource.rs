use crate::{
    cache::ReplayCache,
    key::resource_query_key,
    traits::ResourceSource,
    types::{ActiveFilter, FilterCriterion, Resource, ResourceQuery},
};
use fieldx::fxstruct;
use std::sync::Arc;

pub const RESOURCE_TYPE_REGION: &str = "region";
pub const RESOURCE_TYPE_STORE: &str = "store";

/// Facade over a [`ResourceSource`] for organizational reference data.
///
/// Lookups are keyed by the full parameter set (type, filter, roles, parent criteria),
/// upper-cased, so equivalent spellings share one entry. A failed fetch stays cached
/// under its key and replays the same error until something re-populates it.
#[fxstruct(sync, no_new, default(off), builder)]
pub struct ResourceState<S>
where
    S: ResourceSource,
{
    #[fieldx(get(clone), builder(required))]
    source: Arc<S>,

    #[fieldx(private, lazy, get, builder(off))]
    cache: ReplayCache<Vec<Resource>, S::Error>,
}

impl<S> ResourceState<S>
where
    S: ResourceSource,
{
    fn build_cache(&self) -> ReplayCache<Vec<Resource>, S::Error> {
        ReplayCache::builder().name("resources").build().unwrap()
    }

    /// Resources matching `query`; the remote source is consulted at most once per
    /// canonical key.
    pub async fn find_resources(&self, query: &ResourceQuery) -> Result<Vec<Resource>, Arc<S::Error>> {
        let key = resource_query_key(query);
        let handle = {
            let source = self.source();
            let query = query.clone();
            self.cache()
                .get_or_populate(&key, move || async move { source.fetch_resources(&query).await })
        };
        handle.get().await
    }

    /// Active regions visible to `roles`.
    pub async fn find_regions_by_roles(&self, roles: &[String]) -> Result<Vec<Resource>, Arc<S::Error>> {
        self.find_resources(&ResourceQuery {
            resource_type: RESOURCE_TYPE_REGION.to_string(),
            filter: ActiveFilter::Active,
            load_parents: false,
            roles: roles.to_vec(),
            criteria: Vec::new(),
        })
        .await
    }

    /// Active stores visible to `roles`, narrowed by parent criteria, with the parent
    /// chain resolved.
    pub async fn find_stores_by_roles(
        &self,
        roles: &[String],
        criteria: &[FilterCriterion],
    ) -> Result<Vec<Resource>, Arc<S::Error>> {
        self.find_resources(&ResourceQuery {
            resource_type: RESOURCE_TYPE_STORE.to_string(),
            filter: ActiveFilter::Active,
            load_parents: true,
            roles: roles.to_vec(),
            criteria: criteria.to_vec(),
        })
        .await
    }
}
