use crate::{
    cache::ReplayCache,
    key::service_category_key,
    traits::ServiceCategorySource,
    types::{ActiveFilter, ServiceCategory},
};
use fieldx::fxstruct;
use std::sync::Arc;

/// Facade over a [`ServiceCategorySource`], keyed by active filter.
#[fxstruct(sync, no_new, default(off), builder)]
pub struct ServiceCategoryState<S>
where
    S: ServiceCategorySource,
{
    #[fieldx(get(clone), builder(required))]
    source: Arc<S>,

    #[fieldx(private, lazy, get, builder(off))]
    cache: ReplayCache<Vec<ServiceCategory>, S::Error>,
}

impl<S> ServiceCategoryState<S>
where
    S: ServiceCategorySource,
{
    fn build_cache(&self) -> ReplayCache<Vec<ServiceCategory>, S::Error> {
        ReplayCache::builder().name("service-categories").build().unwrap()
    }

    pub async fn find_categories(&self, filter: ActiveFilter) -> Result<Vec<ServiceCategory>, Arc<S::Error>> {
        let key = service_category_key(filter);
        let handle = {
            let source = self.source();
            self.cache()
                .get_or_populate(&key, move || async move { source.fetch_categories(filter).await })
        };
        handle.get().await
    }
}
