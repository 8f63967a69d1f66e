use crate::{cache::ReplayCache, key::vehicle_make_key, traits::VehicleSource, types::VehicleModel};
use fieldx::fxstruct;
use std::sync::Arc;

/// Facade over a [`VehicleSource`] for the make/model/year taxonomy.
///
/// Keys are `"{makeId}.{yearStart}.{yearEnd}"`; an open bound keeps the literal
/// `undefined` the wire key has always carried.
#[fxstruct(sync, no_new, default(off), builder)]
pub struct AcesState<S>
where
    S: VehicleSource,
{
    #[fieldx(get(clone), builder(required))]
    source: Arc<S>,

    #[fieldx(private, lazy, get, builder(off))]
    cache: ReplayCache<Vec<VehicleModel>, S::Error>,
}

impl<S> AcesState<S>
where
    S: VehicleSource,
{
    fn build_cache(&self) -> ReplayCache<Vec<VehicleModel>, S::Error> {
        ReplayCache::builder().name("vehicle-models").build().unwrap()
    }

    /// Models of a make within an optional production year range.
    pub async fn find_models(
        &self,
        make_id: &str,
        year_start: Option<u16>,
        year_end: Option<u16>,
    ) -> Result<Vec<VehicleModel>, Arc<S::Error>> {
        let key = vehicle_make_key(make_id, year_start, year_end);
        let handle = {
            let source = self.source();
            let make_id = make_id.to_owned();
            self.cache().get_or_populate(&key, move || async move {
                source.fetch_models(&make_id, year_start, year_end).await
            })
        };
        handle.get().await
    }
}
