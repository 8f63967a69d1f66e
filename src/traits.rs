use crate::types::{ActiveFilter, Resource, ResourceQuery, ServiceCategory, VehicleModel};
use async_trait::async_trait;
use std::fmt::{Debug, Display};

// The sources model "an operation that eventually produces a value or fails". The cache
// layer never assumes a particular transport behind them.

/// Remote origin of organizational resources (regions, stores, and the like).
#[async_trait]
pub trait ResourceSource: Send + Sync + 'static {
    type Error: Debug + Display + Send + Sync + 'static;

    async fn fetch_resources(&self, query: &ResourceQuery) -> Result<Vec<Resource>, Self::Error>;
}

/// Remote origin of service categories.
#[async_trait]
pub trait ServiceCategorySource: Send + Sync + 'static {
    type Error: Debug + Display + Send + Sync + 'static;

    async fn fetch_categories(&self, filter: ActiveFilter) -> Result<Vec<ServiceCategory>, Self::Error>;
}

/// Remote origin of the vehicle taxonomy.
#[async_trait]
pub trait VehicleSource: Send + Sync + 'static {
    type Error: Debug + Display + Send + Sync + 'static;

    /// Models of a make, optionally constrained to a production year range. An open
    /// bound means "from the beginning" or "to the present" respectively.
    async fn fetch_models(
        &self,
        make_id: &str,
        year_start: Option<u16>,
        year_end: Option<u16>,
    ) -> Result<Vec<VehicleModel>, Self::Error>;
}
