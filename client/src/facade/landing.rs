use std::sync::Arc;

use shared::{Faq, Feature, Plan};

use crate::core::error::Result;
use crate::core::service::LandingApi;
use crate::facade::Query;

/// Marketing content is static, so these caches are filled once per process
/// and never invalidated.
pub struct LandingFacade {
    api: Arc<dyn LandingApi>,
    features: Query<(), Vec<Feature>>,
    plans: Query<(), Vec<Plan>>,
    faqs: Query<(), Vec<Faq>>,
}

impl LandingFacade {
    pub fn new(api: Arc<dyn LandingApi>) -> Self {
        Self {
            api,
            features: Query::new(),
            plans: Query::new(),
            faqs: Query::new(),
        }
    }

    pub async fn features(&self) -> Result<Vec<Feature>> {
        let api = Arc::clone(&self.api);
        let features = self
            .features
            .fetch((), move || async move { api.features().await })
            .await?;
        Ok(features)
    }

    pub async fn plans(&self) -> Result<Vec<Plan>> {
        let api = Arc::clone(&self.api);
        let plans = self
            .plans
            .fetch((), move || async move { api.plans().await })
            .await?;
        Ok(plans)
    }

    pub async fn faqs(&self) -> Result<Vec<Faq>> {
        let api = Arc::clone(&self.api);
        let faqs = self
            .faqs
            .fetch((), move || async move { api.faqs().await })
            .await?;
        Ok(faqs)
    }
}
