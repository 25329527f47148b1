use std::sync::Arc;

use models::{Content, Inquiry, Project, Service, Testimonial};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::seed;
use crate::errors::ServiceError;
use crate::store::{DocumentStore, Filter};

/// Rows inserted per collection by one seed run; zero means the collection
/// already had data and was left alone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub services: usize,
    pub projects: usize,
    pub testimonials: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize { self.services + self.projects + self.testimonials }
}

/// Application service for the public content collections.
/// Validates at the boundary; the store only ever sees JSON objects.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn DocumentStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self { Self { store } }

    pub fn store(&self) -> &Arc<dyn DocumentStore> { &self.store }

    /// Read every document of `T`'s collection and validate it into `T`.
    /// The store identifier never reaches the returned records.
    pub async fn list<T: Content>(&self) -> Result<Vec<T>, ServiceError> {
        let docs = self.store.find_all(T::COLLECTION, &Filter::all()).await?;
        docs.iter()
            .map(|d| {
                T::from_fields(&d.fields).map_err(|source| {
                    warn!(collection = T::COLLECTION, id = %d.id, error = %source, "stored document failed validation");
                    ServiceError::InvalidDocument { collection: T::COLLECTION.to_string(), id: d.id, source }
                })
            })
            .collect()
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, ServiceError> { self.list().await }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ServiceError> { self.list().await }

    pub async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ServiceError> { self.list().await }

    /// Write an already validated record into its collection.
    pub async fn insert<T: Content>(&self, record: &T) -> Result<Uuid, ServiceError> {
        Ok(self.store.insert(T::COLLECTION, record.to_fields()).await?)
    }

    /// Validate a raw payload as an [`Inquiry`] and store it. Nothing is
    /// written when validation fails.
    #[instrument(skip_all)]
    pub async fn create_inquiry(&self, payload: &Value) -> Result<Inquiry, ServiceError> {
        let inquiry = Inquiry::from_value(payload)?;
        let id = self.insert(&inquiry).await?;
        info!(event = "inquiry_created", %id, source = inquiry.source.as_deref().unwrap_or("-"), "inquiry stored");
        Ok(inquiry)
    }

    /// Populate each empty collection with the sample set. Collections are
    /// checked independently, so a partial run is finished by calling again.
    #[instrument(skip(self))]
    pub async fn seed(&self) -> Result<SeedReport, ServiceError> {
        let report = SeedReport {
            services: self.seed_collection(seed::sample_services()).await?,
            projects: self.seed_collection(seed::sample_projects()).await?,
            testimonials: self.seed_collection(seed::sample_testimonials()).await?,
        };
        info!(
            event = "seed_done",
            services = report.services,
            projects = report.projects,
            testimonials = report.testimonials,
            "seed finished"
        );
        Ok(report)
    }

    async fn seed_collection<T: Content>(&self, samples: Vec<T>) -> Result<usize, ServiceError> {
        let existing = self.store.count(T::COLLECTION).await?;
        if existing > 0 {
            info!(collection = T::COLLECTION, existing, "collection not empty; skipping seed");
            return Ok(0);
        }
        for record in &samples {
            self.insert(record).await?;
        }
        Ok(samples.len())
    }
}
