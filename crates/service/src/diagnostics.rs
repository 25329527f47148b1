//! Store health report for the `/test` route.
//!
//! Every failure is rendered into the report; [`diagnose`] has no error path.

use std::sync::Arc;

use common::utils::text::truncate_chars;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::DocumentStore;

pub const MAX_COLLECTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Diagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            backend: "✅ Running".into(),
            database: "❌ Not Available".into(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".into(),
            collections: Vec::new(),
        }
    }
}

/// Probe `store` and describe what was found.
///
/// `url_set` tells whether a database URL was configured, so a store that
/// failed to open at startup can be told apart from one never configured.
pub async fn diagnose(store: Option<&Arc<dyn DocumentStore>>, url_set: bool) -> Diagnostics {
    let mut report = Diagnostics::default();
    let Some(store) = store else {
        if url_set {
            report.database = "⚠️ Available but not initialized".into();
        }
        return report;
    };

    report.database = "✅ Available".into();
    report.database_url = Some(String::from(if url_set { "✅ Set" } else { "❌ Not Set" }));
    report.database_name = Some(store.name());

    if let Err(e) = store.ping().await {
        report.database = format!("❌ Error: {}", truncate_chars(&e.to_string(), 120));
        return report;
    }
    report.connection_status = "Connected".into();

    match store.collection_names(MAX_COLLECTIONS).await {
        Ok(names) => {
            report.collections = names;
            report.database = "✅ Connected & Working".into();
        }
        Err(e) => {
            report.database = format!("⚠️ Connected but Error: {}", truncate_chars(&e.to_string(), 80));
        }
    }
    report
}
