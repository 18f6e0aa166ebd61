//! Scholarship catalog administration.

use leptos::prelude::*;
use serde_json::{Map, Value};

use super::catalog::{CatalogEntry, catalog_admin};
use crate::components::shell::AppShell;
use crate::net::api::{ApiClient, ApiError};
use crate::net::endpoints;
use crate::net::types::Scholarship;
use crate::util::form::{FormField, SCHOLARSHIP_FORM};
use crate::util::format::optional_date;

impl CatalogEntry for Scholarship {
    const NOUN: &'static str = "Scholarship";
    const PLURAL: &'static str = "Scholarships";
    const FORM: &'static [FormField] = &SCHOLARSHIP_FORM;
    const COLUMNS: &'static [&'static str] = &["Name", "Provider", "Amount", "Deadline"];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.provider.clone().unwrap_or_default(),
            self.amount.clone().unwrap_or_default(),
            optional_date(self.deadline.as_deref()),
        ]
    }

    async fn list(client: ApiClient) -> Result<Vec<Self>, ApiError> {
        endpoints::list_scholarships(&client).await
    }

    async fn create(client: ApiClient, body: Map<String, Value>) -> Result<Self, ApiError> {
        endpoints::create_scholarship(&client, &body).await
    }

    async fn update(client: ApiClient, id: String, body: Map<String, Value>) -> Result<Self, ApiError> {
        endpoints::update_scholarship(&client, &id, &body).await
    }

    async fn delete(client: ApiClient, id: String) -> Result<(), ApiError> {
        endpoints::delete_scholarship(&client, &id).await
    }
}

#[component]
pub fn AdminScholarshipsPage() -> impl IntoView {
    view! { <AppShell admin=true>{catalog_admin::<Scholarship>()}</AppShell> }
}
