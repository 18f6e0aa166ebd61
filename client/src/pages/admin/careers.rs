//! Career catalog administration.

use leptos::prelude::*;
use serde_json::{Map, Value};

use super::catalog::{CatalogEntry, catalog_admin};
use crate::components::shell::AppShell;
use crate::net::api::{ApiClient, ApiError};
use crate::net::endpoints::{self, CareerFilter};
use crate::net::types::Career;
use crate::util::form::{CAREER_FORM, FormField};

impl CatalogEntry for Career {
    const NOUN: &'static str = "Career";
    const PLURAL: &'static str = "Careers";
    const FORM: &'static [FormField] = &CAREER_FORM;
    const COLUMNS: &'static [&'static str] = &["Name", "Cluster", "Salary (LPA)", "Growth"];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.cluster.clone().unwrap_or_default(),
            self.salary.clone().unwrap_or_else(|| "—".to_owned()),
            self.growth.clone().unwrap_or_default(),
        ]
    }

    async fn list(client: ApiClient) -> Result<Vec<Self>, ApiError> {
        endpoints::list_careers(&client, &CareerFilter::default()).await
    }

    async fn create(client: ApiClient, body: Map<String, Value>) -> Result<Self, ApiError> {
        endpoints::create_career(&client, &body).await
    }

    async fn update(client: ApiClient, id: String, body: Map<String, Value>) -> Result<Self, ApiError> {
        endpoints::update_career(&client, &id, &body).await
    }

    async fn delete(client: ApiClient, id: String) -> Result<(), ApiError> {
        endpoints::delete_career(&client, &id).await
    }
}

#[component]
pub fn AdminCareersPage() -> impl IntoView {
    view! { <AppShell admin=true>{catalog_admin::<Career>()}</AppShell> }
}
