//! College catalog administration.

use leptos::prelude::*;
use serde_json::{Map, Value};

use super::catalog::{CatalogEntry, catalog_admin};
use crate::components::shell::AppShell;
use crate::net::api::{ApiClient, ApiError};
use crate::net::endpoints::{self, CollegeFilter};
use crate::net::types::College;
use crate::util::form::{COLLEGE_FORM, FormField};

impl CatalogEntry for College {
    const NOUN: &'static str = "College";
    const PLURAL: &'static str = "Colleges";
    const FORM: &'static [FormField] = &COLLEGE_FORM;
    const COLUMNS: &'static [&'static str] = &["Name", "Location", "Stream", "NIRF"];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.location.clone().unwrap_or_default(),
            self.stream.clone().unwrap_or_default(),
            self.nirf_ranking.clone().unwrap_or_else(|| "—".to_owned()),
        ]
    }

    async fn list(client: ApiClient) -> Result<Vec<Self>, ApiError> {
        endpoints::list_colleges(&client, &CollegeFilter::default()).await
    }

    async fn create(client: ApiClient, body: Map<String, Value>) -> Result<Self, ApiError> {
        endpoints::create_college(&client, &body).await
    }

    async fn update(client: ApiClient, id: String, body: Map<String, Value>) -> Result<Self, ApiError> {
        endpoints::update_college(&client, &id, &body).await
    }

    async fn delete(client: ApiClient, id: String) -> Result<(), ApiError> {
        endpoints::delete_college(&client, &id).await
    }
}

#[component]
pub fn AdminCollegesPage() -> impl IntoView {
    view! { <AppShell admin=true>{catalog_admin::<College>()}</AppShell> }
}
