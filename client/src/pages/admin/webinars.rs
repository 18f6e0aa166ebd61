//! Webinar schedule administration.

use leptos::prelude::*;
use serde_json::{Map, Value};

use super::catalog::{CatalogEntry, catalog_admin};
use crate::components::shell::AppShell;
use crate::net::api::{ApiClient, ApiError};
use crate::net::endpoints;
use crate::net::types::Webinar;
use crate::util::form::{FormField, WEBINAR_FORM};
use crate::util::format::optional_date;

impl CatalogEntry for Webinar {
    const NOUN: &'static str = "Webinar";
    const PLURAL: &'static str = "Webinars";
    const FORM: &'static [FormField] = &WEBINAR_FORM;
    const COLUMNS: &'static [&'static str] = &["Title", "Speaker", "Date", "Status"];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.speaker.clone().unwrap_or_default(),
            optional_date(self.date.as_deref()),
            self.status.label().to_owned(),
        ]
    }

    async fn list(client: ApiClient) -> Result<Vec<Self>, ApiError> {
        endpoints::list_webinars(&client).await
    }

    async fn create(client: ApiClient, body: Map<String, Value>) -> Result<Self, ApiError> {
        endpoints::create_webinar(&client, &body).await
    }

    async fn update(client: ApiClient, id: String, body: Map<String, Value>) -> Result<Self, ApiError> {
        endpoints::update_webinar(&client, &id, &body).await
    }

    async fn delete(client: ApiClient, id: String) -> Result<(), ApiError> {
        endpoints::delete_webinar(&client, &id).await
    }
}

#[component]
pub fn AdminWebinarsPage() -> impl IntoView {
    view! { <AppShell admin=true>{catalog_admin::<Webinar>()}</AppShell> }
}
