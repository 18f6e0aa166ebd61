//! Blog post administration.

use leptos::prelude::*;
use serde_json::{Map, Value};

use super::catalog::{CatalogEntry, catalog_admin};
use crate::components::shell::AppShell;
use crate::net::api::{ApiClient, ApiError};
use crate::net::endpoints;
use crate::net::types::BlogPost;
use crate::util::form::{BLOG_FORM, FormField};
use crate::util::format::optional_date;

impl CatalogEntry for BlogPost {
    const NOUN: &'static str = "Blog Post";
    const PLURAL: &'static str = "Blog Posts";
    const FORM: &'static [FormField] = &BLOG_FORM;
    const COLUMNS: &'static [&'static str] = &["Title", "Category", "Author", "Published"];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.category.clone().unwrap_or_default(),
            self.byline().to_owned(),
            optional_date(self.created_at.as_deref()),
        ]
    }

    async fn list(client: ApiClient) -> Result<Vec<Self>, ApiError> {
        endpoints::list_posts(&client).await
    }

    async fn create(client: ApiClient, body: Map<String, Value>) -> Result<Self, ApiError> {
        endpoints::create_post(&client, &body).await
    }

    async fn update(client: ApiClient, id: String, body: Map<String, Value>) -> Result<Self, ApiError> {
        endpoints::update_post(&client, &id, &body).await
    }

    async fn delete(client: ApiClient, id: String) -> Result<(), ApiError> {
        endpoints::delete_post(&client, &id).await
    }
}

#[component]
pub fn AdminBlogPage() -> impl IntoView {
    view! { <AppShell admin=true>{catalog_admin::<BlogPost>()}</AppShell> }
}
