// SPDX-License-Identifier: MPL-2.0
//! HTTP access to TheMealDB.
//!
//! [`RecipeSource`] is the seam between the store and the network. Each
//! method returns an owned `'static` future so the Iced runtime can drive
//! it on its executor; implementations clone whatever they need into it.

use super::meal_db::{MealDbRecord, MealDbResponse};
use super::RecipeId;
use crate::config::DEFAULT_API_BASE_URL;
use crate::error::{Error, FetchError, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

const USER_AGENT: &str = concat!("RecipeLens/", env!("CARGO_PKG_VERSION"));

/// Outcome of one request: the decoded records or why there are none.
pub type FetchResult = std::result::Result<Vec<MealDbRecord>, FetchError>;

pub trait RecipeSource: Send + Sync {
    /// One random recipe (`random.php`).
    fn random(&self) -> BoxFuture<'static, FetchResult>;

    /// Recipes whose name starts with `letter` (`search.php?f=`).
    fn search_by_letter(&self, letter: char) -> BoxFuture<'static, FetchResult>;

    /// Recipes whose name contains `name` (`search.php?s=`).
    fn search_by_name(&self, name: &str) -> BoxFuture<'static, FetchResult>;

    /// The recipe with identifier `id` (`lookup.php?i=`).
    fn lookup(&self, id: &RecipeId) -> BoxFuture<'static, FetchResult>;
}

/// [`RecipeSource`] backed by TheMealDB's JSON API.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Fetch(FetchError::Network(e.to_string())))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client for the public API.
    pub fn public() -> Result<Self> {
        Self::new(DEFAULT_API_BASE_URL)
    }

    /// Absolute URL of an endpoint such as `random.php`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get_meals(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> BoxFuture<'static, FetchResult> {
        let http = self.http.clone();
        let url = self.endpoint(path);
        async move {
            tracing::debug!(url = %url, ?query, "Querying TheMealDB");

            let response = http
                .get(&url)
                .query(&query)
                .send()
                .await
                .map_err(|e| FetchError::from_reqwest(&e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let envelope: MealDbResponse = response
                .json()
                .await
                .map_err(|e| FetchError::Parse(e.to_string()))?;

            Ok(envelope.into_records())
        }
        .boxed()
    }

    /// Downloads raw image bytes, used for recipe thumbnails.
    pub fn fetch_image(&self, url: String) -> BoxFuture<'static, std::result::Result<Vec<u8>, FetchError>> {
        let http = self.http.clone();
        async move {
            let response = http
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::from_reqwest(&e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| FetchError::from_reqwest(&e))?;
            Ok(bytes.to_vec())
        }
        .boxed()
    }
}

impl RecipeSource for MealDbClient {
    fn random(&self) -> BoxFuture<'static, FetchResult> {
        self.get_meals("random.php", Vec::new())
    }

    fn search_by_letter(&self, letter: char) -> BoxFuture<'static, FetchResult> {
        self.get_meals("search.php", vec![("f", letter.to_string())])
    }

    fn search_by_name(&self, name: &str) -> BoxFuture<'static, FetchResult> {
        self.get_meals("search.php", vec![("s", name.to_string())])
    }

    fn lookup(&self, id: &RecipeId) -> BoxFuture<'static, FetchResult> {
        self.get_meals("lookup.php", vec![("i", id.to_string())])
    }
}
