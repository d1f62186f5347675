//! HTTP client for end-to-end tests
//!
//! This module wraps reqwest and provides methods for all song library endpoints.
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /
    pub async fn home(&self) -> Response {
        self.client
            .get(self.url("/"))
            .send()
            .await
            .expect("Home request failed")
    }

    /// POST /songs
    pub async fn create_song(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/songs"))
            .json(body)
            .send()
            .await
            .expect("Create song request failed")
    }

    /// POST /songs with an arbitrary JSON-typed body
    pub async fn create_song_raw(&self, body: &str) -> Response {
        self.client
            .post(self.url("/songs"))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Create song request failed")
    }

    /// GET /songs?...
    pub async fn list_songs(&self, query: &[(&str, &str)]) -> Response {
        self.client
            .get(self.url("/songs"))
            .query(query)
            .send()
            .await
            .expect("List songs request failed")
    }

    /// GET /songs/{id}
    pub async fn get_song(&self, id: &str) -> Response {
        self.client
            .get(self.url(&format!("/songs/{}", id)))
            .send()
            .await
            .expect("Get song request failed")
    }

    /// PUT /songs/{id}
    pub async fn update_song(&self, id: &str, body: &Value) -> Response {
        self.client
            .put(self.url(&format!("/songs/{}", id)))
            .json(body)
            .send()
            .await
            .expect("Update song request failed")
    }

    /// DELETE /songs/{id}
    pub async fn delete_song(&self, id: &str) -> Response {
        self.client
            .delete(self.url(&format!("/songs/{}", id)))
            .send()
            .await
            .expect("Delete song request failed")
    }

    /// GET /songs/{id}/paginate?...
    pub async fn paginate_lyrics(&self, id: &str, query: &[(&str, &str)]) -> Response {
        self.client
            .get(self.url(&format!("/songs/{}/paginate", id)))
            .query(query)
            .send()
            .await
            .expect("Paginate lyrics request failed")
    }
}
