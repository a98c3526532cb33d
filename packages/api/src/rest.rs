//! # REST backend client
//!
//! [`RestBackend`] implements [`GardenBackend`] over HTTP with `reqwest`. It
//! works unchanged in the browser (fetch) and natively (tests).
//!
//! Every method is one request. Non-success statuses become
//! [`BackendError::Status`] (or [`BackendError::NotFound`] for 404), transport
//! failures become [`BackendError::Network`] and undecodable bodies become
//! [`BackendError::Decode`]. Response bodies of mutations are not inspected;
//! the status code alone decides success.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use store::config::ApiConfig;
use store::models::{Collection, OneOrMany};
use store::{BackendError, GardenBackend, Gardener, RecordId, Tip, TipDraft};

/// Backend paths.
pub mod paths {
    pub const FEATURED_GARDENERS: &str = "/gardeners";
    pub const EXPLORE_GARDENERS: &str = "/explore-gardeners";
    pub const TRENDING_TIPS: &str = "/gardeners/tips";
    pub const BROWSE_TIPS: &str = "/browse-tips";
    pub const MY_TIPS: &str = "/my-tips";
    pub const SHARE_TIP: &str = "/share-tip";
    pub const UPDATE_TIP: &str = "/update-tip";
    pub const LIKE: &str = "/like";
}

#[derive(Clone, Debug)]
pub struct RestBackend {
    client: Client,
    config: ApiConfig,
}

impl RestBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = self.config.endpoint(path);
        tracing::debug!("GET {url}");
        let response = self.client.get(&url).send().await.map_err(network)?;
        decode(check(response).await?).await
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, BackendError> {
        Ok(self.get::<Collection<T>>(path).await?.into_vec())
    }
}

fn network(e: reqwest::Error) -> BackendError {
    BackendError::Network(e.to_string())
}

/// Turn a non-success response into an error, keeping the backend's message.
async fn check(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!("{url} -> {status}");
    Err(BackendError::from_status(status.as_u16(), error_message(&body)))
}

/// `{"message": "..."}` or `{"error": "..."}` when present, the raw body
/// otherwise.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(serde_json::Value::as_str) {
                return message.to_string();
            }
        }
    }
    body.trim().to_string()
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    response
        .json::<T>()
        .await
        .map_err(|e| BackendError::Decode(e.to_string()))
}

impl GardenBackend for RestBackend {
    async fn featured_gardeners(&self) -> Result<Vec<Gardener>, BackendError> {
        self.get_list(paths::FEATURED_GARDENERS).await
    }

    async fn explore_gardeners(&self) -> Result<Vec<Gardener>, BackendError> {
        self.get_list(paths::EXPLORE_GARDENERS).await
    }

    async fn trending_tips(&self) -> Result<Vec<Tip>, BackendError> {
        self.get_list(paths::TRENDING_TIPS).await
    }

    async fn browse_tips(&self) -> Result<Vec<Tip>, BackendError> {
        self.get_list(paths::BROWSE_TIPS).await
    }

    async fn get_tip(&self, id: &RecordId) -> Result<Tip, BackendError> {
        self.get(&format!("{}/{id}", paths::BROWSE_TIPS)).await
    }

    async fn my_tips(&self) -> Result<Vec<Tip>, BackendError> {
        self.get_list(paths::MY_TIPS).await
    }

    async fn get_my_tip(&self, id: &RecordId) -> Result<Vec<Tip>, BackendError> {
        let payload: OneOrMany<Tip> = self.get(&format!("{}/{id}", paths::MY_TIPS)).await?;
        Ok(payload.into_vec())
    }

    async fn create_tip(&self, draft: &TipDraft) -> Result<(), BackendError> {
        let url = self.config.endpoint(paths::SHARE_TIP);
        tracing::debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(network)?;
        check(response).await?;
        Ok(())
    }

    async fn update_tip(&self, id: &RecordId, draft: &TipDraft) -> Result<(), BackendError> {
        let url = self.config.endpoint(&format!("{}/{id}", paths::UPDATE_TIP));
        tracing::debug!("PUT {url}");
        let response = self
            .client
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(network)?;
        check(response).await?;
        Ok(())
    }

    async fn delete_tip(&self, id: &RecordId) -> Result<(), BackendError> {
        let url = self.config.endpoint(&format!("{}/{id}", paths::MY_TIPS));
        tracing::debug!("DELETE {url}");
        let response = self.client.delete(&url).send().await.map_err(network)?;
        check(response).await?;
        Ok(())
    }

    async fn like_tip(&self, id: &RecordId) -> Result<(), BackendError> {
        let url = self.config.endpoint(&format!("{}/{id}", paths::LIKE));
        tracing::debug!("PATCH {url}");
        let response = self.client.patch(&url).send().await.map_err(network)?;
        check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::TcpListener;
    use store::actions::{like_then_refetch_tip, load_public_tips};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn backend(server: &MockServer) -> RestBackend {
        RestBackend::new(ApiConfig {
            base_url: server.uri(),
        })
    }

    fn tip_json(id: u64, likes: u64) -> serde_json::Value {
        json!({
            "id": id,
            "title": "The Secret to Thriving Succulents",
            "plantType": "Succulents",
            "difficultyLevel": "Easy",
            "category": "Plant Care",
            "description": "Let the soil dry out between waterings.",
            "image": "https://example.com/s.jpg",
            "status": "public",
            "userName": "Ana",
            "userEmail": "ana@example.com",
            "totalLiked": likes
        })
    }

    #[tokio::test]
    async fn test_like_sends_one_patch_then_one_refetch() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/like/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"modifiedCount": 1})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/browse-tips/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tip_json(7, 90)))
            .expect(1)
            .mount(&server)
            .await;

        let tip = like_then_refetch_tip(&backend(&server), &RecordId::from(7))
            .await
            .unwrap();
        assert_eq!(tip.total_liked, 90);

        let requests = server.received_requests().await.unwrap();
        let order: Vec<String> = requests.iter().map(|r| r.method.to_string()).collect();
        assert_eq!(order, vec!["PATCH", "GET"]);
    }

    #[tokio::test]
    async fn test_wrapped_collection_and_public_filter() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        let mut hidden = tip_json(2, 0);
        hidden["status"] = json!("hidden");
        Mock::given(method("GET"))
            .and(path("/browse-tips"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [tip_json(1, 3), hidden]})),
            )
            .mount(&server)
            .await;

        let tips = load_public_tips(&backend(&server)).await.unwrap();
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].id, RecordId::from(1));
    }

    #[tokio::test]
    async fn test_create_posts_full_draft() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        let mut draft = TipDraft::for_author("ana@example.com", "Ana");
        draft.title = "Start seeds indoors".to_string();
        draft.plant_type = "Peppers".to_string();
        draft.description = "Six weeks before the last frost.".to_string();
        draft.image = "https://example.com/p.jpg".to_string();

        Mock::given(method("POST"))
            .and(path("/share-tip"))
            .and(body_json(serde_json::to_value(&draft).unwrap()))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"insertedId": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        backend(&server).create_tip(&draft).await.unwrap();
    }

    #[tokio::test]
    async fn test_failure_statuses() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/browse-tips/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/update-tip/5"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"message": "not your tip"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/explore-gardeners"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let backend = backend(&server);
        assert_eq!(
            backend.get_tip(&RecordId::from(404)).await,
            Err(BackendError::NotFound)
        );

        let draft = TipDraft::for_author("ben@example.com", "Ben");
        assert_eq!(
            backend.update_tip(&RecordId::from(5), &draft).await,
            Err(BackendError::Status {
                status: 403,
                message: "not your tip".to_string()
            })
        );

        assert!(matches!(
            backend.explore_gardeners().await,
            Err(BackendError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let backend = RestBackend::new(ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
        });
        assert!(matches!(
            backend.delete_tip(&RecordId::from(1)).await,
            Err(BackendError::Network(_))
        ));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"message": "nope"}"#), "nope");
        assert_eq!(error_message(r#"{"error": "bad id"}"#), "bad id");
        assert_eq!(error_message(" plain text \n"), "plain text");
    }
}
