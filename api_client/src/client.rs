use crate::error::{self, ClientError};
use crate::paths;
use crate::protocol::{
    AnimeDetailResponse, AnimeListResponse, AnimeSearchResponse, AuthResponse, LoginInput,
    MeResponse, ReviewCreateResponse, ReviewFeedResponse, ReviewInput, ReviewListResponse,
    SignUpInput,
};
use crate::validate;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

// Default page size for catalog search, mirroring the backend default.
const DEFAULT_SEARCH_LIMIT: u32 = 15;

// Base URL for direct (non-proxied) calls; the composition root usually
// passes the gateway origin instead.
pub fn default_base_url() -> String {
    std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

// Success bodies must decode into the expected shape; a malformed success
// payload is its own error, distinct from transport failure.
fn decode_success<T>(bytes: &[u8]) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(ClientError::Decode)
}

// Typed client for every backend operation, called through the gateway.
// The cookie store is the browser-equivalent of `credentials: include`:
// the session cookie minted by the gateway travels with every call.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    pub base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let res = self
            .http
            .get(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(ClientError::Transport)?;
        Self::decode(res).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let res = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        Self::decode(res).await
    }

    async fn decode<T>(res: reqwest::Response) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let status = res.status();
        if !status.is_success() {
            // A body that fails to read or parse still yields the uniform
            // error with the fallback message.
            let bytes = res.bytes().await.unwrap_or_default();
            return Err(error::api_error(status, &bytes));
        }
        let bytes = res.bytes().await.map_err(ClientError::Transport)?;
        decode_success(&bytes)
    }

    // ---- auth ----

    pub async fn signup(&self, input: &SignUpInput) -> Result<AuthResponse, ClientError> {
        validate::username(&input.username)?;
        validate::email(&input.email)?;
        validate::password(&input.password)?;
        self.post_json(paths::SIGNUP, input).await
    }

    pub async fn login(&self, input: &LoginInput) -> Result<AuthResponse, ClientError> {
        validate::email(&input.email)?;
        validate::password_present(&input.password)?;
        self.post_json(paths::LOGIN, input).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let res = self
            .http
            .post(self.url(paths::LOGOUT))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            let bytes = res.bytes().await.unwrap_or_default();
            return Err(error::api_error(status, &bytes));
        }
        Ok(())
    }

    pub async fn current_user(&self) -> Result<MeResponse, ClientError> {
        self.get_json(paths::ME).await
    }

    // ---- catalog ----

    pub async fn anime_list(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<AnimeListResponse, ClientError> {
        validate::page(page, page_size)?;
        self.get_json(&paths::anime_list(page, page_size)).await
    }

    // Blank keywords are rejected here so no network call is ever issued
    // for an empty search.
    pub async fn search_animes(
        &self,
        keyword: &str,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<AnimeSearchResponse, ClientError> {
        validate::keyword(keyword)?;
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        self.get_json(&paths::anime_search(keyword, limit, cursor))
            .await
    }

    pub async fn anime_detail(
        &self,
        annict_id: i64,
    ) -> Result<AnimeDetailResponse, ClientError> {
        self.get_json(&paths::anime_detail(annict_id)).await
    }

    // ---- reviews ----

    pub async fn reviews_by_anime(
        &self,
        anime_id: i64,
    ) -> Result<ReviewListResponse, ClientError> {
        self.get_json(&paths::reviews_by_anime(anime_id)).await
    }

    pub async fn create_review(
        &self,
        input: &ReviewInput,
    ) -> Result<ReviewCreateResponse, ClientError> {
        validate::score(input.score)?;
        self.post_json(paths::REVIEWS, input).await
    }

    pub async fn my_reviews(&self) -> Result<ReviewFeedResponse, ClientError> {
        self.get_json(paths::MY_REVIEWS).await
    }

    pub async fn recent_reviews(&self) -> Result<ReviewFeedResponse, ClientError> {
        self.get_json(paths::RECENT_REVIEWS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationError;

    // Validation failures must short-circuit before any socket is touched,
    // so these tests run against an address nothing listens on.
    fn offline_client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9").expect("expected client to build")
    }

    #[test]
    fn when_a_success_body_decodes_then_the_value_comes_back() {
        let payload = br#"{"user": {"id": 1, "username": "aki", "email": "aki@example.com", "created_at": "2024-01-01T00:00:00Z"}}"#;

        let decoded: crate::protocol::MeResponse =
            decode_success(payload).expect("expected body to decode");

        assert_eq!(decoded.user.username, "aki");
    }

    #[test]
    fn when_a_success_body_is_malformed_then_the_error_is_a_decode_error() {
        let result = decode_success::<crate::protocol::MeResponse>(b"<html>nope</html>");

        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn when_review_score_is_out_of_range_then_no_request_is_made() {
        let client = offline_client();

        for score in [-1, 101] {
            let result = client
                .create_review(&ReviewInput {
                    annict_id: 123,
                    score,
                    comment: None,
                })
                .await;

            assert!(matches!(
                result,
                Err(ClientError::Invalid(ValidationError::ScoreOutOfRange))
            ));
        }
    }

    #[tokio::test]
    async fn when_search_keyword_is_blank_then_no_request_is_made() {
        let client = offline_client();

        let result = client.search_animes("   ", None, None).await;

        assert!(matches!(
            result,
            Err(ClientError::Invalid(ValidationError::KeywordRequired))
        ));
    }

    #[tokio::test]
    async fn when_signup_password_is_short_then_no_request_is_made() {
        let client = offline_client();

        let result = client
            .signup(&SignUpInput {
                username: "aki".to_string(),
                email: "aki@example.com".to_string(),
                password: "short".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(ClientError::Invalid(ValidationError::PasswordTooShort))
        ));
    }

    #[tokio::test]
    async fn when_login_email_is_malformed_then_no_request_is_made() {
        let client = offline_client();

        let result = client
            .login(&LoginInput {
                email: "not-an-email".to_string(),
                password: "whatever".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(ClientError::Invalid(ValidationError::EmailInvalid))
        ));
    }

    #[tokio::test]
    async fn when_list_page_is_zero_then_no_request_is_made() {
        let client = offline_client();

        let result = client.anime_list(0, 12).await;

        assert!(matches!(
            result,
            Err(ClientError::Invalid(ValidationError::PageOutOfRange))
        ));
    }
}
