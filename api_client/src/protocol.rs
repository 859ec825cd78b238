use serde::{Deserialize, Serialize};

// Wire shapes owned by the backend; field renames follow its JSON tags.
// Timestamps stay as strings since nothing here does date arithmetic.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anime {
    pub id: i64,
    // Identifier in the upstream catalog, distinct from our row id.
    pub annict_id: i64,
    pub title: String,
    pub year: i32,
    pub image_url: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeStats {
    pub anime_id: i64,
    pub review_count: i64,
    pub avg_score: f64,
}

// Catalog row joined with its aggregate review stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeWithStats {
    pub id: i64,
    pub annict_id: i64,
    pub title: String,
    pub year: i32,
    pub image_url: Option<String>,
    pub created_at: String,
    pub review_count: i64,
    pub avg_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_page: u32,
}

// Search hit from the upstream catalog, not yet cached locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnictWork {
    pub annict_id: i64,
    pub title: String,
    pub season_year: Option<i32>,
    pub image: WorkImage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkImage {
    pub recommended_image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub anime_id: i64,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: String,
}

// Review joined with the anime it scores, for feed/my-page views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithAnime {
    pub id: i64,
    pub user_id: i64,
    pub anime_id: i64,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: String,
    pub anime_title: String,
    pub anime_year: i32,
    pub anime_image_url: Option<String>,
}

// ---- request payloads ----

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    pub annict_id: i64,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

// ---- response envelopes ----

// login and signup share the same shape (the gateway strips the token).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimeListResponse {
    pub data: Vec<AnimeWithStats>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeSearchResponse {
    pub data: Vec<AnnictWork>,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimeDetailResponse {
    pub anime: Anime,
    // Null until the first review caches the anime locally.
    pub stats: Option<AnimeStats>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewListResponse {
    pub data: Vec<Review>,
}

// my-reviews and recent-reviews both return reviews joined with anime
// metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewFeedResponse {
    pub data: Vec<ReviewWithAnime>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewCreateResponse {
    pub message: String,
    pub review: Review,
}
