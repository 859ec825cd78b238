// Request paths relative to the gateway origin, built as pure functions so
// the exact wire strings are testable without a network.

pub const SIGNUP: &str = "api/signup";
pub const LOGIN: &str = "api/login";
pub const LOGOUT: &str = "api/logout";
pub const ME: &str = "api/me";
pub const REVIEWS: &str = "api/reviews";
pub const MY_REVIEWS: &str = "api/me/reviews";
pub const RECENT_REVIEWS: &str = "api/reviews/recent";

pub fn anime_list(page: u32, page_size: u32) -> String {
    format!("api/animes?page={page}&pageSize={page_size}")
}

pub fn anime_search(keyword: &str, limit: u32, cursor: Option<&str>) -> String {
    let mut path = format!(
        "api/animes/search?q={}&limit={limit}",
        percent_encode(keyword)
    );
    if let Some(cursor) = cursor {
        path.push_str("&cursor=");
        path.push_str(&percent_encode(cursor));
    }
    path
}

pub fn anime_detail(annict_id: i64) -> String {
    format!("api/animes/{annict_id}")
}

pub fn reviews_by_anime(anime_id: i64) -> String {
    format!("api/reviews?anime_id={anime_id}")
}

// RFC 3986 unreserved characters pass through; everything else is escaped.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
