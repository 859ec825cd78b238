// Classification of resolved proxy paths. Matching is on the exact joined
// path string, so `login/extra` or `v2/login` stay plain passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    // login / signup: a successful response may mint the session cookie.
    CredentialMint,
    // logout: a successful response clears the session cookie.
    CredentialClear,
    // Everything else is forwarded untouched.
    Passthrough,
}

pub fn classify(path: &str) -> RouteClass {
    match path {
        "login" | "signup" => RouteClass::CredentialMint,
        "logout" => RouteClass::CredentialClear,
        _ => RouteClass::Passthrough,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_path_is_login_or_signup_then_route_mints_credentials() {
        assert_eq!(classify("login"), RouteClass::CredentialMint);
        assert_eq!(classify("signup"), RouteClass::CredentialMint);
    }

    #[test]
    fn when_path_is_logout_then_route_clears_credentials() {
        assert_eq!(classify("logout"), RouteClass::CredentialClear);
    }

    #[test]
    fn when_path_merely_contains_a_special_segment_then_route_is_passthrough() {
        assert_eq!(classify("login/extra"), RouteClass::Passthrough);
        assert_eq!(classify("v2/login"), RouteClass::Passthrough);
        assert_eq!(classify("animes"), RouteClass::Passthrough);
    }
}
