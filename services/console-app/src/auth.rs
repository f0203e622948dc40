//! Access token plumbing
//!
//! Token issuance belongs to the external identity provider named by the
//! endpoint document; the console only reads the token handed back on the
//! implicit-flow callback fragment.

/// Bearer token for API calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Auth {
    access_token: Option<String>,
}

impl Auth {
    pub fn new(access_token: Option<String>) -> Self {
        Self { access_token }
    }

    /// Parse `access_token` out of a `#key=value&...` location fragment
    pub fn from_fragment(fragment: &str) -> Self {
        let access_token = fragment
            .trim_start_matches('#')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "access_token")
            .map(|(_, value)| value.to_string())
            .filter(|value| !value.is_empty());
        Self { access_token }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Token sent as the bearer header; empty when none was issued
    pub fn token(&self) -> String {
        self.access_token.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_access_token_from_fragment() {
        let auth = Auth::from_fragment("#access_token=abc123&token_type=Bearer&expires_in=300");
        assert_eq!(auth.access_token(), Some("abc123"));
    }

    #[test]
    fn ignores_other_keys() {
        let auth = Auth::from_fragment("#state=xyz&id_token=abc");
        assert_eq!(auth.access_token(), None);
    }

    #[test]
    fn empty_fragment_has_no_token() {
        assert_eq!(Auth::from_fragment("").access_token(), None);
        assert_eq!(Auth::from_fragment("#").access_token(), None);
        assert_eq!(Auth::from_fragment("#access_token=").access_token(), None);
    }

    #[test]
    fn token_is_empty_string_when_absent() {
        assert_eq!(Auth::default().token(), "");
        assert_eq!(
            Auth::new(Some("abc".to_string())).token(),
            "abc".to_string()
        );
    }
}
