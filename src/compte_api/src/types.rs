use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("invalid base url: must be an absolute http(s) url (e.g: http://localhost:8082)")]
    BaseUrl,
    #[error("invalid account type: must be one of: courant, epargne (aliases: current, épargne, savings)")]
    TypeCompte,
}

/// Root URL of the backend, without trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);
impl BaseUrl {
    pub fn new(s: &str) -> Result<Self, ValueError> {
        let t = s.trim().trim_end_matches('/');
        let rest = t
            .strip_prefix("http://")
            .or_else(|| t.strip_prefix("https://"))
            .ok_or(ValueError::BaseUrl)?;
        if rest.is_empty() || rest.starts_with('/') || rest.contains(char::is_whitespace) {
            return Err(ValueError::BaseUrl);
        }
        reqwest::Url::parse(t).map_err(|_| ValueError::BaseUrl)?;
        Ok(Self(t.into()))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl FromStr for BaseUrl {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
