//! Request composition for the LibInsult API.
//!
//! The service accepts three closed parameter sets (request kind, response
//! format, language) plus an optional target. Everything in this module is
//! pure: a request is validated by construction and composes its URL
//! deterministically, with no I/O.
//!
//! URL shape: `{base}/{language}/{kind}.{format}?{query}` where the query
//! carries `who=<encoded target>` and `plural=on`, each only when applicable.

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::error::BarbError;

/// Production API base URL (no trailing slash).
pub const BASE_URL: &str = "https://insult.mattbas.org/api";

// =============================================================================
// Parameter enums
// =============================================================================

/// What the service should generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// A random negative adjective.
    Adjective,
    /// A full insult, optionally aimed at a target.
    #[default]
    Insult,
}

impl RequestKind {
    /// All kinds the service accepts.
    pub const ALL: &'static [Self] = &[Self::Adjective, Self::Insult];

    /// Path-segment spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adjective => "adjective",
            Self::Insult => "insult",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestKind {
    type Err = BarbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adjective" => Ok(Self::Adjective),
            "insult" => Ok(Self::Insult),
            other => Err(BarbError::InvalidRequestKind(other.to_string())),
        }
    }
}

/// Representation the response body is requested in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResponseFormat {
    /// Markup page.
    Html,
    /// Structured payload with error reporting.
    #[default]
    Json,
    /// Plain text.
    Txt,
}

impl ResponseFormat {
    /// All formats the service accepts.
    pub const ALL: &'static [Self] = &[Self::Html, Self::Json, Self::Txt];

    /// Extension spelling in the URL path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
            Self::Txt => "txt",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = BarbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "txt" => Ok(Self::Txt),
            other => Err(BarbError::InvalidFormat(other.to_string())),
        }
    }
}

/// Insult language.
///
/// The service currently only generates English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English.
    #[default]
    En,
}

impl Language {
    /// All languages the service offers.
    pub const ALL: &'static [Self] = &[Self::En];

    /// Path-segment spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = BarbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            other => Err(BarbError::InvalidLanguage(other.to_string())),
        }
    }
}

// =============================================================================
// Request
// =============================================================================

/// A validated request to the insult service.
///
/// The enum fields cannot hold out-of-set values, so a constructed request is
/// always composable. `who` and `plural` are carried unconditionally and
/// suppressed at composition time when they do not apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsultRequest {
    pub kind: RequestKind,
    pub format: ResponseFormat,
    pub language: Language,
    pub who: Option<String>,
    pub plural: bool,
}

impl InsultRequest {
    /// Create a request with defaults for language, target, and plurality.
    #[must_use]
    pub fn new(kind: RequestKind, format: ResponseFormat) -> Self {
        Self {
            kind,
            format,
            ..Self::default()
        }
    }

    /// Set the insult language.
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Aim the insult at someone.
    #[must_use]
    pub fn who(mut self, who: impl Into<String>) -> Self {
        self.who = Some(who.into());
        self
    }

    /// Treat the target as grammatically plural.
    #[must_use]
    pub fn plural(mut self, plural: bool) -> Self {
        self.plural = plural;
        self
    }

    /// Compose the production URL for this request.
    #[must_use]
    pub fn url(&self) -> String {
        self.url_with_base(BASE_URL)
    }

    /// Compose the URL against an alternate base (mirrors, mock servers).
    #[must_use]
    pub fn url_with_base(&self, base: &str) -> String {
        let mut url = format!(
            "{}/{}/{}.{}",
            base.trim_end_matches('/'),
            self.language.as_str(),
            self.kind.as_str(),
            self.format.as_str()
        );

        let query = self.query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        url
    }

    /// Encoded query string; empty when nothing applies.
    ///
    /// `who` and `plural` only make sense for insult requests, and `plural`
    /// only when a non-empty target was named.
    fn query_string(&self) -> String {
        let mut pairs = form_urlencoded::Serializer::new(String::new());

        if self.kind == RequestKind::Insult
            && let Some(who) = self.who.as_deref().filter(|w| !w.is_empty())
        {
            pairs.append_pair("who", who);
            if self.plural {
                pairs.append_pair("plural", "on");
            }
        }

        pairs.finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
