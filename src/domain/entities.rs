use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_trim::{option_string_trim, string_trim};
use url::Url;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub abbrev: String,
    pub slug: String,
    pub crest: Option<HttpUrl>,
    pub colors: Option<Vec<Value>>,
    pub espn_url: Option<HttpUrl>,
    pub forza_url: Option<HttpUrl>,
}

impl Team {
    /// Overwrites every field that is present in the patch.
    pub fn apply(&mut self, patch: TeamPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(abbrev) = patch.abbrev {
            self.abbrev = abbrev;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(crest) = patch.crest {
            self.crest = Some(crest);
        }
        if let Some(colors) = patch.colors {
            self.colors = Some(colors);
        }
        if let Some(espn_url) = patch.espn_url {
            self.espn_url = Some(espn_url);
        }
        if let Some(forza_url) = patch.forza_url {
            self.forza_url = Some(forza_url);
        }
    }
}

/// Body of a team creation. Any identifier sent by the client is ignored.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TeamCreation {
    #[serde(deserialize_with = "string_trim")]
    pub name: String,
    #[serde(deserialize_with = "string_trim")]
    pub abbrev: String,
    #[serde(deserialize_with = "string_trim")]
    pub slug: String,
    pub crest: Option<HttpUrl>,
    pub colors: Option<Vec<Value>>,
    pub espn_url: Option<HttpUrl>,
    pub forza_url: Option<HttpUrl>,
}

impl TeamCreation {
    pub fn into_team(self, id: String) -> Team {
        Team {
            id,
            name: self.name,
            abbrev: self.abbrev,
            slug: self.slug,
            crest: self.crest,
            colors: self.colors,
            espn_url: self.espn_url,
            forza_url: self.forza_url,
        }
    }
}

/// Partial update of a team. Absent and null fields are left untouched and
/// never serialized, so the serialized form is exactly the `$set` payload.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct TeamPatch {
    #[serde(
        default,
        deserialize_with = "option_string_trim",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "option_string_trim",
        skip_serializing_if = "Option::is_none"
    )]
    pub abbrev: Option<String>,
    #[serde(
        default,
        deserialize_with = "option_string_trim",
        skip_serializing_if = "Option::is_none"
    )]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crest: Option<HttpUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub espn_url: Option<HttpUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forza_url: Option<HttpUrl>,
}

impl TeamPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Key used to point at a single team.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Slug(String),
}

impl Selector {
    pub fn key(&self) -> &str {
        match self {
            Selector::Id(id) => id,
            Selector::Slug(slug) => slug,
        }
    }

    pub fn matches(&self, team: &Team) -> bool {
        match self {
            Selector::Id(id) => team.id == *id,
            Selector::Slug(slug) => team.slug == *slug,
        }
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// An absolute `http` or `https` URL, kept exactly as it was sent.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct HttpUrl(String);

impl TryFrom<String> for HttpUrl {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.contains(char::is_whitespace) {
            return Err(format!("url {:?} must not contain whitespace", value));
        }
        let url = Url::parse(&value).map_err(|err| format!("invalid url {}: {}", value, err))?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(format!("expected an http url but found {}", value));
        }
        Ok(Self(value))
    }
}

impl From<HttpUrl> for String {
    fn from(value: HttpUrl) -> Self {
        value.0
    }
}
