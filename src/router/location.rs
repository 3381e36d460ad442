//! Parsed navigation targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `Location` keeps the full path exactly as requested, since the login
//! redirect must carry it back verbatim, alongside the decoded query pairs
//! used by prop extraction.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use std::borrow::Cow;

use serde::Serialize;

use super::error::NavigationError;

/// An in-app URL split into path, decoded query and hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
    hash: String,
    full_path: String,
}

impl Location {
    /// Parse an in-app URL such as `/report?report=Hello%20World`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidUrl`] if `url` does not start with `/`.
    pub fn parse(url: &str) -> Result<Self, NavigationError> {
        if !url.starts_with('/') {
            return Err(NavigationError::InvalidUrl(url.to_owned()));
        }

        let (before_hash, hash) = url.find('#').map_or((url, ""), |idx| url.split_at(idx));
        let (path, raw_query) = before_hash.split_once('?').unwrap_or((before_hash, ""));

        Ok(Self {
            path: path.to_owned(),
            query: parse_query(raw_query),
            hash: hash.to_owned(),
            full_path: url.to_owned(),
        })
    }

    /// Path portion, still percent-encoded.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path, query and hash exactly as requested.
    #[must_use]
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// First decoded value for `key`. A bare `?key` yields `Some("")`.
    #[must_use]
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Non-empty path segments, still percent-encoded.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }
}

/// Split a raw query string into decoded key/value pairs, keeping order.
#[must_use]
pub fn parse_query(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_query_component(key), decode_query_component(value))
        })
        .collect()
}

/// Decode one query component; `+` means space. Undecodable input is kept raw.
#[must_use]
pub fn decode_query_component(raw: &str) -> String {
    decode_component(&raw.replace('+', " "))
}

/// Percent-decode one component. Undecodable input is kept raw.
#[must_use]
pub fn decode_component(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_owned(),
    }
}

/// Percent-encode everything except unreserved characters.
#[must_use]
pub fn encode_component(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}
