//! JSON Pointer strings (RFC 6901 shaped).
//!
//! Only the pointer *string* is modelled here. Nothing evaluates a pointer
//! against a document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `/`-separated pointer such as `/profile/addresses[2]/zip_code`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonPointer(String);

impl JsonPointer {
    /// The pointer to the root of the document.
    pub fn root() -> Self {
        JsonPointer("/".to_string())
    }

    /// Join already-escaped segments into a pointer. No segments gives `/`.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for segment in segments {
            out.push('/');
            out.push_str(segment.as_ref());
        }
        if out.is_empty() {
            return Self::root();
        }
        JsonPointer(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The raw segments after the leading `/`. The root pointer has one
    /// empty segment.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.strip_prefix('/').unwrap_or(&self.0).split('/')
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for JsonPointer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for JsonPointer {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for JsonPointer {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Escape one reference token: `~` becomes `~0`, `/` becomes `~1`.
pub fn escape_token(token: &str) -> String {
    if !token.contains('/') && !token.contains('~') {
        return token.to_string();
    }
    token.replace('~', "~0").replace('/', "~1")
}
