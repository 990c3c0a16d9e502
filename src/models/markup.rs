use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A trusted HTML fragment. It is emitted as-is, never escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(Cow<'static, str>);

impl Markup {
    pub const fn from_static(html: &'static str) -> Self {
        Self(Cow::Borrowed(html))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&'static str> for Markup {
    fn from(html: &'static str) -> Self {
        Self::from_static(html)
    }
}

impl From<String> for Markup {
    fn from(html: String) -> Self {
        Self(Cow::Owned(html))
    }
}

impl std::fmt::Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
