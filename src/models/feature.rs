use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::models::{Icon, Markup};

/// One entry of the features section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub title: Cow<'static, str>,
    pub icon: Icon,
    #[serde(default)]
    pub description: Markup,
}

impl FeatureItem {
    pub fn new(
        title: impl Into<Cow<'static, str>>,
        icon: Icon,
        description: impl Into<Markup>,
    ) -> Self {
        Self {
            title: title.into(),
            icon,
            description: description.into(),
        }
    }

    /// Entries without a visible title are not rendered.
    pub fn is_renderable(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Ordered, immutable list of features. Order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureList(Vec<FeatureItem>);

impl FeatureList {
    pub fn new(items: Vec<FeatureItem>) -> Self {
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureItem> {
        self.0.iter()
    }

    pub fn renderable(&self) -> impl Iterator<Item = &FeatureItem> + '_ {
        self.0.iter().filter(|item| item.is_renderable())
    }
}

impl From<Vec<FeatureItem>> for FeatureList {
    fn from(items: Vec<FeatureItem>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a FeatureList {
    type Item = &'a FeatureItem;
    type IntoIter = std::slice::Iter<'a, FeatureItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
