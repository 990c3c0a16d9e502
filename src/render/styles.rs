use std::borrow::Cow;

use crate::models::{IconConfig, IconRole};

/// Class names the section references. Their rules live in an external
/// stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStyles {
    pub section_class: Cow<'static, str>,
    pub icon_class: Cow<'static, str>,
    /// Columns out of the 12-column grid taken by one feature.
    pub column_span: u8,
    pub icon_role: IconRole,
}

impl SectionStyles {
    pub const DEFAULT_SECTION_CLASS: &'static str = "features";
    pub const DEFAULT_ICON_CLASS: &'static str = "featureSvg";
    pub const DEFAULT_COLUMN_SPAN: u8 = 4;

    pub fn icon_config(&self) -> IconConfig {
        IconConfig::new(self.icon_class.clone(), self.icon_role)
    }

    pub fn column_class(&self) -> String {
        format!("col col--{}", self.column_span)
    }
}

impl Default for SectionStyles {
    fn default() -> Self {
        Self {
            section_class: Cow::Borrowed(Self::DEFAULT_SECTION_CLASS),
            icon_class: Cow::Borrowed(Self::DEFAULT_ICON_CLASS),
            column_span: Self::DEFAULT_COLUMN_SPAN,
            icon_role: IconRole::default(),
        }
    }
}

/// Document-level metadata for the page hosting the section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub stylesheets: Vec<String>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Substrate".to_string(),
            description: "Substrate is a framework for writing analog and mixed-signal circuit generators in Rust."
                .to_string(),
            stylesheets: vec!["/static/css/features.css".to_string()],
        }
    }
}
