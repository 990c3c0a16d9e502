//! Server-side rendering of the features section.

mod styles;
mod templates;

use askama::Template;

use crate::common::SiteError;
use crate::models::{FeatureItem, FeatureList, RenderIcon};

pub use styles::{PageMeta, SectionStyles};
use templates::{ColumnTemplate, PageTemplate, SectionTemplate};

/// Renders one feature column: icon above title and description.
///
/// Returns `Ok(None)` for an entry without a title.
pub fn render_feature(
    item: &FeatureItem,
    styles: &SectionStyles,
) -> Result<Option<String>, SiteError> {
    if !item.is_renderable() {
        log::debug!("Skipping feature with empty title");
        return Ok(None);
    }

    let column = ColumnTemplate {
        column_class: styles.column_class(),
        icon: item.icon.render_icon(&styles.icon_config()),
        title: &item.title,
        description: item.description.as_str(),
    };

    Ok(Some(column.render()?))
}

/// Renders every feature, in list order, inside the section's
/// container/row grid. An empty list still yields the grid wrapper.
pub fn render_section(features: &FeatureList, styles: &SectionStyles) -> Result<String, SiteError> {
    let mut columns = Vec::with_capacity(features.len());
    for item in features {
        if let Some(column) = render_feature(item, styles)? {
            columns.push(column);
        }
    }

    log::debug!(
        "Rendered {} of {} features",
        columns.len(),
        features.len()
    );

    let section = SectionTemplate {
        section_class: &styles.section_class,
        columns,
    };

    Ok(section.render()?)
}

/// Renders a standalone HTML document hosting the section.
pub fn render_page(
    features: &FeatureList,
    styles: &SectionStyles,
    page: &PageMeta,
) -> Result<String, SiteError> {
    let section = render_section(features, styles)?;

    let document = PageTemplate {
        title: &page.title,
        description: &page.description,
        stylesheets: &page.stylesheets,
        section,
    };

    Ok(document.render()?)
}
