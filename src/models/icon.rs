use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::common::html::{attr, escape_html};
use crate::models::{IconRole, Markup};

/// Size and role configuration handed to an icon when it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    /// Externally defined class that sizes the icon.
    pub class: Cow<'static, str>,
    pub role: IconRole,
}

impl IconConfig {
    pub fn new(class: impl Into<Cow<'static, str>>, role: IconRole) -> Self {
        Self {
            class: class.into(),
            role,
        }
    }
}

/// Anything that can produce icon markup for a given configuration.
pub trait RenderIcon {
    fn render_icon(&self, config: &IconConfig) -> String;
}

/// Statically typed icon handle, resolved before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Icon {
    /// Embedded vector data.
    Svg { markup: Markup },
    /// An asset already resolved to a URL by the site build.
    Asset {
        src: Cow<'static, str>,
        #[serde(default)]
        alt: Cow<'static, str>,
    },
    /// A text or emoji glyph.
    Glyph { text: Cow<'static, str> },
}

impl Icon {
    pub const fn svg(markup: &'static str) -> Self {
        Self::Svg {
            markup: Markup::from_static(markup),
        }
    }

    pub fn asset(src: impl Into<Cow<'static, str>>, alt: impl Into<Cow<'static, str>>) -> Self {
        Self::Asset {
            src: src.into(),
            alt: alt.into(),
        }
    }

    pub fn glyph(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Glyph { text: text.into() }
    }
}

impl RenderIcon for Icon {
    fn render_icon(&self, config: &IconConfig) -> String {
        let attrs = format!(
            "{}{}",
            attr("class", &config.class),
            attr("role", config.role.as_str())
        );

        match self {
            Self::Svg { markup } => inject_svg_attrs(markup.as_str(), &attrs),
            Self::Asset { src, alt } => {
                format!("<img{}{}{}/>", attr("src", src), attr("alt", alt), attrs)
            }
            Self::Glyph { text } => format!("<span{}>{}</span>", attrs, escape_html(text)),
        }
    }
}

/// Adds `attrs` to the root `<svg` element. Markup without one is
/// returned unchanged.
fn inject_svg_attrs(svg: &str, attrs: &str) -> String {
    let Some(start) = find_root_svg(svg) else {
        return svg.to_string();
    };
    let insert_at = start + "<svg".len();

    let mut out = String::with_capacity(svg.len() + attrs.len());
    out.push_str(&svg[..insert_at]);
    out.push_str(attrs);
    out.push_str(&svg[insert_at..]);
    out
}

/// Offset of the first `<svg` tag outside comments, declarations and
/// processing instructions.
fn find_root_svg(svg: &str) -> Option<usize> {
    let mut pos = 0;
    while let Some(offset) = svg[pos..].find('<') {
        let start = pos + offset;
        let rest = &svg[start..];

        let skip_to = if rest.starts_with("<!--") {
            rest.find("-->").map(|end| end + "-->".len())
        } else if rest.starts_with("<?") {
            rest.find("?>").map(|end| end + "?>".len())
        } else if rest.starts_with("<!") {
            rest.find('>').map(|end| end + 1)
        } else if is_svg_tag(rest) {
            return Some(start);
        } else {
            Some(1)
        };

        // An unterminated comment hides the rest of the document.
        pos = start + skip_to?;
    }
    None
}

fn is_svg_tag(rest: &str) -> bool {
    rest.strip_prefix("<svg")
        .is_some_and(|after| match after.chars().next() {
            None | Some('>' | '/') => true,
            Some(c) => c.is_ascii_whitespace(),
        })
}
