use homepage_features::models::*;

pub const MOUNTAIN: &str = "<svg viewBox=\"0 0 10 10\"><title>A</title></svg>";
pub const TREE: &str = "<svg viewBox=\"0 0 10 10\"><title>B</title></svg>";
pub const REACT: &str = "<svg viewBox=\"0 0 10 10\"><title>C</title></svg>";

pub fn feature(title: &'static str, description: &'static str) -> FeatureItem {
    FeatureItem::new(title, Icon::glyph("*"), description)
}

pub fn get_three_features() -> FeatureList {
    FeatureList::new(vec![
        FeatureItem::new(
            "Bring your Own Tools",
            Icon::svg(MOUNTAIN),
            "Design, verify, and tapeout...",
        ),
        FeatureItem::new(
            "100% Performant Code",
            Icon::svg(TREE),
            "Generators can be written entirely...",
        ),
        FeatureItem::new(
            "Open Source",
            Icon::svg(REACT),
            "The core ... is open source...",
        ),
    ])
}

pub fn get_numbered_features(n: usize) -> FeatureList {
    let items = (0..n)
        .map(|i| {
            FeatureItem::new(
                format!("Feature {i:02}"),
                Icon::glyph("*"),
                format!("Description {i:02}"),
            )
        })
        .collect();

    FeatureList::new(items)
}

/// Byte offsets of each needle in `haystack`, panicking on a miss.
pub fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            haystack
                .find(needle)
                .unwrap_or_else(|| panic!("{needle:?} not found in output"))
        })
        .collect()
}

pub fn column_count(html: &str, span: u8) -> usize {
    html.matches(&format!("class=\"col col--{span}\"")).count()
}
