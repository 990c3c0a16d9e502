use crate::models::{FeatureItem, FeatureList, Icon, Markup};

const MOUNTAIN_SVG: &str = include_str!("../../static/img/undraw_docusaurus_mountain.svg");
const TREE_SVG: &str = include_str!("../../static/img/undraw_docusaurus_tree.svg");
const REACT_SVG: &str = include_str!("../../static/img/undraw_docusaurus_react.svg");

/// The features shown on the Substrate documentation homepage.
pub fn substrate_features() -> FeatureList {
    FeatureList::new(vec![
        FeatureItem::new(
            "Bring your Own Tools",
            Icon::svg(MOUNTAIN_SVG),
            Markup::from_static(
                "Design, verify, and tapeout your chip with a tool suite of your choice \
                 using Substrate's extensible plugin system.",
            ),
        ),
        FeatureItem::new(
            "100% Performant Rust Code",
            Icon::svg(TREE_SVG),
            Markup::from_static(
                "Generators can be written entirely in Rust, providing high performance \
                 alongside memory safety and type checking.",
            ),
        ),
        FeatureItem::new(
            "Open Source",
            Icon::svg(REACT_SVG),
            Markup::from_static(
                "The core of Substrate is open source, meaning anyone can write a circuit \
                 generator without an expensive license.",
            ),
        ),
    ])
}
