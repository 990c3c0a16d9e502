mod common;

#[cfg(test)]
pub mod model_tests {
    use super::common::*;

    use homepage_features::models::*;

    fn config() -> IconConfig {
        IconConfig::new("featureSvg", IconRole::Img)
    }

    #[test]
    fn test_svg_icon_gets_class_and_role_on_root_element() {
        let icon = Icon::svg("<svg viewBox=\"0 0 1 1\"><path d=\"M0 0\"/></svg>");

        assert_eq!(
            icon.render_icon(&config()),
            "<svg class=\"featureSvg\" role=\"img\" viewBox=\"0 0 1 1\"><path d=\"M0 0\"/></svg>"
        );
    }

    #[test]
    fn test_svg_icon_skips_xml_prolog() {
        let icon = Icon::svg("<?xml version=\"1.0\"?>\n<svg><g/></svg>");

        assert_eq!(
            icon.render_icon(&config()),
            "<?xml version=\"1.0\"?>\n<svg class=\"featureSvg\" role=\"img\"><g/></svg>"
        );
    }

    #[test]
    fn test_svg_icon_ignores_svg_text_in_leading_comment() {
        let icon = Icon::svg("<!-- exported <svg> asset --><svg viewBox=\"0 0 1 1\"></svg>");

        assert_eq!(
            icon.render_icon(&config()),
            "<!-- exported <svg> asset --><svg class=\"featureSvg\" role=\"img\" viewBox=\"0 0 1 1\"></svg>"
        );
    }

    #[test]
    fn test_svg_icon_skips_doctype_and_lookalike_tags() {
        let icon = Icon::svg(
            "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\"><svgx/><svg>\n</svg>",
        );

        assert_eq!(
            icon.render_icon(&config()),
            "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\"><svgx/><svg class=\"featureSvg\" role=\"img\">\n</svg>"
        );
    }

    #[test]
    fn test_svg_icon_with_unterminated_comment_is_unchanged() {
        let icon = Icon::svg("<!-- <svg></svg>");
        assert_eq!(icon.render_icon(&config()), "<!-- <svg></svg>");
    }

    #[test]
    fn test_svg_icon_without_svg_element_is_unchanged() {
        let icon = Icon::svg("<img src=\"x.png\"/>");
        assert_eq!(icon.render_icon(&config()), "<img src=\"x.png\"/>");
    }

    #[test]
    fn test_asset_icon_renders_img() {
        let icon = Icon::asset("/img/mountain.svg", "Mountains");

        assert_eq!(
            icon.render_icon(&config()),
            "<img src=\"/img/mountain.svg\" alt=\"Mountains\" class=\"featureSvg\" role=\"img\"/>"
        );
    }

    #[test]
    fn test_glyph_icon_is_escaped() {
        let icon = Icon::glyph("<&>");
        let config = IconConfig::new("glyph", IconRole::Presentation);

        assert_eq!(
            icon.render_icon(&config),
            "<span class=\"glyph\" role=\"presentation\">&lt;&amp;&gt;</span>"
        );
    }

    #[test]
    fn test_icon_config_class_is_escaped() {
        let icon = Icon::glyph("x");
        let config = IconConfig::new("a\"b", IconRole::Img);

        assert!(icon.render_icon(&config).contains("class=\"a&quot;b\""));
    }

    #[test]
    fn test_icon_role_from_str() {
        assert_eq!("img".parse::<IconRole>(), Ok(IconRole::Img));
        assert_eq!("IMG".parse::<IconRole>(), Ok(IconRole::Img));
        assert_eq!("presentation".parse::<IconRole>(), Ok(IconRole::Presentation));
        assert_eq!("none".parse::<IconRole>(), Ok(IconRole::Presentation));
        assert!("button".parse::<IconRole>().is_err());
        assert_eq!(IconRole::default(), IconRole::Img);
    }

    #[test]
    fn test_feature_item_is_renderable() {
        assert!(feature("Title", "").is_renderable());
        assert!(!feature("", "text").is_renderable());
        assert!(!feature("  ", "text").is_renderable());
    }

    #[test]
    fn test_feature_list_renderable_keeps_order() {
        let list = FeatureList::new(vec![
            feature("B", ""),
            feature("", ""),
            feature("A", ""),
        ]);

        let titles: Vec<&str> = list.renderable().map(|f| &*f.title).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_substrate_features_catalog() {
        let list = substrate_features();
        let titles: Vec<&str> = list.iter().map(|f| &*f.title).collect();

        assert_eq!(
            titles,
            vec!["Bring your Own Tools", "100% Performant Rust Code", "Open Source"]
        );
        assert!(list
            .iter()
            .all(|f| !f.description.is_empty() && matches!(f.icon, Icon::Svg { .. })));
        assert!(list.iter().next().unwrap().description.as_str().starts_with(
            "Design, verify, and tapeout your chip with a tool suite of your choice using"
        ));
    }

    #[test]
    fn test_substrate_icons_render_with_config() {
        for item in &substrate_features() {
            let html = item.icon.render_icon(&config());
            assert!(
                html.starts_with("<svg class=\"featureSvg\" role=\"img\""),
                "{}",
                item.title
            );
        }
    }

    #[test]
    fn test_feature_item_deserializes_each_icon_kind() {
        let json = r#"[
            {"title": "Svg", "icon": {"kind": "svg", "markup": "<svg></svg>"}, "description": "<b>a</b>"},
            {"title": "Asset", "icon": {"kind": "asset", "src": "/img/a.svg"}},
            {"title": "Glyph", "icon": {"kind": "glyph", "text": "⚡"}, "description": ""}
        ]"#;

        let list: FeatureList = serde_json::from_str(json).unwrap();
        let items: Vec<&FeatureItem> = list.iter().collect();

        assert_eq!(items[0].icon, Icon::svg("<svg></svg>"));
        assert_eq!(items[0].description.as_str(), "<b>a</b>");
        assert_eq!(items[1].icon, Icon::asset("/img/a.svg", ""));
        assert!(items[1].description.is_empty());
        assert_eq!(items[2].icon, Icon::glyph("⚡"));
    }

    #[test]
    fn test_feature_item_rejects_unknown_icon_kind() {
        let json = r#"{"title": "X", "icon": {"kind": "bitmap", "data": ""}}"#;
        assert!(serde_json::from_str::<FeatureItem>(json).is_err());
    }
}
