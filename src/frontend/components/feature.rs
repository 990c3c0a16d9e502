use leptos::prelude::*;

use crate::models::{FeatureItem, RenderIcon};
use crate::render::SectionStyles;

/// One feature column. Renders nothing for an entry without a title.
#[component]
pub fn Feature(item: FeatureItem, #[prop(optional)] styles: SectionStyles) -> impl IntoView {
    if !item.is_renderable() {
        log::debug!("Skipping feature with empty title");
        None
    } else {
        let icon = item.icon.render_icon(&styles.icon_config());
        let title = item.title.into_owned();
        let description = item.description.to_string();

        Some(view! {
            <div class=styles.column_class()>
                <div class="text--center" inner_html=icon></div>
                <div class="text--center padding-horiz--md">
                    <h3>{title}</h3>
                    <p inner_html=description></p>
                </div>
            </div>
        })
    }
}
