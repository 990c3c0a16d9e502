use leptos::prelude::*;

use super::Feature;
use crate::models::FeatureList;
use crate::render::SectionStyles;

/// Features section: one column per titled entry, in list order.
#[component]
pub fn HomepageFeatures(
    #[prop(into)] features: FeatureList,
    #[prop(optional)] styles: SectionStyles,
) -> impl IntoView {
    let section_class = styles.section_class.to_string();
    let columns = features
        .renderable()
        .cloned()
        .map(|item| {
            let styles = styles.clone();
            view! { <Feature item=item styles=styles/> }
        })
        .collect_view();

    view! {
        <section class=section_class>
            <div class="container">
                <div class="row">{columns}</div>
            </div>
        </section>
    }
}
