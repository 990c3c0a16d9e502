use homepage_features::models::FeatureList;
use homepage_features::render::{PageMeta, SectionStyles};

#[derive(Clone)]
pub struct AppState {
    pub features: FeatureList,
    pub styles: SectionStyles,
    pub page: PageMeta,
}
