use askama::Template;

#[derive(Template)]
#[template(path = "features/column.html")]
pub struct ColumnTemplate<'a> {
    pub column_class: String,
    pub icon: String,
    pub title: &'a str,
    pub description: &'a str,
}

#[derive(Template)]
#[template(path = "features/section.html")]
pub struct SectionTemplate<'a> {
    pub section_class: &'a str,
    pub columns: Vec<String>,
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub stylesheets: &'a [String],
    pub section: String,
}
