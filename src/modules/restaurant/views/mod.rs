pub mod categories;
pub mod header;

use super::repository::Restaurant;
use serde::Serialize;

/// Field order is the render order and is kept when serialized.
#[derive(Serialize, Debug, PartialEq)]
pub struct MenuPage {
    pub header: header::HeaderView,
    pub categories: categories::CategoriesView,
}

pub fn render_page(restaurant: &Restaurant) -> MenuPage {
    let header = header::render(restaurant);
    let categories = categories::render(restaurant);

    MenuPage { header, categories }
}
