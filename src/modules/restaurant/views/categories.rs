use crate::modules::restaurant::repository::{MenuCategory, Product, Restaurant};
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RestaurantSummary {
    pub name: String,
    pub description: String,
    pub avatar_image_url: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    pub products: Vec<Product>,
}

impl From<&MenuCategory> for CategoryView {
    fn from(category: &MenuCategory) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            products: category.products.clone(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CategoriesView {
    pub restaurant: RestaurantSummary,
    pub categories: Vec<CategoryView>,
    pub selected_category_id: Option<String>,
}

/// The first category is selected; a menu without categories selects none.
pub fn render(restaurant: &Restaurant) -> CategoriesView {
    let categories = restaurant
        .menu_categories
        .0
        .iter()
        .map(CategoryView::from)
        .collect::<Vec<_>>();

    CategoriesView {
        restaurant: RestaurantSummary {
            name: restaurant.name.clone(),
            description: restaurant.description.clone(),
            avatar_image_url: restaurant.avatar_image_url.clone(),
        },
        selected_category_id: categories.first().map(|category| category.id.clone()),
        categories,
    }
}
