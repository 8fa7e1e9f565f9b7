use crate::modules::restaurant::repository::Restaurant;
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HeaderView {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub avatar_image_url: String,
    pub cover_image_url: String,
}

pub fn render(restaurant: &Restaurant) -> HeaderView {
    HeaderView {
        name: restaurant.name.clone(),
        slug: restaurant.slug.clone(),
        description: restaurant.description.clone(),
        avatar_image_url: restaurant.avatar_image_url.clone(),
        cover_image_url: restaurant.cover_image_url.clone(),
    }
}
