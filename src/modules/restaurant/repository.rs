use crate::utils::database::DatabaseConnection;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::{BigDecimal, Json};
use sqlx::PgExecutor;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image_url: String,
    pub ingredients: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub products: Vec<Product>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub avatar_image_url: String,
    pub cover_image_url: String,
    pub menu_categories: Json<Vec<MenuCategory>>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait RestaurantLookup: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Restaurant>, Error>;
}

pub async fn find_by_slug<'e, E: PgExecutor<'e>>(
    e: E,
    slug: &str,
) -> Result<Option<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>(
        "
            SELECT
                restaurants.id,
                restaurants.name,
                restaurants.slug,
                restaurants.description,
                restaurants.avatar_image_url,
                restaurants.cover_image_url,
                COALESCE(
                    (
                        SELECT
                            JSONB_AGG(
                                JSONB_BUILD_OBJECT(
                                    'id', menu_categories.id,
                                    'name', menu_categories.name,
                                    'products', COALESCE(
                                        (
                                            SELECT
                                                JSONB_AGG(
                                                    JSONB_BUILD_OBJECT(
                                                        'id', products.id,
                                                        'name', products.name,
                                                        'description', products.description,
                                                        'price', products.price::TEXT,
                                                        'image_url', products.image_url,
                                                        'ingredients', TO_JSONB(products.ingredients)
                                                    )
                                                    ORDER BY products.name
                                                )
                                            FROM products
                                            WHERE products.menu_category_id = menu_categories.id
                                        ),
                                        '[]'::JSONB
                                    )
                                )
                                ORDER BY menu_categories.created_at, menu_categories.id
                            )
                        FROM menu_categories
                        WHERE menu_categories.restaurant_id = restaurants.id
                    ),
                    '[]'::JSONB
                ) AS menu_categories,
                restaurants.created_at,
                restaurants.updated_at
            FROM restaurants
            WHERE restaurants.slug = $1
        ",
    )
    .bind(slug)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch restaurant by slug: {}",
            err
        );
        Error::UnexpectedError
    })
}

pub struct PgRestaurantRepository {
    db_conn: DatabaseConnection,
}

impl PgRestaurantRepository {
    pub fn new(db_conn: DatabaseConnection) -> Self {
        Self { db_conn }
    }
}

#[async_trait]
impl RestaurantLookup for PgRestaurantRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Restaurant>, Error> {
        find_by_slug(&self.db_conn.pool, slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn aggregated_menu_json_maps_onto_categories() {
        let aggregated = json!([
            {
                "id": "cat-pizzas",
                "name": "Pizzas",
                "products": [
                    {
                        "id": "prod-margherita",
                        "name": "Margherita",
                        "description": "Tomato and basil",
                        "price": "39.90",
                        "image_url": "https://cdn.example.com/margherita.png",
                        "ingredients": ["flour", "tomato", "basil"]
                    }
                ]
            },
            {
                "id": "cat-desserts",
                "name": "Desserts",
                "products": []
            }
        ]);

        let categories = serde_json::from_value::<Vec<MenuCategory>>(aggregated).unwrap();

        assert_eq!(categories.len(), 2);
        let margherita = &categories[0].products[0];
        assert_eq!(margherita.price, BigDecimal::from_str("39.90").unwrap());
        assert_eq!(margherita.ingredients, vec!["flour", "tomato", "basil"]);
        assert_eq!(categories[1].name, "Desserts");
        assert!(categories[1].products.is_empty());
    }

    #[test]
    fn restaurant_without_categories_maps_to_an_empty_menu() {
        let categories = serde_json::from_value::<Vec<MenuCategory>>(json!([])).unwrap();

        assert!(categories.is_empty());
    }

    #[test]
    fn price_keeps_its_decimal_scale_through_a_round_trip() {
        let product = serde_json::from_value::<Product>(json!({
            "id": "prod-lemonade",
            "name": "Lemonade",
            "description": "Fresh",
            "price": "8.00",
            "image_url": "https://cdn.example.com/lemonade.png",
            "ingredients": []
        }))
        .unwrap();

        assert_eq!(serde_json::to_value(&product).unwrap()["price"], "8.00");
    }
}
