use super::repository::{Error, MenuCategory, Product, Restaurant, RestaurantLookup};
use crate::types::{AppContext, AppEnvironment, Context};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::types::{BigDecimal, Json};
use std::str::FromStr;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

pub fn product(id: &str, name: &str, price: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} from the oven", name),
        price: BigDecimal::from_str(price).unwrap(),
        image_url: format!("https://cdn.example.com/products/{}.png", id),
        ingredients: vec!["flour".to_string(), "tomato".to_string()],
    }
}

pub fn restaurant(slug: &str) -> Restaurant {
    restaurant_with(
        slug,
        vec![
            MenuCategory {
                id: "cat-pizzas".to_string(),
                name: "Pizzas".to_string(),
                products: vec![
                    product("prod-margherita", "Margherita", "39.90"),
                    product("prod-pepperoni", "Pepperoni", "44.50"),
                ],
            },
            MenuCategory {
                id: "cat-drinks".to_string(),
                name: "Drinks".to_string(),
                products: vec![product("prod-lemonade", "Lemonade", "8.00")],
            },
        ],
    )
}

pub fn restaurant_with(slug: &str, menu_categories: Vec<MenuCategory>) -> Restaurant {
    Restaurant {
        id: format!("rest-{}", slug),
        name: "Pizza Place".to_string(),
        slug: slug.to_string(),
        description: "Wood-fired pizza".to_string(),
        avatar_image_url: "https://cdn.example.com/avatar.png".to_string(),
        cover_image_url: "https://cdn.example.com/cover.png".to_string(),
        menu_categories: Json(menu_categories),
        created_at: NaiveDate::from_ymd_opt(2024, 10, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
        updated_at: None,
    }
}

enum Outcome {
    Found(Restaurant),
    Missing,
    Failing,
}

pub struct StubLookup {
    outcome: Outcome,
    calls: AtomicUsize,
    last_slug: Mutex<Option<String>>,
}

impl StubLookup {
    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_slug: Mutex::new(None),
        }
    }

    /// Answers every slug that matches the restaurant's own slug.
    pub fn with(restaurant: Restaurant) -> Self {
        Self::new(Outcome::Found(restaurant))
    }

    pub fn empty() -> Self {
        Self::new(Outcome::Missing)
    }

    pub fn failing() -> Self {
        Self::new(Outcome::Failing)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_slug(&self) -> Option<String> {
        self.last_slug.lock().unwrap().clone()
    }
}

#[async_trait]
impl RestaurantLookup for StubLookup {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Restaurant>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_slug.lock().unwrap() = Some(slug.to_string());

        match &self.outcome {
            Outcome::Found(restaurant) if restaurant.slug == slug => Ok(Some(restaurant.clone())),
            Outcome::Found(_) | Outcome::Missing => Ok(None),
            Outcome::Failing => Err(Error::UnexpectedError),
        }
    }
}

pub fn context(lookup: Arc<StubLookup>) -> Arc<Context> {
    Arc::new(Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            environment: AppEnvironment::Development,
            port: 8000,
            url: "http://127.0.0.1:8000".to_string(),
        },
        restaurants: lookup,
    })
}
