use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct MenuItem {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Burger")]
    pub name: String,

    #[schema(example = "Beef patty, brioche bun", nullable = true)]
    pub description: Option<String>,

    #[schema(example = 10)]
    pub inventory: i64,

    #[schema(example = 9.5)]
    pub price: f64,

    #[schema(example = 1)]
    pub menu_id: i64,
}
