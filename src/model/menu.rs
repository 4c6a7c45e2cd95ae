use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Menu {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Lunch")]
    pub title: String,
}
