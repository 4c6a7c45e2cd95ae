use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Jane Doe",
        "position": "Line Cook",
        "wage": 18.5,
        "is_current_employee": true
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = "Line Cook")]
    pub position: String,

    #[schema(example = 18.5)]
    pub wage: f64,

    /// Cleared instead of deleting the row.
    #[schema(example = true)]
    pub is_current_employee: bool,
}
