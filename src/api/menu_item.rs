use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{
    db::Storage,
    error::ApiError,
    model::{menu::Menu, menu_item::MenuItem},
    resolver::{Nested, Resolved, fetch},
    utils::{payload::JsonBody, validate::required},
};

const MISSING_FIELDS: &str = "missing required fields";

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MenuItemInput {
    #[schema(example = "Burger")]
    pub name: Option<String>,
    /// Optional; omitting it on update clears the stored description.
    #[schema(example = "Beef patty, brioche bun")]
    pub description: Option<String>,
    #[schema(example = 10)]
    pub inventory: Option<i64>,
    #[schema(example = 9.5)]
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuItemRequest {
    #[serde(rename = "menuItem")]
    pub menu_item: Option<MenuItemInput>,
}

#[derive(Serialize, ToSchema)]
pub struct MenuItemResponse {
    #[serde(rename = "menuItem")]
    pub menu_item: MenuItem,
}

#[derive(Serialize, ToSchema)]
pub struct MenuItemListResponse {
    #[serde(rename = "menuItems")]
    pub menu_items: Vec<MenuItem>,
}

struct MenuItemFields {
    name: String,
    description: Option<String>,
    inventory: i64,
    price: f64,
}

impl MenuItemRequest {
    fn validate(self) -> Result<MenuItemFields, ApiError> {
        let input = self.menu_item.unwrap_or_default();
        match (
            required(input.name),
            required(input.inventory),
            required(input.price),
        ) {
            (Some(name), Some(inventory), Some(price)) => Ok(MenuItemFields {
                name,
                description: input.description,
                inventory,
                price,
            }),
            _ => Err(ApiError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/menus/{menuId}/menu-items",
    params(("menuId", Path, description = "Menu ID")),
    responses(
        (status = 200, body = MenuItemListResponse),
        (status = 404, body = ErrorBody)
    ),
    tag = "MenuItem"
)]
pub async fn list_menu_items(
    storage: web::Data<Storage>,
    Resolved(menu): Resolved<Menu>,
) -> Result<HttpResponse, ApiError> {
    let menu_items: Vec<MenuItem> = storage
        .query(
            "SELECT * FROM MenuItem WHERE menu_id = ?",
            vec![menu.id.into()],
        )
        .await?;

    Ok(HttpResponse::Ok().json(MenuItemListResponse { menu_items }))
}

#[utoipa::path(
    post,
    path = "/api/menus/{menuId}/menu-items",
    params(("menuId", Path, description = "Menu ID")),
    request_body = MenuItemRequest,
    responses(
        (status = 201, body = MenuItemResponse),
        (status = 400, description = "Missing name, inventory or price", body = ErrorBody),
        (status = 404, body = ErrorBody)
    ),
    tag = "MenuItem"
)]
pub async fn create_menu_item(
    storage: web::Data<Storage>,
    Resolved(menu): Resolved<Menu>,
    payload: JsonBody<MenuItemRequest>,
) -> Result<HttpResponse, ApiError> {
    let fields = payload.decode()?.validate()?;

    let result = storage
        .execute(
            r#"
            INSERT INTO MenuItem (name, description, inventory, price, menu_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
            vec![
                fields.name.into(),
                fields.description.into(),
                fields.inventory.into(),
                fields.price.into(),
                menu.id.into(),
            ],
        )
        .await?;
    info!(
        menu_item_id = result.last_insert_id,
        menu_id = menu.id,
        "Menu item created"
    );

    let menu_item = fetch::<MenuItem>(&storage, result.last_insert_id).await?;
    Ok(HttpResponse::Created().json(MenuItemResponse { menu_item }))
}

#[utoipa::path(
    put,
    path = "/api/menus/{menuId}/menu-items/{menuItemId}",
    params(
        ("menuId", Path, description = "Menu ID"),
        ("menuItemId", Path, description = "Menu item ID, must belong to the menu")
    ),
    request_body = MenuItemRequest,
    responses(
        (status = 200, body = MenuItemResponse),
        (status = 400, body = ErrorBody),
        (status = 404, description = "Menu or menu item not found", body = ErrorBody)
    ),
    tag = "MenuItem"
)]
pub async fn update_menu_item(
    storage: web::Data<Storage>,
    path: Nested<Menu, MenuItem>,
    payload: JsonBody<MenuItemRequest>,
) -> Result<HttpResponse, ApiError> {
    let fields = payload.decode()?.validate()?;
    let menu_item_id = path.child.id;

    storage
        .execute(
            r#"
            UPDATE MenuItem
            SET name = ?, description = ?, inventory = ?, price = ?
            WHERE id = ?
            "#,
            vec![
                fields.name.into(),
                fields.description.into(),
                fields.inventory.into(),
                fields.price.into(),
                menu_item_id.into(),
            ],
        )
        .await?;

    let menu_item = fetch::<MenuItem>(&storage, menu_item_id).await?;
    Ok(HttpResponse::Ok().json(MenuItemResponse { menu_item }))
}

#[utoipa::path(
    delete,
    path = "/api/menus/{menuId}/menu-items/{menuItemId}",
    params(
        ("menuId", Path, description = "Menu ID"),
        ("menuItemId", Path, description = "Menu item ID, must belong to the menu")
    ),
    responses(
        (status = 204, description = "Menu item deleted"),
        (status = 404, body = ErrorBody)
    ),
    tag = "MenuItem"
)]
pub async fn delete_menu_item(
    storage: web::Data<Storage>,
    path: Nested<Menu, MenuItem>,
) -> Result<HttpResponse, ApiError> {
    storage
        .execute("DELETE FROM MenuItem WHERE id = ?", vec![path.child.id.into()])
        .await?;
    info!(menu_item_id = path.child.id, "Menu item deleted");

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_optional() {
        let req: MenuItemRequest = serde_json::from_value(serde_json::json!({
            "menuItem": { "name": "Burger", "inventory": 10, "price": 9.5 }
        }))
        .unwrap();
        let fields = req.validate().unwrap();
        assert_eq!(fields.description, None);
        assert_eq!(fields.inventory, 10);
    }

    #[test]
    fn empty_name_is_rejected() {
        let req: MenuItemRequest = serde_json::from_value(serde_json::json!({
            "menuItem": { "name": "", "inventory": 10, "price": 9.5 }
        }))
        .unwrap();
        assert_eq!(req.validate().err().unwrap().to_string(), MISSING_FIELDS);
    }
}
