use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{
    db::Storage,
    error::ApiError,
    model::{menu::Menu, menu_item::MenuItem},
    resolver::{Resolved, fetch},
    utils::{payload::JsonBody, validate::required},
};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MenuInput {
    #[schema(example = "Lunch")]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuRequest {
    pub menu: Option<MenuInput>,
}

impl MenuRequest {
    fn title(self) -> Result<String, ApiError> {
        required(self.menu.unwrap_or_default().title)
            .ok_or_else(|| ApiError::Validation("title is required".to_string()))
    }
}

#[derive(Serialize, ToSchema)]
pub struct MenuResponse {
    pub menu: Menu,
}

#[derive(Serialize, ToSchema)]
pub struct MenuListResponse {
    pub menus: Vec<Menu>,
}

#[utoipa::path(
    get,
    path = "/api/menus",
    responses((status = 200, body = MenuListResponse)),
    tag = "Menu"
)]
pub async fn list_menus(storage: web::Data<Storage>) -> Result<HttpResponse, ApiError> {
    let menus: Vec<Menu> = storage.query("SELECT * FROM Menu", vec![]).await?;
    Ok(HttpResponse::Ok().json(MenuListResponse { menus }))
}

#[utoipa::path(
    post,
    path = "/api/menus",
    request_body = MenuRequest,
    responses(
        (status = 201, body = MenuResponse),
        (status = 400, description = "title is required", body = ErrorBody)
    ),
    tag = "Menu"
)]
pub async fn create_menu(
    storage: web::Data<Storage>,
    payload: JsonBody<MenuRequest>,
) -> Result<HttpResponse, ApiError> {
    let title = payload.decode()?.title()?;

    let result = storage
        .execute("INSERT INTO Menu (title) VALUES (?)", vec![title.into()])
        .await?;
    info!(menu_id = result.last_insert_id, "Menu created");

    let menu = fetch::<Menu>(&storage, result.last_insert_id).await?;
    Ok(HttpResponse::Created().json(MenuResponse { menu }))
}

#[utoipa::path(
    get,
    path = "/api/menus/{menuId}",
    params(("menuId", Path, description = "Menu ID")),
    responses(
        (status = 200, body = MenuResponse),
        (status = 404, body = ErrorBody)
    ),
    tag = "Menu"
)]
pub async fn get_menu(Resolved(menu): Resolved<Menu>) -> HttpResponse {
    HttpResponse::Ok().json(MenuResponse { menu })
}

#[utoipa::path(
    put,
    path = "/api/menus/{menuId}",
    params(("menuId", Path, description = "Menu ID")),
    request_body = MenuRequest,
    responses(
        (status = 200, body = MenuResponse),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ),
    tag = "Menu"
)]
pub async fn update_menu(
    storage: web::Data<Storage>,
    Resolved(menu): Resolved<Menu>,
    payload: JsonBody<MenuRequest>,
) -> Result<HttpResponse, ApiError> {
    let title = payload.decode()?.title()?;

    storage
        .execute(
            "UPDATE Menu SET title = ? WHERE id = ?",
            vec![title.into(), menu.id.into()],
        )
        .await?;

    let menu = fetch::<Menu>(&storage, menu.id).await?;
    Ok(HttpResponse::Ok().json(MenuResponse { menu }))
}

/// Delete Menu
///
/// Refused with 400 while any menu item still points at the menu.
#[utoipa::path(
    delete,
    path = "/api/menus/{menuId}",
    params(("menuId", Path, description = "Menu ID")),
    responses(
        (status = 204, description = "Menu deleted"),
        (status = 400, description = "menu has menu items", body = ErrorBody),
        (status = 404, body = ErrorBody)
    ),
    tag = "Menu"
)]
pub async fn delete_menu(
    storage: web::Data<Storage>,
    Resolved(menu): Resolved<Menu>,
) -> Result<HttpResponse, ApiError> {
    let item: Option<MenuItem> = storage
        .query_one(
            "SELECT * FROM MenuItem WHERE menu_id = ? LIMIT 1",
            vec![menu.id.into()],
        )
        .await?;

    if item.is_some() {
        return Err(ApiError::Conflict("menu has menu items"));
    }

    storage
        .execute("DELETE FROM Menu WHERE id = ?", vec![menu.id.into()])
        .await?;
    info!(menu_id = menu.id, "Menu deleted");

    Ok(HttpResponse::NoContent().finish())
}
