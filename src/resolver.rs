//! Path identifier resolution.
//!
//! `Resolved<T>` loads the row named by `T`'s path parameter before the
//! handler body runs and answers 404 when it is missing. `Nested<P, C>` does
//! the same for a child addressed under its owner and also rejects children
//! that belong to a different owner.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::LocalBoxFuture;
use sqlx::FromRow;
use sqlx::sqlite::SqliteRow;

use crate::db::{Storage, StorageError};
use crate::error::ApiError;
use crate::model::{employee::Employee, menu::Menu, menu_item::MenuItem, timesheet::Timesheet};

pub trait Resource: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static {
    const TABLE: &'static str;
    const PATH_PARAM: &'static str;
    const NOT_FOUND: &'static str;

    fn id(&self) -> i64;
}

/// A resource that always hangs off exactly one `P`.
pub trait Owned<P: Resource>: Resource {
    fn owner_id(&self) -> i64;
}

impl Resource for Employee {
    const TABLE: &'static str = "Employee";
    const PATH_PARAM: &'static str = "employeeId";
    const NOT_FOUND: &'static str = "Employee not found";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Timesheet {
    const TABLE: &'static str = "Timesheet";
    const PATH_PARAM: &'static str = "timesheetId";
    const NOT_FOUND: &'static str = "Timesheet not found";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Owned<Employee> for Timesheet {
    fn owner_id(&self) -> i64 {
        self.employee_id
    }
}

impl Resource for Menu {
    const TABLE: &'static str = "Menu";
    const PATH_PARAM: &'static str = "menuId";
    const NOT_FOUND: &'static str = "menu not found";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for MenuItem {
    const TABLE: &'static str = "MenuItem";
    const PATH_PARAM: &'static str = "menuItemId";
    const NOT_FOUND: &'static str = "menuItem not found";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Owned<Menu> for MenuItem {
    fn owner_id(&self) -> i64 {
        self.menu_id
    }
}

/// Loads a row by its raw path identifier. Identifiers that are not
/// integers can never match a row and resolve to not-found.
pub async fn resolve<T: Resource>(storage: &Storage, raw_id: &str) -> Result<T, ApiError> {
    let Ok(id) = raw_id.parse::<i64>() else {
        return Err(ApiError::NotFound(T::NOT_FOUND));
    };
    fetch::<T>(storage, id).await
}

/// Re-reads a row by id, typically right after writing it.
pub async fn fetch<T: Resource>(storage: &Storage, id: i64) -> Result<T, ApiError> {
    let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
    storage
        .query_one::<T>(&sql, vec![id.into()])
        .await?
        .ok_or(ApiError::NotFound(T::NOT_FOUND))
}

/// Resolves `parent` then `child`, and treats a child owned by another
/// parent as missing.
pub async fn resolve_nested<P, C>(
    storage: &Storage,
    raw_parent_id: &str,
    raw_child_id: &str,
) -> Result<(P, C), ApiError>
where
    P: Resource,
    C: Owned<P>,
{
    let parent = resolve::<P>(storage, raw_parent_id).await?;
    let child = resolve::<C>(storage, raw_child_id).await?;

    if child.owner_id() != parent.id() {
        return Err(ApiError::NotFound(C::NOT_FOUND));
    }
    Ok((parent, child))
}

fn storage_from(req: &HttpRequest) -> Result<web::Data<Storage>, ApiError> {
    req.app_data::<web::Data<Storage>>()
        .cloned()
        .ok_or(ApiError::Storage(StorageError::NotRegistered))
}

fn path_param(req: &HttpRequest, name: &str) -> String {
    req.match_info().get(name).unwrap_or_default().to_owned()
}

pub struct Resolved<T>(pub T);

impl<T> Resolved<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Resource> FromRequest for Resolved<T> {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let storage = storage_from(req);
        let raw_id = path_param(req, T::PATH_PARAM);

        Box::pin(async move {
            let storage = storage?;
            resolve::<T>(&storage, &raw_id).await.map(Resolved)
        })
    }
}

pub struct Nested<P, C> {
    pub parent: P,
    pub child: C,
}

impl<P, C> FromRequest for Nested<P, C>
where
    P: Resource,
    C: Owned<P>,
{
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let storage = storage_from(req);
        let raw_parent_id = path_param(req, P::PATH_PARAM);
        let raw_child_id = path_param(req, C::PATH_PARAM);

        Box::pin(async move {
            let storage = storage?;
            resolve_nested::<P, C>(&storage, &raw_parent_id, &raw_child_id)
                .await
                .map(|(parent, child)| Nested { parent, child })
        })
    }
}
