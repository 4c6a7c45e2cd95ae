use crate::api::employee::{EmployeeInput, EmployeeListResponse, EmployeeRequest, EmployeeResponse};
use crate::api::menu::{MenuInput, MenuListResponse, MenuRequest, MenuResponse};
use crate::api::menu_item::{
    MenuItemInput, MenuItemListResponse, MenuItemRequest, MenuItemResponse,
};
use crate::api::timesheet::{
    TimesheetInput, TimesheetListResponse, TimesheetRequest, TimesheetResponse,
};
use crate::error::ErrorBody;
use crate::model::{
    employee::Employee,
    menu::Menu,
    menu_item::MenuItem,
    timesheet::{Timesheet, TimesheetDate},
};
use actix_web::HttpResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Restaurant API",
        version = "0.1.0",
        description = r#"
## Restaurant staff & menu API

- **Employees**: hire, update, and retire staff (retired staff stay on record)
- **Timesheets**: hours worked per employee
- **Menus** and their **menu items**

Write requests wrap their fields in the resource name, e.g.
`{"menu": {"title": "Lunch"}}`. Errors come back as `{"error": "..."}`.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::timesheet::list_timesheets,
        crate::api::timesheet::create_timesheet,
        crate::api::timesheet::update_timesheet,
        crate::api::timesheet::delete_timesheet,

        crate::api::menu::list_menus,
        crate::api::menu::create_menu,
        crate::api::menu::get_menu,
        crate::api::menu::update_menu,
        crate::api::menu::delete_menu,

        crate::api::menu_item::list_menu_items,
        crate::api::menu_item::create_menu_item,
        crate::api::menu_item::update_menu_item,
        crate::api::menu_item::delete_menu_item
    ),
    components(
        schemas(
            Employee,
            EmployeeInput,
            EmployeeRequest,
            EmployeeResponse,
            EmployeeListResponse,
            Timesheet,
            TimesheetDate,
            TimesheetInput,
            TimesheetRequest,
            TimesheetResponse,
            TimesheetListResponse,
            Menu,
            MenuInput,
            MenuRequest,
            MenuResponse,
            MenuListResponse,
            MenuItem,
            MenuItemInput,
            MenuItemRequest,
            MenuItemResponse,
            MenuItemListResponse,
            ErrorBody
        )
    ),
    tags(
        (name = "Employee", description = "Staff records"),
        (name = "Timesheet", description = "Hours worked by an employee"),
        (name = "Menu", description = "Menus"),
        (name = "MenuItem", description = "Items on a menu"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
