use crate::{
    api::{employee, menu, menu_item, timesheet},
    docs,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    cfg.route("/api-doc/openapi.json", web::get().to(docs::openapi_json));

    cfg.service(
        web::scope(api_prefix)
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{employeeId}
                    .service(
                        web::resource("/{employeeId}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    )
                    // /employees/{employeeId}/timesheets
                    .service(
                        web::resource("/{employeeId}/timesheets")
                            .route(web::get().to(timesheet::list_timesheets))
                            .route(web::post().to(timesheet::create_timesheet)),
                    )
                    // /employees/{employeeId}/timesheets/{timesheetId}
                    .service(
                        web::resource("/{employeeId}/timesheets/{timesheetId}")
                            .route(web::put().to(timesheet::update_timesheet))
                            .route(web::delete().to(timesheet::delete_timesheet)),
                    ),
            )
            .service(
                web::scope("/menus")
                    .service(
                        web::resource("")
                            .route(web::get().to(menu::list_menus))
                            .route(web::post().to(menu::create_menu)),
                    )
                    .service(
                        web::resource("/{menuId}")
                            .route(web::get().to(menu::get_menu))
                            .route(web::put().to(menu::update_menu))
                            .route(web::delete().to(menu::delete_menu)),
                    )
                    .service(
                        web::resource("/{menuId}/menu-items")
                            .route(web::get().to(menu_item::list_menu_items))
                            .route(web::post().to(menu_item::create_menu_item)),
                    )
                    .service(
                        web::resource("/{menuId}/menu-items/{menuItemId}")
                            .route(web::put().to(menu_item::update_menu_item))
                            .route(web::delete().to(menu_item::delete_menu_item)),
                    ),
            ),
    );
}
