#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use serde_json::{Value, json};

#[actix_web::test]
async fn menu_with_items_cannot_be_deleted_until_emptied() {
    let storage = common::memory_storage().await;
    let app = spawn_app!(storage);

    let (status, body) = send!(
        app,
        TestRequest::post()
            .uri("/api/menus")
            .set_json(json!({ "menu": { "title": "Lunch" } }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "menu": { "id": 1, "title": "Lunch" } }));

    let (status, body) = send!(
        app,
        TestRequest::post()
            .uri("/api/menus/1/menu-items")
            .set_json(json!({ "menuItem": { "name": "Burger", "inventory": 10, "price": 9.5 } }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "menuItem": {
            "id": 1,
            "name": "Burger",
            "description": null,
            "inventory": 10,
            "price": 9.5,
            "menu_id": 1
        }})
    );

    let (status, body) = send!(app, TestRequest::delete().uri("/api/menus/1"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "menu has menu items" }));

    let (status, _) = send!(app, TestRequest::get().uri("/api/menus/1"));
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send!(app, TestRequest::delete().uri("/api/menus/1/menu-items/1"));
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send!(app, TestRequest::delete().uri("/api/menus/1"));
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[actix_web::test]
async fn deleted_menu_is_gone() {
    let storage = common::memory_storage().await;
    let app = spawn_app!(storage);
    send!(
        app,
        TestRequest::post()
            .uri("/api/menus")
            .set_json(json!({ "menu": { "title": "Dinner" } }))
    );

    let (status, _) = send!(app, TestRequest::delete().uri("/api/menus/1"));
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send!(app, TestRequest::get().uri("/api/menus/1"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "menu not found" }));

    let (_, body) = send!(app, TestRequest::get().uri("/api/menus"));
    assert_eq!(body, json!({ "menus": [] }));
}

#[actix_web::test]
async fn menu_title_is_required() {
    let storage = common::memory_storage().await;
    let app = spawn_app!(storage);

    let (status, body) = send!(
        app,
        TestRequest::post().uri("/api/menus").set_json(json!({ "menu": {} }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "title is required" }));

    send!(
        app,
        TestRequest::post()
            .uri("/api/menus")
            .set_json(json!({ "menu": { "title": "Brunch" } }))
    );

    let (status, _) = send!(
        app,
        TestRequest::put()
            .uri("/api/menus/1")
            .set_json(json!({ "menu": { "title": "" } }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send!(app, TestRequest::get().uri("/api/menus/1"));
    assert_eq!(body["menu"]["title"], "Brunch");

    let (status, body) = send!(
        app,
        TestRequest::put()
            .uri("/api/menus/1")
            .set_json(json!({ "menu": { "title": "Late Brunch" } }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "menu": { "id": 1, "title": "Late Brunch" } }));
}

#[actix_web::test]
async fn menu_items_are_listed_per_menu() {
    let storage = common::memory_storage().await;
    let app = spawn_app!(storage);

    for title in ["Lunch", "Dinner"] {
        send!(
            app,
            TestRequest::post()
                .uri("/api/menus")
                .set_json(json!({ "menu": { "title": title } }))
        );
    }
    for (menu, name) in [(1, "Soup"), (2, "Steak"), (2, "Pie")] {
        let (status, _) = send!(
            app,
            TestRequest::post()
                .uri(&format!("/api/menus/{menu}/menu-items"))
                .set_json(json!({ "menuItem": { "name": name, "inventory": 3, "price": 12.0 } }))
        );
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send!(app, TestRequest::get().uri("/api/menus/2/menu-items"));
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["menuItems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Steak", "Pie"]);

    let (_, body) = send!(app, TestRequest::get().uri("/api/menus"));
    assert_eq!(body["menus"].as_array().unwrap().len(), 2);

    let (status, body) = send!(app, TestRequest::get().uri("/api/menus/3/menu-items"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "menu not found" }));
}

#[actix_web::test]
async fn menu_item_update_validates_and_rewrites_fields() {
    let storage = common::memory_storage().await;
    let app = spawn_app!(storage);
    send!(
        app,
        TestRequest::post()
            .uri("/api/menus")
            .set_json(json!({ "menu": { "title": "Lunch" } }))
    );
    send!(
        app,
        TestRequest::post().uri("/api/menus/1/menu-items").set_json(json!({
            "menuItem": { "name": "Burger", "description": "Classic", "inventory": 10, "price": 9.5 }
        }))
    );

    let (status, body) = send!(
        app,
        TestRequest::put().uri("/api/menus/1/menu-items/1").set_json(json!({
            "menuItem": { "name": "Burger", "inventory": 10 }
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "missing required fields" }));

    let (_, body) = send!(app, TestRequest::get().uri("/api/menus/1/menu-items"));
    assert_eq!(body["menuItems"][0]["description"], "Classic");
    assert_eq!(body["menuItems"][0]["price"], json!(9.5));

    // description left out on purpose: it is cleared
    let (status, body) = send!(
        app,
        TestRequest::put().uri("/api/menus/1/menu-items/1").set_json(json!({
            "menuItem": { "name": "Cheeseburger", "inventory": 7, "price": 11.0 }
        }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "menuItem": {
            "id": 1,
            "name": "Cheeseburger",
            "description": null,
            "inventory": 7,
            "price": 11.0,
            "menu_id": 1
        }})
    );
}

#[actix_web::test]
async fn menu_item_must_belong_to_the_addressed_menu() {
    let storage = common::memory_storage().await;
    let app = spawn_app!(storage);
    for title in ["Lunch", "Dinner"] {
        send!(
            app,
            TestRequest::post()
                .uri("/api/menus")
                .set_json(json!({ "menu": { "title": title } }))
        );
    }
    send!(
        app,
        TestRequest::post().uri("/api/menus/1/menu-items").set_json(json!({
            "menuItem": { "name": "Soup", "inventory": 2, "price": 5.0 }
        }))
    );

    let (status, body) = send!(app, TestRequest::delete().uri("/api/menus/2/menu-items/1"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "menuItem not found" }));

    let (status, _) = send!(app, TestRequest::delete().uri("/api/menus/9/menu-items/1"));
    assert_eq!(status, StatusCode::NOT_FOUND);

    // still present under its real menu
    let (_, body) = send!(app, TestRequest::get().uri("/api/menus/1/menu-items"));
    assert_eq!(body["menuItems"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn openapi_document_lists_every_route() {
    let storage = common::memory_storage().await;
    let app = spawn_app!(storage);

    let (status, body) = send!(app, TestRequest::get().uri("/api-doc/openapi.json"));
    assert_eq!(status, StatusCode::OK);

    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/employees",
        "/api/employees/{employeeId}",
        "/api/employees/{employeeId}/timesheets",
        "/api/employees/{employeeId}/timesheets/{timesheetId}",
        "/api/menus",
        "/api/menus/{menuId}",
        "/api/menus/{menuId}/menu-items",
        "/api/menus/{menuId}/menu-items/{menuItemId}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }

    let schemas = body["components"]["schemas"].as_object().unwrap();
    for schema in ["ErrorBody", "TimesheetDate", "MenuItemRequest"] {
        assert!(schemas.contains_key(schema), "missing schema {schema}");
    }

    let not_found = &paths["/api/menus/{menuId}"]["get"]["responses"]["404"];
    assert_eq!(
        not_found["content"]["application/json"]["schema"]["$ref"],
        "#/components/schemas/ErrorBody"
    );
}
