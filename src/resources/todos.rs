//! The todo list collection.

use serde::Serialize;

use crate::error::ApiError;
use crate::hal::{self, rel, Link, Links, TodoResource};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;
use crate::store::Store;
use crate::todo::{ListFilter, NewTodo};

#[derive(Serialize)]
struct TodoListResource {
    #[serde(rename = "_links")]
    links: Links,
    #[serde(rename = "_embedded")]
    embedded: Embedded,
}

#[derive(Serialize)]
struct Embedded {
    #[serde(rename = "todo:list")]
    list: Vec<TodoResource>,
}

/// `GET /todos[?search=…][&checked=true|false]`
pub async fn list(req: Request, store: Store) -> Response {
    let origin = req.origin();
    let links = hal::links(
        &origin,
        req.original_url(),
        [
            (
                rel::CREATE,
                Link::new(format!("{origin}/todos")).title("Creates a new todo.").method(Method::Post),
            ),
            (
                rel::CLEAR,
                Link::new(format!("{origin}/todos")).title("Deletes ALL todo items!").method(Method::Delete),
            ),
        ],
    );

    let filter = ListFilter::from_query(req.query());
    let list = store
        .list(&filter)
        .await
        .into_iter()
        .map(|todo| TodoResource::new(todo, &origin))
        .collect();

    Response::hal(&TodoListResource { links, embedded: Embedded { list } })
}

/// `POST /todos`
///
/// Answers `200` rather than `201`; clients rely on it.
pub async fn create(req: Request, store: Store) -> Result<Response, ApiError> {
    let new = NewTodo::from_json(&req.json()?)?;
    let todo = store.create(new).await;
    Ok(Response::hal(&TodoResource::new(todo, &req.origin())))
}

/// `DELETE /todos`: drops everything and restarts ids at 0.
pub async fn clear(_req: Request, store: Store) -> Status {
    store.clear().await;
    Status::NoContent
}
