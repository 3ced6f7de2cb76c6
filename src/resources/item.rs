//! A single todo item.

use crate::error::ApiError;
use crate::hal::TodoResource;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;
use crate::store::Store;
use crate::todo::{TodoId, TodoUpdate};

/// The `{id}` path parameter. Anything that is not an integer addresses no
/// todo at all.
fn id(req: &Request) -> Result<TodoId, ApiError> {
    req.param("id")
        .and_then(|raw| raw.parse().ok())
        .ok_or(ApiError::NotFound)
}

/// `GET /todos/{id}`
pub async fn find(req: Request, store: Store) -> Result<Response, ApiError> {
    let todo = store.get(id(&req)?).await.ok_or(ApiError::NotFound)?;
    Ok(Response::hal(&TodoResource::new(todo, &req.origin())))
}

/// `PUT /todos/{id}`: overwrites title and checked with whatever was sent.
pub async fn update(req: Request, store: Store) -> Result<Response, ApiError> {
    let id = id(&req)?;
    if store.get(id).await.is_none() {
        return Err(ApiError::NotFound);
    }
    let update = TodoUpdate::from_json(&req.json()?);
    let todo = store.update(id, update).await.ok_or(ApiError::NotFound)?;
    Ok(Response::hal(&TodoResource::new(todo, &req.origin())))
}

/// `DELETE /todos/{id}`
pub async fn remove(req: Request, store: Store) -> Result<Status, ApiError> {
    store.remove(id(&req)?).await.ok_or(ApiError::NotFound)?;
    Ok(Status::NoContent)
}
