//! HAL link assembly and the todo item representation.
//!
//! Every document the API returns carries a `_links` object. Resource-level
//! documents (index, list) get the `todo` curie and a `self` link built from
//! the request's origin and original URL, plus whatever relations the handler
//! supplies. Item documents carry `self` and their own action relations.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::method::Method;
use crate::todo::Todo;

/// Relation names in the `todo` namespace.
pub mod rel {
    pub const CREATE: &str = "todo:create";
    pub const LIST: &str = "todo:list";
    pub const CLEAR: &str = "todo:clear";
    pub const UPDATE: &str = "todo:update";
    pub const DELETE: &str = "todo:delete";
}

/// A link descriptor: `href`, plus an optional human title and the HTTP
/// method to use when it is not `GET`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<&'static str>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into(), title: None, method: None }
    }

    pub fn title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method.as_str());
        self
    }
}

/// A compact URI template naming a relation namespace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Curie {
    pub name: &'static str,
    pub href: String,
    pub templated: bool,
}

/// The `_links` section of a resource-level document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Links {
    pub curies: Vec<Curie>,
    #[serde(rename = "self")]
    pub self_link: Link,
    #[serde(flatten)]
    pub rels: BTreeMap<&'static str, Link>,
}

/// Builds `_links` from the caller's origin and original URL.
///
/// `rels` are merged in verbatim next to `curies` and `self`.
pub fn links<I>(origin: &str, original_url: &str, rels: I) -> Links
where
    I: IntoIterator<Item = (&'static str, Link)>,
{
    Links {
        curies: vec![Curie {
            name: "todo",
            href: format!("{origin}/rels/{{rel}}"),
            templated: true,
        }],
        self_link: Link::new(format!("{origin}{original_url}")),
        rels: rels.into_iter().collect(),
    }
}

/// The public face of a [`Todo`]. The id only shows up inside the links.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TodoResource {
    #[serde(rename = "_links")]
    pub links: BTreeMap<&'static str, Link>,
    pub title: Value,
    pub checked: Value,
}

impl TodoResource {
    /// Represents `todo` with `self`, `todo:update` and `todo:delete` links.
    pub fn new(todo: Todo, origin: &str) -> Self {
        let href = format!("{origin}/todos/{}", todo.id);
        let links = BTreeMap::from([
            (
                rel::UPDATE,
                Link::new(href.clone()).method(Method::Put).title("Updates a todo item."),
            ),
            (
                rel::DELETE,
                Link::new(href.clone()).method(Method::Delete).title("Deletes a todo item!"),
            ),
            ("self", Link::new(href)),
        ]);

        Self { links, title: todo.title, checked: todo.checked }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn links_carry_curies_self_and_rels() {
        let links = links(
            "http://localhost:3000",
            "/todos?checked=true",
            [(rel::CREATE, Link::new("http://localhost:3000/todos").method(Method::Post))],
        );

        assert_eq!(
            serde_json::to_value(&links).unwrap(),
            json!({
                "curies": [{ "name": "todo", "href": "http://localhost:3000/rels/{rel}", "templated": true }],
                "self": { "href": "http://localhost:3000/todos?checked=true" },
                "todo:create": { "href": "http://localhost:3000/todos", "method": "POST" },
            })
        );
    }

    #[test]
    fn item_hides_id_and_links_actions() {
        let todo = Todo { id: 7, title: json!("foo"), checked: json!(true) };
        let value = serde_json::to_value(TodoResource::new(todo, "https://api.test")).unwrap();

        assert_eq!(
            value,
            json!({
                "_links": {
                    "self": { "href": "https://api.test/todos/7" },
                    "todo:update": { "href": "https://api.test/todos/7", "method": "PUT", "title": "Updates a todo item." },
                    "todo:delete": { "href": "https://api.test/todos/7", "method": "DELETE", "title": "Deletes a todo item!" },
                },
                "title": "foo",
                "checked": true,
            })
        );
        assert!(value.get("id").is_none());
    }
}
