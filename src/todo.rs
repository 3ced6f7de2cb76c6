//! The todo entity, its write payloads and the list filter.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::ApiError;

/// Identifier assigned at creation. Never reused until the list is cleared.
pub type TodoId = u64;

/// One entry of the todo list.
///
/// `title` and `checked` are kept as JSON values: creation guarantees a string
/// and a boolean, but an update stores whatever the client sent.
#[derive(Clone, Debug, PartialEq)]
pub struct Todo {
    pub(crate) id: TodoId,
    pub(crate) title: Value,
    pub(crate) checked: Value,
}

impl Todo {
    pub fn id(&self) -> TodoId { self.id }
    pub fn title(&self) -> &Value { &self.title }
    pub fn checked(&self) -> &Value { &self.checked }
}

/// A validated creation payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub checked: bool,
}

impl NewTodo {
    /// Validates a `POST /todos` body.
    ///
    /// `title` must be a JSON string. `checked` is `true` only when the body
    /// carries the literal `true`; anything else, absence included, is `false`.
    pub fn from_json(body: &Value) -> Result<Self, ApiError> {
        let title = match body.get("title") {
            Some(Value::String(title)) => title.clone(),
            other => {
                let shown = other.map_or_else(|| "undefined".to_owned(), Value::to_string);
                return Err(ApiError::Validation(format!(
                    r#"The "title" property is missing or its value ("{shown}") is not a string."#
                )));
            }
        };
        let checked = matches!(body.get("checked"), Some(Value::Bool(true)));
        Ok(Self { title, checked })
    }
}

/// A `PUT /todos/{id}` payload. Not validated: missing fields become `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct TodoUpdate {
    pub title: Value,
    pub checked: Value,
}

impl TodoUpdate {
    pub fn from_json(body: &Value) -> Self {
        Self {
            title: body.get("title").cloned().unwrap_or(Value::Null),
            checked: body.get("checked").cloned().unwrap_or(Value::Null),
        }
    }
}

/// A query-string value. Only the literal tokens `true` and `false` are
/// coerced; everything else stays text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    Bool(bool),
    Text(String),
}

impl QueryValue {
    fn coerce(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            other => Self::Text(other.to_owned()),
        }
    }
}

/// Splits a raw query string into key/value pairs.
///
/// Pairs are separated by `&` and split on the first `=`. Empty pairs are
/// skipped, a key without `=` has no value, later keys win. Nothing is
/// percent-decoded.
pub fn parse_query(query: &str) -> HashMap<String, Option<QueryValue>> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_owned(), Some(QueryValue::coerce(value))),
            None => (pair.to_owned(), None),
        })
        .collect()
}

/// Filters applied by `GET /todos`, combined with logical AND.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Keep todos whose title contains this text (case-sensitive).
    pub search: Option<String>,
    /// Keep todos whose `checked` equals this value. A non-boolean value
    /// matches nothing.
    pub checked: Option<QueryValue>,
}

impl ListFilter {
    pub fn from_query(query: &str) -> Self {
        let mut options = parse_query(query);

        let search = match options.remove("search").flatten() {
            Some(QueryValue::Text(text)) if !text.is_empty() => Some(text),
            // `false` reads as "no search"; `true` searches for the text.
            Some(QueryValue::Bool(true)) => Some("true".to_owned()),
            _ => None,
        };
        let checked = options.remove("checked").flatten();

        Self { search, checked }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        if let Some(search) = &self.search {
            let hit = todo.title.as_str().is_some_and(|title| title.contains(search.as_str()));
            if !hit {
                return false;
            }
        }

        match &self.checked {
            None => true,
            Some(QueryValue::Bool(wanted)) => todo.checked == Value::Bool(*wanted),
            Some(QueryValue::Text(_)) => false,
        }
    }
}
