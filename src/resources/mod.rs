//! Resource handlers.
//!
//! | Module | Paths |
//! |---|---|
//! | [`index`] | `/` |
//! | [`todos`] | `/todos` |
//! | [`item`] | `/todos/{id}` |
//!
//! Every handler receives the shared [`Store`](crate::Store) as router state.

pub mod index;
pub mod item;
pub mod todos;
