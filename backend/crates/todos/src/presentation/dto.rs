//! Form payloads for the todo endpoints.

use serde::Deserialize;

/// POST /todos/save and POST /todos/update/{id} form body.
#[derive(Debug, Deserialize)]
pub struct TodoForm {
    pub content: String,
}
