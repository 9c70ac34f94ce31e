//! HTML page renderer.
//!
//! Server-rendered pages built from string templates: a shared layout,
//! a navbar that switches on authentication, and one body per page.
//! All user-supplied text is escaped before interpolation.

use platform::render::{RenderError, TemplateRenderer, escape_html};
use serde_json::Value;

/// Renders the application's pages into full HTML documents.
pub struct Pages;

impl TemplateRenderer for Pages {
    fn render(&self, template: &str, data: &Value) -> Result<String, RenderError> {
        match template {
            "top" => Ok(layout("Todo App", &navbar_public(), &top_body())),
            "signup" => Ok(layout("Sign up", &navbar_public(), &signup_body())),
            "login" => Ok(layout("Log in", &navbar_public(), &login_body())),
            "index" => {
                let user_name = user_name(data, template)?;
                Ok(layout(
                    "Your todos",
                    &navbar_private(&user_name),
                    &index_body(data, template)?,
                ))
            }
            "todo_new" => {
                let user_name = user_name(data, template)?;
                Ok(layout(
                    "New todo",
                    &navbar_private(&user_name),
                    &todo_new_body(),
                ))
            }
            "todo_edit" => {
                let user_name = user_name(data, template)?;
                Ok(layout(
                    "Edit todo",
                    &navbar_private(&user_name),
                    &todo_edit_body(data, template)?,
                ))
            }
            other => Err(RenderError::UnknownTemplate(other.to_string())),
        }
    }
}

fn missing(template: &str, field: &str) -> RenderError {
    RenderError::RenderFailed {
        template: template.to_string(),
        reason: format!("missing field: {field}"),
    }
}

fn user_name(data: &Value, template: &str) -> Result<String, RenderError> {
    data.pointer("/user/name")
        .and_then(Value::as_str)
        .map(escape_html)
        .ok_or_else(|| missing(template, "user.name"))
}

fn layout(title: &str, navbar: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/css/app.css">
</head>
<body>
{navbar}
<div class="container">
{body}
</div>
</body>
</html>
"#
    )
}

fn navbar_public() -> String {
    r#"<nav class="navbar">
<a class="brand" href="/">Todo App</a>
<div class="nav-links">
<a href="/login">Log in</a>
<a href="/signup">Sign up</a>
</div>
</nav>"#
        .to_string()
}

fn navbar_private(user_name: &str) -> String {
    format!(
        r#"<nav class="navbar">
<a class="brand" href="/todos">Todo App</a>
<div class="nav-links">
<span class="user-name">{user_name}</span>
<a href="/logout">Log out</a>
</div>
</nav>"#
    )
}

fn top_body() -> String {
    r#"<h1>Keep track of everything</h1>
<p>A simple list for things you need to do.</p>
<p><a class="button" href="/signup">Sign up</a> or <a href="/login">log in</a> to get started.</p>"#
        .to_string()
}

fn signup_body() -> String {
    r#"<h1>Sign up</h1>
<form method="post" action="/signup">
<label>Name <input type="text" name="name" required></label>
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Create account</button>
</form>
<p>Already have an account? <a href="/login">Log in</a>.</p>"#
        .to_string()
}

fn login_body() -> String {
    r#"<h1>Log in</h1>
<form method="post" action="/authenticate">
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Log in</button>
</form>
<p>New here? <a href="/signup">Sign up</a>.</p>"#
        .to_string()
}

fn index_body(data: &Value, template: &str) -> Result<String, RenderError> {
    let todos = data
        .pointer("/todos")
        .and_then(Value::as_array)
        .ok_or_else(|| missing(template, "todos"))?;

    let mut items = String::new();
    for todo in todos {
        let id = todo
            .pointer("/id")
            .and_then(Value::as_i64)
            .ok_or_else(|| missing(template, "todos[].id"))?;
        let content = todo
            .pointer("/content")
            .and_then(Value::as_str)
            .map(escape_html)
            .ok_or_else(|| missing(template, "todos[].content"))?;

        items.push_str(&format!(
            r#"<li>
<span class="content">{content}</span>
<a href="/todos/edit/{id}">Edit</a>
<form method="post" action="/todos/delete/{id}"><button type="submit">Delete</button></form>
</li>
"#
        ));
    }

    let list = if items.is_empty() {
        "<p>Nothing to do yet.</p>".to_string()
    } else {
        format!("<ul class=\"todos\">\n{items}</ul>")
    };

    Ok(format!(
        r#"<h1>Your todos</h1>
{list}
<p><a class="button" href="/todos/new">Add a todo</a></p>"#
    ))
}

fn todo_new_body() -> String {
    r#"<h1>New todo</h1>
<form method="post" action="/todos/save">
<label>Content <input type="text" name="content" required></label>
<button type="submit">Save</button>
</form>
<p><a href="/todos">Back to list</a></p>"#
        .to_string()
}

fn todo_edit_body(data: &Value, template: &str) -> Result<String, RenderError> {
    let id = data
        .pointer("/todo/id")
        .and_then(Value::as_i64)
        .ok_or_else(|| missing(template, "todo.id"))?;
    let content = data
        .pointer("/todo/content")
        .and_then(Value::as_str)
        .map(escape_html)
        .ok_or_else(|| missing(template, "todo.content"))?;

    Ok(format!(
        r#"<h1>Edit todo</h1>
<form method="post" action="/todos/update/{id}">
<label>Content <input type="text" name="content" value="{content}" required></label>
<button type="submit">Save</button>
</form>
<p><a href="/todos">Back to list</a></p>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_public_pages_render() {
        for name in ["top", "signup", "login"] {
            let html = Pages.render(name, &Value::Null).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains("/login"));
        }
    }

    #[test]
    fn test_index_lists_todos() {
        let data = json!({
            "user": { "name": "Ann" },
            "todos": [
                { "id": 1, "content": "Buy milk" },
                { "id": 2, "content": "Walk the dog" },
            ],
        });
        let html = Pages.render("index", &data).unwrap();
        assert!(html.contains("Buy milk"));
        assert!(html.contains("/todos/edit/2"));
        assert!(html.contains("/todos/delete/1"));
        assert!(html.contains("Ann"));
    }

    #[test]
    fn test_index_escapes_content() {
        let data = json!({
            "user": { "name": "Ann" },
            "todos": [{ "id": 1, "content": "<script>x</script>" }],
        });
        let html = Pages.render("index", &data).unwrap();
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    }

    #[test]
    fn test_edit_form_prefills_content() {
        let data = json!({
            "user": { "name": "Ann" },
            "todo": { "id": 7, "content": "Buy \"oat\" milk" },
        });
        let html = Pages.render("todo_edit", &data).unwrap();
        assert!(html.contains("/todos/update/7"));
        assert!(html.contains("value=\"Buy &quot;oat&quot; milk\""));
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        assert!(matches!(
            Pages.render("nope", &Value::Null),
            Err(RenderError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn test_index_requires_user() {
        let err = Pages.render("index", &json!({ "todos": [] })).unwrap_err();
        assert!(matches!(err, RenderError::RenderFailed { .. }));
    }
}
