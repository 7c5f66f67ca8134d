//! Server-rendered HTML views. Each function takes its model and returns a full document.

use crate::model::{Book, DemoModel};

/// Escape text for use in element content and double- or single-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body>
  <nav>
    <a href="/">Home</a>
    <a href="/about">About</a>
    <a href="/data">Data</a>
    <a href="/books">Books</a>
  </nav>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

pub fn index() -> String {
    layout(
        "Home",
        "    <h1>Book Catalog</h1>\n    <p>Keep track of the books you read.</p>",
    )
}

pub fn about() -> String {
    layout(
        "About",
        "    <h1>About</h1>\n    <p>A small catalog of books with a title, an author and optional comments.</p>",
    )
}

pub fn data(model: &DemoModel) -> String {
    let items: String = model
        .items
        .iter()
        .map(|item| format!("      <li>{}</li>\n", escape(item)))
        .collect();
    let body = format!(
        "    <h1>{}</h1>\n    <ul>\n{}    </ul>",
        escape(model.title),
        items
    );
    layout("Data", &body)
}

pub fn books(model: &[Book]) -> String {
    let mut body = String::from(
        "    <h1>Books</h1>\n    <p><a href=\"/create\">Add a book</a></p>\n    <table>\n      <thead>\n        <tr><th>Title</th><th>Author</th><th>Comments</th><th></th></tr>\n      </thead>\n      <tbody>\n",
    );
    for book in model {
        body.push_str(&format!(
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"/edit/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>\n",
            escape(&book.title),
            escape(&book.author),
            escape(book.comments.as_deref().unwrap_or("")),
            id = book.id,
        ));
    }
    body.push_str("      </tbody>\n    </table>");
    layout("Books", &body)
}

fn book_form(action: &str, book: Option<&Book>, submit: &str) -> String {
    let title = book.map(|b| b.title.as_str()).unwrap_or("");
    let author = book.map(|b| b.author.as_str()).unwrap_or("");
    let comments = book.and_then(|b| b.comments.as_deref()).unwrap_or("");
    format!(
        r#"    <form action="{action}" method="post">
      <label for="Title">Title</label>
      <input type="text" id="Title" name="Title" value="{title}">
      <label for="Author">Author</label>
      <input type="text" id="Author" name="Author" value="{author}">
      <label for="Comments">Comments</label>
      <textarea id="Comments" name="Comments">{comments}</textarea>
      <button type="submit">{submit}</button>
      <a href="/books">Cancel</a>
    </form>"#,
        action = escape(action),
        title = escape(title),
        author = escape(author),
        comments = escape(comments),
        submit = submit,
    )
}

pub fn create() -> String {
    let body = format!("    <h1>Add a book</h1>\n{}", book_form("/create", None, "Save"));
    layout("Create", &body)
}

/// Edit form for `id`; fields are blank when the book does not exist.
pub fn edit(id: i64, model: Option<&Book>) -> String {
    let action = format!("/edit/{}", id);
    let body = format!("    <h1>Edit book</h1>\n{}", book_form(&action, model, "Update"));
    layout("Edit", &body)
}

pub fn delete(id: i64, model: Option<&Book>) -> String {
    let field = |v: Option<&str>| escape(v.unwrap_or(""));
    let body = format!(
        r#"    <h1>Delete book</h1>
    <p>Are you sure you want to delete this book?</p>
    <dl>
      <dt>Title</dt><dd>{title}</dd>
      <dt>Author</dt><dd>{author}</dd>
      <dt>Comments</dt><dd>{comments}</dd>
    </dl>
    <form action="/delete/{id}" method="post">
      <button type="submit">Delete</button>
      <a href="/books">Cancel</a>
    </form>"#,
        title = field(model.map(|b| b.title.as_str())),
        author = field(model.map(|b| b.author.as_str())),
        comments = field(model.and_then(|b| b.comments.as_deref())),
        id = id,
    );
    layout("Delete", &body)
}

pub fn error_page() -> String {
    layout(
        "Error",
        "    <h1>Something went wrong</h1>\n    <p>The request could not be completed. Please try again later.</p>",
    )
}
