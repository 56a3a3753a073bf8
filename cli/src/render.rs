//! Terminal rendering of the stored collection.

use std::io::{self, Write};

use todo_core::TodoRecord;

pub const EMPTY_MESSAGE: &str = "No todos stored. Run `todo load` to fetch some.";

/// One line per record: status, id, title. An empty collection prints
/// `EMPTY_MESSAGE` instead.
pub fn render<W: Write>(todos: &[TodoRecord], out: &mut W) -> io::Result<()> {
    if todos.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return out.flush();
    }

    let id_width = todos
        .iter()
        .map(|t| t.id.to_string().len())
        .max()
        .unwrap_or(1);
    for todo in todos {
        writeln!(
            out,
            "[{:<10}] #{:<id_width$}  {}",
            status_label(todo),
            todo.id,
            todo.title
        )?;
    }
    out.flush()
}

fn status_label(todo: &TodoRecord) -> &'static str {
    if todo.completed {
        "Completed"
    } else {
        "Incomplete"
    }
}
