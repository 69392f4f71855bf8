use colored::Colorize;
use todos::api::{CmdMessage, MessageLevel};
use todos::config::TodoConfig;
use todos::model::Todo;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HEADERS: [&str; 3] = ["id", "to-do", "status"];
const MAX_TITLE_WIDTH: usize = 48;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_todos(todos: &[Todo], config: &TodoConfig) {
    print!("{}", render_table(todos, config));
}

/// Renders the to-dos as a bordered table with `id`, `to-do` and `status` columns.
pub(super) fn render_table(todos: &[Todo], config: &TodoConfig) -> String {
    let rows: Vec<[String; 3]> = todos
        .iter()
        .map(|t| {
            [
                t.id().to_string(),
                truncate_to_width(&t.title, MAX_TITLE_WIDTH),
                config.status_label(t.done).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(&border('┌', '┬', '┐', &widths));
    out.push_str(&line(&HEADERS.map(|h| h.bold().to_string()), &HEADERS, &widths));
    out.push_str(&border('├', '┼', '┤', &widths));
    for (todo, row) in todos.iter().zip(&rows) {
        let status = if todo.done {
            row[2].green().to_string()
        } else {
            row[2].clone()
        };
        let styled = [row[0].clone(), row[1].clone(), status];
        out.push_str(&line(&styled, &row.each_ref().map(|s| s.as_str()), &widths));
    }
    out.push_str(&border('└', '┴', '┘', &widths));
    out
}

fn border(left: char, mid: char, right: char, widths: &[usize; 3]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&mid.to_string()), right)
}

/// `styled` is what gets printed; `plain` is used to measure padding, since
/// ANSI codes have no display width.
fn line(styled: &[String; 3], plain: &[&str; 3], widths: &[usize; 3]) -> String {
    let cells: Vec<String> = styled
        .iter()
        .zip(plain)
        .zip(widths)
        .map(|((s, p), w)| format!(" {}{} ", s, " ".repeat(w.saturating_sub(p.width()))))
        .collect();
    format!("│{}│\n", cells.join("│"))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use todos::model::TodoList;

    fn plain_table(todos: &TodoList) -> String {
        colored::control::set_override(false);
        render_table(&todos.clone().into_vec(), &TodoConfig::default())
    }

    #[test]
    fn empty_list_renders_header_only() {
        let table = plain_table(&TodoList::new());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "│ id │ to-do │ status │");
    }

    #[test]
    fn rows_show_id_title_and_status() {
        let mut todos = TodoList::new();
        todos.push("Buy milk".into(), false).unwrap();
        todos.push("Walk dog".into(), true).unwrap();
        let table = plain_table(&todos);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines[0], "┌────┬──────────┬─────────┐");
        assert_eq!(lines[3], "│ 0  │ Buy milk │ pending │");
        assert_eq!(lines[4], "│ 1  │ Walk dog │ done    │");
        assert_eq!(lines[5], "└────┴──────────┴─────────┘");
    }

    #[test]
    fn custom_labels_are_used() {
        colored::control::set_override(false);
        let mut todos = TodoList::new();
        todos.push("Comprar pão".into(), true).unwrap();
        let config = TodoConfig {
            done_label: "feito".into(),
            ..TodoConfig::default()
        };
        let table = render_table(&todos.into_vec(), &config);
        assert!(table.contains("│ feito  │"));
    }

    #[test]
    fn long_titles_are_truncated() {
        let long = "x".repeat(100);
        let truncated = truncate_to_width(&long, 10);
        assert_eq!(truncated.width(), 10);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn wide_characters_keep_columns_aligned() {
        colored::control::set_override(false);
        let mut todos = TodoList::new();
        todos.push("日本".into(), false).unwrap();
        let table = render_table(&todos.into_vec(), &TodoConfig::default());
        let widths: Vec<usize> = table.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
