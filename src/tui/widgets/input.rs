//! Text input helpers
//!
//! Form values live in the dashboard's forms as plain strings; the dialogs
//! only keep a cursor (a char index) next to them.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

fn byte_index(value: &str, cursor: usize) -> usize {
    value
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

/// Number of characters in a value
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Insert a character at the cursor
pub fn insert_char(value: &mut String, cursor: &mut usize, c: char) {
    let at = byte_index(value, *cursor);
    value.insert(at, c);
    *cursor += 1;
}

/// Delete the character before the cursor
pub fn backspace(value: &mut String, cursor: &mut usize) {
    if *cursor > 0 {
        *cursor -= 1;
        let at = byte_index(value, *cursor);
        value.remove(at);
    }
}

/// Delete the character under the cursor
pub fn delete(value: &mut String, cursor: usize) {
    if cursor < char_len(value) {
        let at = byte_index(value, cursor);
        value.remove(at);
    }
}

/// Move the cursor one character left
pub fn move_left(cursor: &mut usize) {
    *cursor = cursor.saturating_sub(1);
}

/// Move the cursor one character right
pub fn move_right(value: &str, cursor: &mut usize) {
    if *cursor < char_len(value) {
        *cursor += 1;
    }
}

/// Render a value with a block cursor when focused
pub fn render_input(prefix: &str, value: &str, cursor: usize, focused: bool) -> Line<'static> {
    let mut spans = vec![];

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    if focused {
        let at = byte_index(value, cursor.min(char_len(value)));
        let (before, after) = value.split_at(at);
        let mut rest = after.chars();
        let under = rest.next().unwrap_or(' ');

        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            under.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(
            rest.as_str().to_string(),
            Style::default().fg(Color::White),
        ));
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White),
        ));
    }

    Line::from(spans)
}

/// Render a masked value (passwords)
pub fn render_masked(value: &str, cursor: usize, focused: bool) -> Line<'static> {
    let masked = "•".repeat(char_len(value));
    render_input("", &masked, cursor, focused)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_multibyte() {
        let mut value = String::from("Café");
        let mut cursor = char_len(&value);

        backspace(&mut value, &mut cursor);
        assert_eq!(value, "Caf");
        insert_char(&mut value, &mut cursor, 'é');
        assert_eq!(value, "Café");

        move_left(&mut cursor);
        move_left(&mut cursor);
        insert_char(&mut value, &mut cursor, 'x');
        assert_eq!(value, "Caxfé");

        delete(&mut value, cursor);
        assert_eq!(value, "Caxé");
        move_right(&value, &mut cursor);
        move_right(&value, &mut cursor);
        move_right(&value, &mut cursor);
        assert_eq!(cursor, 4);
    }

    #[test]
    fn test_render_focused_splits_at_cursor() {
        let line = render_input("$", "500", 1, true);
        let text: Vec<String> = line.spans.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(text, vec!["$", "5", "0", "0"]);
    }
}
