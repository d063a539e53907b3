//! Roster table component.
//!
//! Renders the company roster as a fixed-width table with NAME, GENDER, AGE,
//! RANK and ID columns, followed by a head count. Rows for top-rank employees
//! are highlighted. Widths are counted in characters.

use crate::domain::{Employee, Person};
use crate::ui::theme::Theme;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// Column widths: name, gender, age, rank, id.
const COLUMNS: [usize; 5] = [15, 10, 5, 10, 10];

/// Shown instead of a table when the roster is empty.
pub const EMPTY_ROSTER: &str = "社員がいません。";

/// Renders `employees` as a table.
///
/// With `color` set, ANSI escapes from `theme` are applied; otherwise the
/// output is plain text.
#[must_use]
pub fn render_roster(employees: &[Employee], theme: &Theme, color: bool) -> String {
    let style = Style { theme, color };
    let mut out = String::new();

    if employees.is_empty() {
        style.paint(&mut out, &theme.colors.empty_state_fg, EMPTY_ROSTER);
        out.push('\n');
        return out;
    }

    style.rule(&mut out, '=');
    style.paint_bold(&mut out, &theme.colors.header_fg, &center("社員一覧", RULE_WIDTH - 6));
    out.push('\n');
    style.rule(&mut out, '=');
    style.paint_bold(
        &mut out,
        &theme.colors.header_fg,
        &row(["名前", "性別", "年齢", "役職", "ID"]),
    );
    out.push('\n');
    style.rule(&mut out, '-');

    for employee in employees {
        let age = employee.age().to_string();
        let line = row([
            employee.name(),
            employee.gender().label(),
            &age,
            employee.rank().label(),
            employee.id().as_str(),
        ]);
        let fg = if employee.rank().is_top() {
            &theme.colors.executive_fg
        } else {
            &theme.colors.text_normal
        };
        style.paint(&mut out, fg, &line);
        out.push('\n');
    }

    style.rule(&mut out, '=');
    style.paint_dim(
        &mut out,
        &theme.colors.text_dim,
        &format!("合計: {}名", employees.len()),
    );
    out.push('\n');
    out
}

fn row(cells: [&str; 5]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(COLUMNS).enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&pad(cell, width));
    }
    line.trim_end().to_string()
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let left = width.saturating_sub(len) / 2;
    format!("{}{text}", " ".repeat(left))
}

struct Style<'a> {
    theme: &'a Theme,
    color: bool,
}

impl Style<'_> {
    fn rule(&self, out: &mut String, ch: char) {
        let line: String = std::iter::repeat(ch).take(RULE_WIDTH).collect();
        self.paint(out, &self.theme.colors.border, &line);
        out.push('\n');
    }

    fn paint(&self, out: &mut String, hex: &str, text: &str) {
        if self.color {
            let _ = write!(out, "{}{text}{}", Theme::fg(hex), Theme::reset());
        } else {
            out.push_str(text);
        }
    }

    fn paint_bold(&self, out: &mut String, hex: &str, text: &str) {
        if self.color {
            out.push_str(Theme::bold());
        }
        self.paint(out, hex, text);
    }

    fn paint_dim(&self, out: &mut String, hex: &str, text: &str) {
        if self.color {
            out.push_str(Theme::dim());
        }
        self.paint(out, hex, text);
    }
}
