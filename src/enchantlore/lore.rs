//! # Lore Line Encoding
//!
//! A custom enchantment is stored on an item as a single lore line:
//!
//! ```text
//! <display name>                 level 1 of an enchant whose max level is 1
//! <display name> <numeral>       every other case, e.g. "§7Lifesteal III"
//! ```
//!
//! The functions here are pure transforms over a lore list. They never look at
//! an item directly, which keeps the ordering rules testable on plain vectors.
//!
//! ## Placement
//!
//! Writing an enchant scans the lore once, from the tail towards the head:
//!
//! - A line already encoding this enchant is replaced in place, and the scan
//!   stops there.
//! - Otherwise the new line goes right after the last line that encodes *any*
//!   registered enchant, so enchant lines stay grouped.
//! - With no enchant lines at all, the line is appended.
//!
//! A line belongs to an enchant when it equals the display name, or starts with
//! the display name followed by a single space. Requiring the space keeps
//! `§7Sharp` from claiming `§7Sharpness II`. When two display names both fit a
//! line (`§7Sharp` and `§7Sharp Edge` on `§7Sharp Edge II`), the longer one owns
//! it; the registry settles that, so the transforms below take an `owns`
//! predicate rather than a bare display name.

use crate::error::Result;
use crate::numeral::{from_numeral, to_numeral};

/// Where a new enchant line should be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Overwrite the existing line at this index.
    Replace(usize),
    /// Insert before this index (may equal the list length).
    Insert(usize),
}

/// Whether `line` has the shape of a line for this display name.
pub fn is_line_for(line: &str, display_name: &str) -> bool {
    match line.strip_prefix(display_name) {
        Some(rest) => rest.is_empty() || rest.starts_with(' '),
        None => false,
    }
}

/// Renders the lore line for `level`.
pub fn render_line(display_name: &str, max_level: i32, level: i32) -> String {
    if level == 1 && max_level == 1 {
        return display_name.to_string();
    }
    format!("{} {}", display_name, to_numeral(level))
}

/// Decodes the level of a line already known to belong to `display_name`.
pub fn parse_line_level(line: &str, display_name: &str) -> Result<i32> {
    let rest = line.strip_prefix(display_name).unwrap_or(line);
    if rest.is_empty() {
        return Ok(1);
    }
    from_numeral(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Finds where an enchant's line goes.
///
/// `owns` picks out the enchant's own lines. `recognizes` answers whether a
/// line encodes some registered enchant; it is only used to find the
/// insertion boundary.
pub fn locate<O, R>(lines: &[String], owns: O, recognizes: R) -> Placement
where
    O: Fn(&str) -> bool,
    R: Fn(&str) -> bool,
{
    let mut boundary = None;
    for (i, line) in lines.iter().enumerate().rev() {
        if owns(line.as_str()) {
            return Placement::Replace(i);
        }
        if boundary.is_none() && recognizes(line.as_str()) {
            boundary = Some(i + 1);
        }
    }
    Placement::Insert(boundary.unwrap_or(lines.len()))
}

/// Writes `line` into `lines` at the given placement.
///
/// # Panics
///
/// Panics if the placement is out of bounds: `Replace(i)` needs
/// `i < lines.len()`, `Insert(i)` needs `i <= lines.len()`. Placements from
/// [`locate`] on the same list are always in bounds.
pub fn write_line(mut lines: Vec<String>, placement: Placement, line: String) -> Vec<String> {
    match placement {
        Placement::Replace(i) => lines[i] = line,
        Placement::Insert(i) => lines.insert(i, line),
    }
    lines
}

/// Drops every line `owns` accepts.
pub fn strip_lines<O>(lines: &[String], owns: O) -> Vec<String>
where
    O: Fn(&str) -> bool,
{
    lines
        .iter()
        .filter(|line| !owns(line.as_str()))
        .cloned()
        .collect()
}

/// Level of `display_name` in `lines`, taken from the owned line nearest the
/// tail. `None` when no line is owned.
pub fn read_level<O>(lines: &[String], display_name: &str, owns: O) -> Result<Option<i32>>
where
    O: Fn(&str) -> bool,
{
    lines
        .iter()
        .rev()
        .find(|line| owns(line.as_str()))
        .map(|line| parse_line_level(line, display_name))
        .transpose()
}
