use std::fmt::Display;
use std::io;
use std::io::Write;

use crate::snapshot::Snapshot;

/// Write the snapshot as a sideways tree, root first, one node per line,
/// with the style's title and color on a header line above it.
pub fn write_tree<T, W>(out: &mut W, snapshot: &Snapshot<'_, T>) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    writeln!(out, "{} ({})", snapshot.style.title, snapshot.style.color)?;
    if snapshot.values.is_empty() {
        return writeln!(out, "(empty)");
    }
    writeln!(out, "{}", snapshot.values[0])?;
    write_children(out, snapshot.values, 0, "")
}

fn write_children<T, W>(out: &mut W, values: &[T], pos: usize, prefix: &str) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    let left = 2 * pos + 1;
    let right = 2 * pos + 2;
    if left >= values.len() {
        return Ok(());
    }
    if right < values.len() {
        writeln!(out, "{}├── {}", prefix, values[left])?;
        write_children(out, values, left, &format!("{}│   ", prefix))?;
        writeln!(out, "{}└── {}", prefix, values[right])?;
        write_children(out, values, right, &format!("{}    ", prefix))
    } else {
        writeln!(out, "{}└── {}", prefix, values[left])?;
        write_children(out, values, left, &format!("{}    ", prefix))
    }
}

/// Render into a String instead of a writer.
pub fn tree_to_string<T: Display>(snapshot: &Snapshot<'_, T>) -> String {
    let mut out = Vec::new();
    // Vec<u8> writes cannot fail and the output is UTF-8 by construction
    write_tree(&mut out, snapshot).unwrap();
    String::from_utf8(out).unwrap()
}

#[cfg(test)]
mod tests {
    use crate::snapshot::Style;

    use super::*;

    fn snap<'a>(values: &'a [i32], style: &'a Style) -> Snapshot<'a, i32> {
        Snapshot { values, style }
    }

    #[test]
    fn empty_tree_renders_header_and_marker() {
        let style = Style::default();
        let rendered = tree_to_string(&snap(&[], &style));
        assert_eq!(rendered, "Binary Heap (skyblue)\n(empty)\n");
    }

    #[test]
    fn single_node_renders_root_only() {
        let style = Style::new("#ffcc00", "teste 1");
        let rendered = tree_to_string(&snap(&[42], &style));
        assert_eq!(rendered, "teste 1 (#ffcc00)\n42\n");
    }

    #[test]
    fn lone_left_child_gets_corner_branch() {
        let style = Style::default();
        let rendered = tree_to_string(&snap(&[2, 1], &style));
        assert_eq!(rendered, "Binary Heap (skyblue)\n2\n└── 1\n");
    }

    #[test]
    fn multi_level_tree_uses_branch_prefixes() {
        let style = Style::default();
        let rendered = tree_to_string(&snap(&[30, 15, 25, 1, 5, 10, 20], &style));
        let expected = "\
Binary Heap (skyblue)
30
├── 15
│   ├── 1
│   └── 5
└── 25
    ├── 10
    └── 20
";
        assert_eq!(rendered, expected);
    }
}
