/// Presentation label attached to a heap and passed through to every
/// snapshot verbatim. The heap never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub color: String,
    pub title: String,
}

impl Style {
    pub fn new(color: &str, title: &str) -> Self {
        Style {
            color: color.to_string(),
            title: title.to_string(),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::new("skyblue", "Binary Heap")
    }
}

/// Read-only view of a heap handed to the snapshot hook after each
/// mutation step. `values` holds positions 1 through size in level order.
pub struct Snapshot<'a, T> {
    pub values: &'a [T],
    pub style: &'a Style,
}

/// Callback invoked synchronously after every mutation step of the heap
/// that owns it. The heap does not continue until the hook returns.
pub type SnapshotHook<T> = Box<dyn FnMut(Snapshot<'_, T>)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_skyblue() {
        let style = Style::default();
        assert_eq!(style.color, "skyblue");
        assert_eq!(style.title, "Binary Heap");
    }

    #[test]
    fn style_new_stores_both_fields() {
        let style = Style::new("#ffcc00", "teste 1");
        assert_eq!(style.color, "#ffcc00");
        assert_eq!(style.title, "teste 1");
    }
}
