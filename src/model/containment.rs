//! Containment rules: which children a parent tag admits.
//!
//! Rules are evaluated once, when a child is attached. The serializer does
//! not re-check them.

use super::category::{Category, classify, is_void};

/// Whether a `child` element may be attached under `parent`.
pub fn can_contain(parent: &str, child: &str) -> bool {
    if is_void(parent) {
        return false;
    }

    let child_category = classify(child);
    match classify(parent) {
        Category::BlockContainer
        | Category::DocumentBody
        | Category::ListItem
        | Category::TableCell => true,

        Category::Inline | Category::Metadata | Category::Void => false,

        Category::List => child_category == Category::ListItem,

        Category::TableRoot => {
            matches!(
                child_category,
                Category::TableSection | Category::TableRow | Category::TableCell
            ) || matches!(child, "caption" | "colgroup")
        }
        Category::TableSection => {
            matches!(child_category, Category::TableRow | Category::TableCell)
        }
        Category::TableRow => child_category == Category::TableCell,

        // A form never nests a form; form is FormRoot, so the category check
        // already excludes it.
        Category::FormRoot => child_category == Category::FormControl,
        Category::FormControl => match parent {
            "select" => matches!(child, "option" | "optgroup"),
            "optgroup" => child == "option",
            "fieldset" => child_category == Category::FormControl,
            "label" => matches!(child_category, Category::Inline | Category::FormControl),
            _ => false,
        },

        Category::DocumentHead => child_category == Category::Metadata,
        Category::DocumentRoot => {
            matches!(child_category, Category::DocumentHead | Category::DocumentBody)
        }

        Category::Unclassified => parent == "colgroup" && child == "col",
    }
}

/// Whether text may be attached under `parent`.
pub fn can_contain_text(parent: &str) -> bool {
    if is_void(parent) {
        return false;
    }
    !matches!(
        classify(parent),
        Category::Unclassified
            | Category::List
            | Category::TableRoot
            | Category::TableSection
            | Category::TableRow
            | Category::DocumentRoot
            | Category::DocumentHead
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_admit_only_items() {
        assert!(can_contain("ul", "li"));
        assert!(can_contain("ol", "li"));
        assert!(can_contain("dl", "dt"));
        assert!(!can_contain("ul", "p"));
        assert!(!can_contain("ul", "ul"));
    }

    #[test]
    fn test_forms_never_nest() {
        assert!(!can_contain("form", "form"));
        assert!(can_contain("form", "input"));
        assert!(can_contain("form", "label"));
        assert!(!can_contain("form", "div"));
        assert!(!can_contain("fieldset", "form"));
    }

    #[test]
    fn test_inline_admits_no_elements() {
        for child in ["span", "div", "a", "em", "br", "my-widget"] {
            assert!(!can_contain("span", child), "span > {child}");
        }
        assert!(can_contain_text("span"));
    }

    #[test]
    fn test_blocks_and_body_admit_anything() {
        for child in ["div", "span", "ul", "table", "my-widget", "form"] {
            assert!(can_contain("div", child));
            assert!(can_contain("body", child));
        }
    }

    #[test]
    fn test_table_structure() {
        for child in ["thead", "tbody", "tfoot", "tr", "th", "td", "caption", "colgroup"] {
            assert!(can_contain("table", child), "table > {child}");
        }
        assert!(!can_contain("table", "div"));
        assert!(can_contain("tbody", "tr"));
        assert!(can_contain("thead", "th"));
        assert!(!can_contain("tbody", "tbody"));
        assert!(can_contain("tr", "td"));
        assert!(!can_contain("tr", "tr"));
        assert!(can_contain("td", "table"));
        assert!(can_contain("colgroup", "col"));
        assert!(!can_contain("colgroup", "td"));
    }

    #[test]
    fn test_head_admits_metadata() {
        for child in ["title", "meta", "link", "style", "script"] {
            assert!(can_contain("head", child));
        }
        assert!(!can_contain("head", "div"));
        assert!(!can_contain_text("head"));
        assert!(can_contain_text("title"));
    }

    #[test]
    fn test_document_root() {
        assert!(can_contain("html", "head"));
        assert!(can_contain("html", "body"));
        assert!(!can_contain("html", "div"));
    }

    #[test]
    fn test_void_admits_nothing() {
        for parent in ["br", "hr", "img", "input", "meta"] {
            assert!(!can_contain(parent, "span"));
            assert!(!can_contain_text(parent));
        }
    }

    #[test]
    fn test_select_options() {
        assert!(can_contain("select", "option"));
        assert!(can_contain("select", "optgroup"));
        assert!(can_contain("optgroup", "option"));
        assert!(!can_contain("select", "div"));
        assert!(!can_contain("button", "span"));
        assert!(can_contain("label", "input"));
        assert!(can_contain_text("option"));
    }

    #[test]
    fn test_unclassified_parent_fails_safe() {
        assert!(!can_contain("canvas", "div"));
        assert!(!can_contain("my-widget", "span"));
        assert!(!can_contain_text("my-widget"));
    }

    #[test]
    fn test_text_placement() {
        assert!(can_contain_text("p"));
        assert!(can_contain_text("li"));
        assert!(can_contain_text("td"));
        assert!(!can_contain_text("ul"));
        assert!(!can_contain_text("table"));
        assert!(!can_contain_text("tr"));
        assert!(!can_contain_text("html"));
    }
}
