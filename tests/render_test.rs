//! Integration tests for serialization.

use proptest::prelude::*;
use quick_xml::escape::unescape;

use tagtree::elements::{a, article, div, h1, h2, img, li, p, section, ul};
use tagtree::export::{HtmlSerializer, RenderConfig, VoidStyle};
use tagtree::style::{Direction, Padding, StyleOptions, TextAlign};
use tagtree::{Node, render, render_document, render_pretty};

fn card() -> Node {
    div()
        .class("card")
        .child(h1().text("Title"))
        .child(p().text("Body & more"))
        .build()
        .unwrap()
}

#[test]
fn test_card_example() {
    let html = render(&card()).unwrap();
    assert_eq!(
        html,
        r#"<div class="card"><h1>Title</h1><p>Body &amp; more</p></div>"#
    );

    // No stray attributes on the children.
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<p>Body &amp; more</p>"));
}

#[test]
fn test_rendering_is_deterministic() {
    assert_eq!(render(&card()).unwrap(), render(&card()).unwrap());
    assert_eq!(render_pretty(&card()).unwrap(), render_pretty(&card()).unwrap());
}

#[test]
fn test_pretty_nested_layout() {
    let page = section()
        .style(StyleOptions::new().direction(Direction::FlexColumn).padding(Padding::Large))
        .child(h2().style(StyleOptions::new().text_align(TextAlign::Center)).text("News"))
        .child(
            article()
                .child(p().text("First ").child(a().attribute("href", "/1").text("story")))
                .child(img().attribute("src", "a.png").attribute("alt", "")),
        )
        .child(ul().child(li().text("one")).child(li().text("two")))
        .build()
        .unwrap();

    let expected = "\
<section style=\"display: flex; padding: 2rem; flex-direction: column\">
  <h2 style=\"text-align: center\">News</h2>
  <article>
    <p>First <a href=\"/1\">story</a></p>
    <img src=\"a.png\" alt=\"\"/>
  </article>
  <ul>
    <li>one</li>
    <li>two</li>
  </ul>
</section>";
    assert_eq!(render_pretty(&page).unwrap(), expected);

    let html_void = HtmlSerializer::new().with_config(RenderConfig {
        indent_width: 1,
        void_style: VoidStyle::Html,
    });
    let out = html_void.render_pretty(&page).unwrap();
    assert!(out.contains("\n  <img src=\"a.png\" alt=\"\">\n"));
}

#[test]
fn test_document_prefix_only_for_html_root() {
    let doc = tagtree::elements::html()
        .child(tagtree::elements::body().child(p().text("x")))
        .build()
        .unwrap();
    assert_eq!(
        render_document(&doc, false).unwrap(),
        "<!DOCTYPE html>\n<html><body><p>x</p></body></html>"
    );
    assert_eq!(render_document(&card(), false).unwrap(), render(&card()).unwrap());
}

#[test]
fn test_display_is_compact_render() {
    assert_eq!(format!("{}", card()), render(&card()).unwrap());
}

fn text_between<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
    let start = html.find(open).unwrap() + open.len();
    let end = html.rfind(close).unwrap();
    &html[start..end]
}

proptest! {
    #[test]
    fn prop_text_escaping_round_trips(text in "\\PC*") {
        let node = p().text(text.clone()).build().unwrap();
        let html = render(&node).unwrap();
        let inner = text_between(&html, "<p>", "</p>");
        prop_assert!(!inner.contains('<'));
        prop_assert_eq!(unescape(inner).unwrap(), text.as_str());
    }

    #[test]
    fn prop_attribute_escaping_round_trips(value in "\\PC*") {
        let node = p().attribute("title", value.clone()).build().unwrap();
        let html = render(&node).unwrap();
        let inner = text_between(&html, "<p title=\"", "\"></p>");
        prop_assert!(!inner.contains('"'));
        prop_assert_eq!(unescape(inner).unwrap(), value.as_str());
    }

    #[test]
    fn prop_pretty_is_idempotent(
        items in prop::collection::vec("[a-z &<>]{0,12}", 0..6),
        nested in any::<bool>(),
    ) {
        let list = ul().children(items.iter().map(|item| li().text(item.clone())));
        let node = if nested {
            div().child(section().child(list)).build().unwrap()
        } else {
            list.build().unwrap()
        };
        let first = render_pretty(&node).unwrap();
        prop_assert_eq!(render_pretty(&node).unwrap(), first.clone());

        let compact = render(&node).unwrap();
        let joined: String = first.lines().map(str::trim_start).collect();
        prop_assert_eq!(joined, compact);
    }
}
