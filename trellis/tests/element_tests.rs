use facet_testhelpers::test;
use trellis::{Element, Error, Html, html_attributes};

#[test]
fn test_nested_elements_render_in_order() {
    let mut list = Element::new("ul").unwrap();
    list.add_class("menu").unwrap();
    for (href, text) in [("/a", "A & B"), ("/b", "<b>")] {
        let mut link = Element::new("a").unwrap();
        link.merge_attribute("href", href)
            .unwrap()
            .set_inner_text(text)
            .unwrap();
        let mut item = Element::new("li").unwrap();
        item.append_child(link);
        list.append_child(item);
    }
    assert_eq!(
        list.render(),
        concat!(
            r#"<ul class="menu">"#,
            r#"<li><a href="/a">A &amp; B</a></li>"#,
            r#"<li><a href="/b">&lt;b&gt;</a></li>"#,
            "</ul>"
        )
    );
}

#[test]
fn test_class_attribute_and_add_class_agree() {
    let mut div = Element::new("div").unwrap();
    div.merge_attribute("id", "main")
        .unwrap()
        .add_class("a")
        .unwrap()
        .merge_attribute("title", "t")
        .unwrap()
        .add_class("b")
        .unwrap();
    assert_eq!(div.attribute("class"), Some("a b"));
    assert!(div.has_class("b"));
    assert_eq!(
        div.render(),
        r#"<div id="main" class="a b" title="t"></div>"#
    );
}

#[test]
fn test_merge_does_not_override_caller_values() {
    let mut input = Element::new("input").unwrap();
    input
        .merge_attributes(&html_attributes([("type", "email"), ("data_role", "x")]))
        .unwrap()
        .merge_attribute("type", "text")
        .unwrap();
    assert_eq!(
        input.render(),
        r#"<input type="email" data-role="x"></input>"#
    );
}

#[test]
fn test_content_then_children() {
    let mut p = Element::new("p").unwrap();
    p.append_child(Html::new("<em>child</em>"))
        .set_inner_html("<strong>content</strong>");
    assert_eq!(
        p.render(),
        "<p><strong>content</strong><em>child</em></p>"
    );
}

#[test]
fn test_rendered_element_is_frozen() {
    let mut span = Element::new("span").unwrap();
    span.set_inner_text("first").unwrap();
    let first = span.render().to_string();
    span.set_inner_text("second").unwrap();
    span.append_child("<b>late</b>");
    assert_eq!(span.render(), first);
    assert_eq!(span.to_string(), first);
}

#[test]
fn test_argument_errors() {
    assert_eq!(
        Element::new("").unwrap_err(),
        Error::InvalidArgument {
            argument: "tag".to_string()
        }
    );
    let mut div = Element::new("div").unwrap();
    assert!(div.add_class("").is_err());
    assert!(div.set_attribute("", "x", true).is_err());
    assert!(div.set_inner_text("").is_err());
    assert_eq!(div.render(), "<div></div>");
}

#[test]
fn test_error_messages() {
    let message = Error::InvalidArgument {
        argument: "tag".to_string(),
    }
    .to_string();
    assert!(message.contains("`tag` must not be empty"));
    assert!(
        Error::MissingCollectionName
            .to_string()
            .contains("name of collection must be provided")
    );
}
