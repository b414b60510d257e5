//! Basic integration tests for element building
//!
//! These tests build small pages the way compiled components do: nested
//! `jsx`/`jsxs` calls, components as plain functions, and explicit escaping
//! of untrusted text.

use html_jsx::test_utils::{count_elements, extract_attrs_by_selector, extract_text};
use html_jsx::*;
use pretty_assertions::assert_eq;

struct Purchase {
    name: &'static str,
    price: f64,
    quantity: u32,
}

fn purchase_card(props: Props) -> Element {
    let name = props.get_str("name").unwrap_or_default();
    let price = props.get("price").cloned().unwrap_or(AttrValue::Null);
    let quantity = props.get("quantity").cloned().unwrap_or(AttrValue::Null);

    jsxs(
        "div",
        Props::new()
            .attr("class", "purchase purchase-card")
            .child(jsx("div", Props::new().attr("class", "purchase-name").children(Child::escaped(name))))
            .child(jsx("div", Props::new().attr("class", "purchase-price").children(Child::from(price))))
            .child(jsx("div", Props::new().attr("class", "purchase-quantity").children(Child::from(quantity)))),
    )
}

fn layout(mut props: Props) -> Element {
    let title = props.get_str("title").unwrap_or_default().to_string();
    let body = props.take_children().unwrap_or_default();

    jsxs(
        "html",
        Props::new()
            .attr("lang", "en")
            .child(jsxs(
                "head",
                Props::new()
                    .child(jsx("title", Props::new().children(Child::escaped(&title))))
                    .child(jsx("meta", Props::new().attr("name", "viewport").attr("content", "width=device-width"))),
            ))
            .child(jsx("body", Props::new().children(body))),
    )
}

#[test]
fn test_component_page() {
    let purchases = [
        Purchase { name: "Tea & Biscuits", price: 3.5, quantity: 2 },
        Purchase { name: "<Coffee>", price: 4.0, quantity: 1 },
    ];

    let card = Component::named("PurchaseCard", purchase_card);
    let cards: Vec<Child> = purchases
        .iter()
        .map(|p| {
            let props = Props::new()
                .attr("name", p.name)
                .attr("price", p.price)
                .attr("quantity", p.quantity);
            jsx(&card, props).into()
        })
        .collect();

    let page = jsx(
        Tag::component(layout),
        Props::new().attr("title", "Orders 'today'").children(cards),
    )
    .into_ready()
    .unwrap();

    assert!(page.starts_with("<html lang='en'><head><title>Orders &#39today&#39</title>"));
    assert!(page.contains("<meta name='viewport' content='width=device-width'>"));
    assert!(page.contains("<div class='purchase-name'>Tea &amp; Biscuits</div>"));
    assert!(page.contains("<div class='purchase-name'>&lt;Coffee></div>"));
    assert!(page.contains("<div class='purchase-price'>3.5</div>"));
    assert!(page.contains("<div class='purchase-price'>4</div>"));
    assert!(page.ends_with("</body></html>"));

    assert_eq!(count_elements(&page, "div.purchase-card"), 2);
    assert_eq!(count_elements(&page, "coffee"), 0);
}

#[test]
fn test_exact_small_tree() {
    let tree = jsxs(
        "ul",
        Props::new()
            .attr("id", "nav")
            .child(jsx("li", Props::new().children(jsx("a", Props::new().attr("href", "/").children("Home")))))
            .child(jsx("li", Props::new().children(jsx("a", Props::new().attr("href", "/about").children("About"))))),
    );

    assert_eq!(
        tree,
        "<ul id='nav'><li><a href='/'>Home</a></li><li><a href='/about'>About</a></li></ul>"
    );
}

#[test]
fn test_every_void_element() {
    for name in VOID_ELEMENTS {
        let out = jsx(name, Props::new().children(vec!["x", "y"]));
        assert_eq!(out, format!("<{}>", name));
    }
}

#[test]
fn test_div_children_forms() {
    assert_eq!(jsx("div", Props::new().children(Child::Null)), "<div></div>");
    assert_eq!(
        jsx("div", Props::new().children(vec![Child::from("a"), Child::Null, Child::from("b")])),
        "<div>ab</div>"
    );
}

#[test]
fn test_component_equals_direct_call() {
    let direct = purchase_card(Props::new().attr("name", "x").attr("price", 1)).into_ready();
    let via_jsx = jsx(Tag::component(purchase_card), Props::new().attr("name", "x").attr("price", 1)).into_ready();
    assert_eq!(direct, via_jsx);
}

#[test]
fn test_attribute_contract_is_weaker_than_text() {
    let untrusted = "\"><script>alert(1)</script>";
    let out = jsx(
        "input",
        Props::new().attr("value", untrusted),
    )
    .into_ready()
    .unwrap();

    // Quote neutralization keeps the value inside its attribute
    assert_eq!(out, "<input value='\"><script>alert(1)</script>'>");
    assert_eq!(count_elements(&out, "script"), 0);
    assert_eq!(extract_attrs_by_selector(&out, "input", "value"), vec![untrusted]);
}

#[test]
fn test_props_from_json() {
    let props = Props::from_json_str(
        r#"{"class": "it's", "data-count": 3, "hidden": false, "open": true, "children": ["a", null, "b"]}"#,
    )
    .unwrap();

    assert_eq!(jsx("details", props), "<details class='it\"s' data-count='3' open>ab</details>");
}

#[test]
fn test_fragment_has_no_wrapper() {
    let out = jsx(
        "section",
        Props::new().children(jsx(
            Tag::Fragment,
            Props::new().children(vec![jsx("h1", Props::new().children("T")), jsx("p", Props::new())]),
        )),
    );
    assert_eq!(out, "<section><h1>T</h1><p></p></section>");
    assert_eq!(extract_text(out.as_ready().unwrap()), "T");
}

#[test]
fn test_number_layout_in_attributes_and_children() {
    assert_eq!(jsx("i", Props::new().attr("n", 1e21)), "<i n='1e+21'></i>");
    assert_eq!(jsx("i", Props::new().attr("n", 1e-7)), "<i n='1e-7'></i>");
    assert_eq!(
        jsx("i", Props::new().children(123456789012345680000.0)),
        "<i>123456789012345680000</i>"
    );
    assert_eq!(render(&["<i>", "</i>"], &[TemplateValue::from(1e21)]), "<i>1e+21</i>");
}
