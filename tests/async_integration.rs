//! Integration tests for pending children
//!
//! A pending child turns every enclosing element into a pending element.
//! Output order is always positional, whatever order the children finish in.

use std::time::Duration;

use html_jsx::*;
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;

async fn delayed(text: &'static str, millis: u64) -> String {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    text.to_string()
}

fn user_badge(props: Props) -> Element {
    let id = props.get("id").and_then(AttrValue::as_number).map(|n| n.to_string()).unwrap_or_default();
    jsx(
        "span",
        Props::new()
            .attr("class", "badge")
            .children(Child::pending(async move { format!("user-{}", id) })),
    )
}

#[tokio::test]
async fn test_positional_order_with_out_of_order_completion() {
    let list = jsxs(
        "ol",
        Props::new()
            .child(jsx("li", Props::new().children(Child::pending(delayed("slow", 40)))))
            .child(jsx("li", Props::new().children("sync")))
            .child(jsx("li", Props::new().children(Child::pending(delayed("fast", 1))))),
    );

    assert!(list.is_pending());
    assert_eq!(list.await, "<ol><li>slow</li><li>sync</li><li>fast</li></ol>");
}

#[tokio::test]
async fn test_pending_propagates_through_components() {
    let badge = Component::named("UserBadge", user_badge);
    let page = jsx(
        "div",
        Props::new().attr("id", "root").children(vec![
            Child::from("Hi "),
            jsx(&badge, Props::new().attr("id", 42)).into(),
        ]),
    );

    assert!(page.is_pending());
    assert_eq!(page.into_string().await, "<div id='root'>Hi <span class='badge'>user-42</span></div>");
}

#[tokio::test]
async fn test_channel_driven_children() {
    let (a_tx, a_rx) = oneshot::channel::<String>();
    let (b_tx, b_rx) = oneshot::channel::<String>();

    let element = jsx(
        "p",
        Props::new().children(vec![
            Child::pending(async move { a_rx.await.unwrap_or_default() }),
            Child::from("-"),
            Child::pending(async move { b_rx.await.unwrap_or_default() }),
        ]),
    );

    let handle = tokio::spawn(element.into_string());
    b_tx.send("B".to_string()).unwrap();
    a_tx.send("A".to_string()).unwrap();

    assert_eq!(handle.await.unwrap(), "<p>A-B</p>");
}

#[tokio::test]
async fn test_synchronous_result_stays_synchronous() {
    let element = jsxs("p", Props::new().child("a").child(1).child(true));
    assert!(!element.is_pending());
    assert_eq!(element.await, "<p>a1true</p>");
}

#[tokio::test]
async fn test_pending_fragment() {
    let element = jsx(
        Tag::Fragment,
        Props::new().children(vec![Child::pending(delayed("x", 5)), Child::from("y")]),
    );
    assert!(element.is_pending());
    assert_eq!(element.await, "xy");
}

#[tokio::test]
async fn test_pending_matches_synchronous_output() {
    let build = |pending: bool| {
        let middle = if pending {
            Child::pending(async { "<b>mid</b>".to_string() })
        } else {
            Child::from("<b>mid</b>")
        };
        jsxs(
            "section",
            Props::new()
                .attr("class", vec!["a", "b"])
                .child(jsx("h1", Props::new().children("t")))
                .child(middle)
                .child(jsx("br", Props::new())),
        )
    };

    let sync = build(false).into_ready().unwrap();
    let asynchronous = build(true).into_string().await;
    assert_eq!(sync, asynchronous);
    assert_eq!(sync, "<section class='a,b'><h1>t</h1><b>mid</b><br></section>");
}
