//! Host bridge between the webview document and the viewport hub.
//!
//! A script installed with `document::eval` listens for scroll/resize and
//! observes every element carrying `data-reveal-threshold`, forwarding each
//! notification as a JSON [`ViewportEvent`]. Messages that fail to parse are
//! logged and skipped.

use dioxus::prelude::*;
use meraki_core::{ViewportEvent, ViewportHub};

const BRIDGE_SCRIPT: &str = r#"
const send = (message) => dioxus.send(JSON.stringify(message));

const reportScroll = () => send({
  kind: "scroll",
  offset_y: window.scrollY,
  viewport_height: window.innerHeight,
});

window.addEventListener("scroll", reportScroll, { passive: true });
window.addEventListener("resize", reportScroll);
reportScroll();

document.querySelectorAll("[data-reveal-threshold]").forEach((element) => {
  const observer = new IntersectionObserver((entries) => {
    for (const entry of entries) {
      send({
        kind: "intersection",
        target: element.id,
        ratio: entry.intersectionRatio,
        is_intersecting: entry.isIntersecting,
      });
    }
  }, {
    threshold: parseFloat(element.dataset.revealThreshold),
    rootMargin: element.dataset.revealMargin || "0px",
  });
  observer.observe(element);
});
"#;

/// Install the bridge once the page has mounted and pump its messages
/// into `hub` for the life of the calling component.
pub fn use_viewport_bridge(hub: ViewportHub) {
    use_effect(move || {
        let hub = hub.clone();
        spawn(async move {
            let mut bridge = document::eval(BRIDGE_SCRIPT);
            tracing::debug!("Viewport bridge installed");

            loop {
                match bridge.recv::<String>().await {
                    Ok(raw) => match ViewportEvent::from_json(&raw) {
                        Ok(event) => hub.dispatch(event),
                        Err(e) => {
                            tracing::warn!(error = %e, "Dropped viewport message");
                        }
                    },
                    Err(e) => {
                        tracing::warn!("Viewport bridge closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    });
}
