//! Waypoint demo binary.
//!
//! Wires the navigator to its host adapters and drives it from stdin:
//! `scroll <offset>` moves the viewport and lets the intersection observer
//! deliver its batch, `click <href>` exercises the click-to-scroll handler,
//! `show` reprints the view, `quit` exits.

use std::error::Error;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use waypoint_application::{FollowOutcome, Navigator};
use waypoint_infrastructure::{
    scan_page, AddressBar, BandConfig, IntersectionObserver, PageDocument, SystemClock, Viewport,
    ViewportScroller,
};
use waypoint_ui::NavView;

/// Visible height of the simulated viewport.
const VIEWPORT_HEIGHT: f64 = 1000.0;

/// Built-in demo page, used when no page document is given.
const DEMO_PAGE: &str = include_str!("../pages/demo.json");

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Page document path: first argument, then environment, then the
    // built-in demo page.
    let page_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("WAYPOINT_PAGE").ok());
    let raw = match &page_path {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => DEMO_PAGE.to_string(),
    };

    let document = PageDocument::from_json(&raw)?;
    let scanned = scan_page(&document);

    let view = NavView::from_page(&scanned.model);
    let scroller = ViewportScroller::new(scanned.geometry.clone());
    let mut observer = IntersectionObserver::new(BandConfig::default());
    observer.observe_all(scanned.geometry);

    let mut navigator = Navigator::new(
        scanned.model,
        SystemClock::new(),
        view,
        scroller,
        AddressBar::new("https://example.test/"),
    );
    let mut viewport = Viewport {
        height: VIEWPORT_HEIGHT,
        scroll_y: 0.0,
    };

    // Startup: stamp the last-login timestamp, then let the observer
    // deliver its initial batch for the resting viewport.
    navigator.start();
    let batch = observer.update(&viewport);
    navigator.on_intersections(&batch);
    print_state(&navigator, &viewport);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("scroll"), Some(offset)) => match offset.parse::<f64>() {
                Ok(offset) => {
                    viewport.scroll_y = offset.max(0.0);
                    let batch = observer.update(&viewport);
                    navigator.on_intersections(&batch);
                    print_state(&navigator, &viewport);
                }
                Err(_) => tracing::warn!(offset, "scroll offset is not a number"),
            },
            (Some("click"), Some(href)) => {
                let outcome = navigator.on_click(href);
                if let FollowOutcome::Followed { section_id } = &outcome {
                    tracing::info!(section = %section_id, "followed link");
                }
                // The host owns the animation; jump straight to the
                // requested destination and let the observer catch up.
                if let Some(destination) = navigator.scroller_mut().take_destination() {
                    viewport.scroll_y = destination;
                    let batch = observer.update(&viewport);
                    navigator.on_intersections(&batch);
                }
                print_state(&navigator, &viewport);
            }
            (Some("show"), _) => print_state(&navigator, &viewport),
            (Some("quit") | Some("exit"), _) => break,
            (None, _) => {}
            (Some(other), _) => {
                tracing::warn!(command = other, "unknown command (scroll/click/show/quit)");
            }
        }
    }

    Ok(())
}

type DemoNavigator = Navigator<SystemClock, NavView, ViewportScroller, AddressBar>;

fn print_state(navigator: &DemoNavigator, viewport: &Viewport) {
    println!(
        "-- {} | scroll {:.0} --",
        navigator.history().current_url(),
        viewport.scroll_y
    );
    print!("{}", navigator.presenter().render());
}
