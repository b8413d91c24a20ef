// src/pipeline/watch.rs

//! Render loop: fetch, classify, render, sleep, until interrupted.

use std::future::Future;
use std::io;
use std::time::{Duration, Instant};

use chrono::Local;
use console::Term;
use reqwest::Client;

use crate::error::Result;
use crate::models::{Config, Feed};
use crate::services::{TableRenderer, classify_all};
use crate::utils::http;

/// Delay between polling cycles.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Output surface for rendered frames.
pub trait Screen {
    /// Replace whatever is shown with `frame`.
    fn present(&mut self, frame: &str) -> io::Result<()>;

    /// Called once on shutdown.
    fn finish(&mut self) -> io::Result<()>;
}

impl Screen for Term {
    fn present(&mut self, frame: &str) -> io::Result<()> {
        self.clear_screen()?;
        self.write_str(frame)?;
        self.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        // Keep the shell prompt off the last table line.
        self.write_line("")
    }
}

/// Watch `feed` on the terminal until Ctrl-C.
pub async fn run_watcher(config: &Config, feed: Feed) -> Result<()> {
    let client = http::create_client(&config.http)?;
    let renderer = TableRenderer::new(config.display.color.enabled());
    let mut term = Term::stdout();

    log::info!("Watching {} ({})", feed, feed.description());

    watch(
        &client,
        &feed.url(),
        renderer,
        &mut term,
        POLL_INTERVAL,
        tokio::signal::ctrl_c(),
    )
    .await
}

/// Run polling cycles until `interrupt` resolves.
///
/// The interrupt is raced against both the fetch and the sleep. Fetch and
/// parse errors end the loop and are returned unchanged.
pub async fn watch<S, F>(
    client: &Client,
    url: &str,
    renderer: TableRenderer,
    screen: &mut S,
    interval: Duration,
    interrupt: F,
) -> Result<()>
where
    S: Screen,
    F: Future<Output = io::Result<()>>,
{
    tokio::pin!(interrupt);
    let mut cycles: u64 = 0;

    loop {
        let frame = tokio::select! {
            biased;
            signal = &mut interrupt => {
                signal?;
                break;
            }
            frame = poll_once(client, url, &renderer) => frame?,
        };

        screen.present(&frame)?;
        cycles += 1;
        log::debug!("Cycle {} rendered, next in {:?}", cycles, interval);

        tokio::select! {
            biased;
            signal = &mut interrupt => {
                signal?;
                break;
            }
            _ = tokio::time::sleep(interval) => {}
        }
    }

    screen.finish()?;
    log::info!("Interrupted after {} cycles", cycles);
    Ok(())
}

/// One cycle's fetch, classify and render. Returns the finished frame.
pub async fn poll_once(client: &Client, url: &str, renderer: &TableRenderer) -> Result<String> {
    let started = Instant::now();
    let feed = http::fetch_feed(client, url).await?;
    let rows = classify_all(feed.records())?;

    log::debug!(
        "Fetched {} records from {} in {:?}",
        rows.len(),
        url,
        started.elapsed()
    );

    renderer.frame(feed.title(), &rows, &Local::now())
}
