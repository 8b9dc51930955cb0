//! JSON-lines fixture feed over a file or stdin.

use async_trait::async_trait;
use scoreline_core::{error::ScorelineError, fixture::FixtureRecord, traits::FixtureFeed};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Where fixture lines come from.
#[derive(Debug, Clone)]
pub enum FeedSource {
    File(PathBuf),
    Stdin,
}

/// One JSON fixture object per line. Unparseable lines are skipped.
pub struct JsonLinesFeed {
    source: FeedSource,
}

impl JsonLinesFeed {
    pub fn new(source: FeedSource) -> Self {
        Self { source }
    }

    /// `-` or no path reads stdin.
    pub fn from_arg(path: Option<&str>) -> Self {
        match path {
            None | Some("-") => Self::new(FeedSource::Stdin),
            Some(p) => Self::new(FeedSource::File(PathBuf::from(p))),
        }
    }
}

#[async_trait]
impl FixtureFeed for JsonLinesFeed {
    fn name(&self) -> &str {
        "json-lines"
    }

    async fn start(&self) -> Result<mpsc::Receiver<FixtureRecord>, ScorelineError> {
        let (tx, rx) = mpsc::channel(256);
        match &self.source {
            FeedSource::File(path) => {
                let file = tokio::fs::File::open(path).await?;
                tokio::spawn(pump(BufReader::new(file), tx));
            }
            FeedSource::Stdin => {
                tokio::spawn(pump(BufReader::new(tokio::io::stdin()), tx));
            }
        }
        Ok(rx)
    }
}

async fn pump<R: AsyncBufRead + Unpin>(reader: R, tx: mpsc::Sender<FixtureRecord>) {
    let mut lines = reader.lines();
    let mut line_no = 0usize;
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                line_no += 1;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match serde_json::from_str::<FixtureRecord>(line) {
                    Ok(fixture) => {
                        if tx.send(fixture).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!(line = line_no, "skipping unparseable fixture: {e}"),
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!("fixture feed read error: {e}");
                break;
            }
        }
    }
    debug!(lines = line_no, "fixture feed ended");
}
