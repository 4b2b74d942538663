//! Comment-stream fetching from video pages.
//!
//! Fetching is synchronous and blocking within one interaction: the
//! video page is fetched, the comment-stream id (`cid`) is resolved
//! from the page source, then the XML comment list is fetched and
//! parsed. No retries; a failed call fails that one operation and
//! nothing else.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::time::Duration;

/// Desktop browser identity sent with both requests; the comment API
/// rejects clients without one.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const REFERER: &str = "https://www.bilibili.com";

const COMMENT_API: &str = "https://api.bilibili.com/x/v1/dm/list.so";

static CID: Lazy<Regex> = Lazy::new(|| Regex::new(r#""cid":(\d+)"#).expect("valid cid pattern"));

static COMMENT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<d p="([0-9.]+),[^"]*">([^<]*)</d>"#).expect("valid tag pattern"));

/// One timed comment from a video's comment stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    /// Offset into the video, in seconds.
    pub time_seconds: f64,
    /// Comment text, trimmed.
    pub text: String,
}

impl Comment {
    /// Video offset formatted as `mm:ss`.
    #[must_use]
    pub fn timestamp(&self) -> String {
        let seconds = self.time_seconds;
        let minutes = (seconds / 60.0) as u64;
        let remaining = (seconds % 60.0) as u64;
        format!("{minutes:02}:{remaining:02}")
    }
}

/// One exported comment row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentRow {
    /// `mm:ss` display timestamp.
    pub time: String,
    /// Offset into the video, in seconds.
    pub time_seconds: f64,
    /// Comment text.
    pub text: String,
}

/// Flatten comments into export rows.
#[must_use]
pub fn comment_table(comments: &[Comment]) -> Vec<CommentRow> {
    comments
        .iter()
        .map(|c| CommentRow {
            time: c.timestamp(),
            time_seconds: c.time_seconds,
            text: c.text.clone(),
        })
        .collect()
}

/// Blocking comment-stream client.
#[derive(Debug, Clone)]
pub struct DanmakuClient {
    timeout: Duration,
}

impl Default for DanmakuClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DanmakuClient {
    /// Create a client with the default 30s timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Fetch all comments for the video behind `video_url`, sorted by
    /// time ascending.
    pub fn fetch_comments(&self, video_url: &str) -> Result<Vec<Comment>> {
        if video_url.trim().is_empty() {
            return Err(Error::input("video URL must not be empty"));
        }
        let page = self.get(video_url)?;
        let cid = extract_cid(&page)?;
        let xml = self.get(&format!("{COMMENT_API}?oid={cid}"))?;
        let mut comments = parse_comment_xml(&xml);
        comments.sort_by(|a, b| a.time_seconds.total_cmp(&b.time_seconds));
        Ok(comments)
    }

    fn get(&self, url: &str) -> Result<String> {
        let response = ureq::get(url)
            .set("User-Agent", USER_AGENT)
            .set("Referer", REFERER)
            .timeout(self.timeout)
            .call()
            .map_err(|e| Error::network(format!("fetching {url}: {e}")))?;
        response
            .into_string()
            .map_err(|e| Error::network(format!("reading response from {url}: {e}")))
    }
}

/// Resolve the comment-stream id from video page source.
pub fn extract_cid(page: &str) -> Result<u64> {
    let captures = CID
        .captures(page)
        .ok_or_else(|| Error::not_found("no comment id (cid) on the video page"))?;
    captures[1]
        .parse::<u64>()
        .map_err(|e| Error::parse(format!("cid is not a number: {e}")))
}

/// Parse `<d p="seconds,...">text</d>` records out of the comment XML.
/// Blank comments are dropped; malformed timestamps skip the record.
#[must_use]
pub fn parse_comment_xml(xml: &str) -> Vec<Comment> {
    COMMENT_TAG
        .captures_iter(xml)
        .filter_map(|cap| {
            let time_seconds: f64 = cap[1].parse().ok()?;
            let text = cap[2].trim();
            if text.is_empty() {
                return None;
            }
            Some(Comment {
                time_seconds,
                text: text.to_string(),
            })
        })
        .collect()
}
