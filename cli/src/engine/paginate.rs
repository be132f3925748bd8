//! # Pagination Controller
//!
//! File: cli/src/engine/paginate.rs
//!
//! ## Overview
//!
//! Drives repeated calls to a list/describe operation that pages with a
//! continuation token. The controller owns the page cursor (token plus an
//! optional remaining budget) and nothing else: fetching is delegated to a
//! caller-supplied async function and every page is pushed to a `PageSink`
//! as soon as it arrives.
//!
//! ## Modes
//!
//! - **Manual**: the caller supplied a starting token. Exactly one page is
//!   fetched, whatever token comes back.
//! - **Capped**: the caller supplied `max_items`. Each request asks for
//!   `min(remaining, max_page_size)` items; the budget shrinks by the number of
//!   items actually received and iteration stops when it reaches zero or the
//!   token runs out.
//! - **Automatic**: neither. Pages are followed until the service returns an
//!   absent or empty token. Empty pages with a token are followed too.
//!
//! Manual wins when both a starting token and a cap are given; the cap still
//! bounds the size hint of that single page.
//!
//! ## Failures
//!
//! A failed fetch is returned as an error when it is the first page or when no
//! cap was set. Under a cap, once at least one page succeeded, a failure ends
//! the iteration early: it is logged and the summary is marked `truncated`.
//!
//! ## Progress
//!
//! Per-page and final progress events go to the sink in manual and capped
//! modes only. Automatic iteration is silent.
//!
use crate::core::error::Result;
use std::future::Future;
use tracing::{debug, warn};

/// Page size limit for high-volume listings.
pub const HIGH_VOLUME_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingMode {
    Automatic,
    Manual,
    Capped,
}

/// Arguments of one page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub token: Option<String>,
    pub page_size: Option<u32>,
}

/// One fetched page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records handed to the sink.
    pub items: Vec<T>,
    /// Items the service returned on this page. Drives the budget, and can
    /// differ from `items.len()` when the records are a projection.
    pub received: usize,
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// A page whose records are the service's items.
    pub fn of_items(items: Vec<T>, next_token: Option<String>) -> Self {
        Page {
            received: items.len(),
            items,
            next_token,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Page {
        number: u32,
        received: usize,
        next_token: Option<String>,
    },
    Finished {
        pages: u32,
        items: usize,
        next_token: Option<String>,
        truncated: bool,
    },
}

/// Receives pages as they arrive.
pub trait PageSink<T> {
    fn emit(&mut self, items: Vec<T>) -> Result<()>;

    fn progress(&mut self, _event: &Progress) {}
}

/// Result of a completed iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationSummary {
    pub mode: PagingMode,
    pub pages: u32,
    pub items: usize,
    /// Token to resume from, if the service reported one on the last page.
    pub next_token: Option<String>,
    /// Iteration ended early because a page failed under a cap.
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    start_token: Option<String>,
    max_items: Option<u64>,
    max_page_size: u32,
}

impl Paginator {
    pub fn new(start_token: Option<String>, max_items: Option<u64>, max_page_size: u32) -> Self {
        Paginator {
            start_token: start_token.filter(|t| !t.is_empty()),
            max_items,
            max_page_size: max_page_size.max(1),
        }
    }

    pub fn mode(&self) -> PagingMode {
        match (&self.start_token, self.max_items) {
            (Some(_), _) => PagingMode::Manual,
            (None, Some(_)) => PagingMode::Capped,
            (None, None) => PagingMode::Automatic,
        }
    }

    fn page_size(&self, remaining: Option<u64>) -> Option<u32> {
        remaining.map(|r| r.min(u64::from(self.max_page_size)) as u32)
    }

    pub async fn run<T, F, Fut, S>(&self, mut fetch: F, sink: &mut S) -> Result<PaginationSummary>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
        S: PageSink<T> + ?Sized,
    {
        let mode = self.mode();
        let report = mode != PagingMode::Automatic;
        let mut token = self.start_token.clone();
        let mut remaining = self.max_items;
        let mut summary = PaginationSummary {
            mode,
            pages: 0,
            items: 0,
            next_token: None,
            truncated: false,
        };

        while remaining != Some(0) {
            let request = PageRequest {
                token: token.take(),
                page_size: self.page_size(remaining),
            };
            debug!(?request, page = summary.pages + 1, "Fetching page");

            let page = match fetch(request).await {
                Ok(page) => page,
                Err(e) if remaining.is_some() && summary.pages > 0 => {
                    warn!(
                        "Stopping after {} page(s) ({} item(s)): {:#}",
                        summary.pages, summary.items, e
                    );
                    summary.truncated = true;
                    break;
                }
                Err(e) => return Err(e),
            };

            let received = page.received;
            let next = page.next_token.filter(|t| !t.is_empty());
            summary.pages += 1;
            summary.items += received;
            summary.next_token = next.clone();
            remaining = remaining.map(|r| r.saturating_sub(received as u64));

            sink.emit(page.items)?;
            if report {
                sink.progress(&Progress::Page {
                    number: summary.pages,
                    received,
                    next_token: next.clone(),
                });
            }

            if mode == PagingMode::Manual {
                break;
            }
            match next {
                Some(t) => token = Some(t),
                None => break,
            }
        }

        if report {
            sink.progress(&Progress::Finished {
                pages: summary.pages,
                items: summary.items,
                next_token: summary.next_token.clone(),
                truncated: summary.truncated,
            });
        }
        Ok(summary)
    }
}
