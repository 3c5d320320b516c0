//! Page dispatch.
//!
//! Decides which renderer a template needs by looking at its anchors and
//! runs exactly one of them.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::data::{DataSource, load_posts};
use crate::log;
use crate::page::{Anchors, IndexPage, render_post_page};
use crate::utils::url::{SLUG_PARAM, query_param};
use crate::view::{Formatter, IndexView, PostOutcome, ViewState};

/// Everything a render needs besides the template itself.
#[derive(Debug, Clone)]
pub struct BootContext<'a> {
    pub source: DataSource,
    pub fmt: Formatter<'a>,
    /// Initial index page controls
    pub state: ViewState,
    /// Explicit post slug
    pub slug: Option<String>,
    /// Browser-style location the slug is read from as a fallback
    pub location: Option<String>,
}

impl<'a> BootContext<'a> {
    /// Context for a page at `page_path`, resolving relative data sources
    /// against the page's directory.
    pub fn for_page(page_path: &Path, source: &str, fmt: Formatter<'a>) -> Self {
        let base_dir = page_path.parent().unwrap_or(Path::new(""));
        Self {
            source: DataSource::resolve(source, base_dir),
            fmt,
            state: ViewState::default(),
            slug: None,
            location: None,
        }
    }

    /// Slug of the post to show. A slug embedded in the page wins over the
    /// explicit one, which wins over the location's query string. Empty
    /// slugs count as absent at every level.
    fn post_slug(&self, embedded: Option<String>) -> Option<String> {
        let present = |slug: &String| !slug.is_empty();
        embedded
            .filter(present)
            .or_else(|| self.slug.clone().filter(present))
            .or_else(|| {
                self.location
                    .as_deref()
                    .and_then(|location| query_param(location, SLUG_PARAM))
                    .filter(present)
            })
    }
}

/// A rendered page together with the view-model behind it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Rendered {
    Index {
        state: ViewState,
        view: IndexView,
        #[serde(skip)]
        html: Vec<u8>,
    },
    Post {
        slug: Option<String>,
        outcome: PostOutcome,
        #[serde(skip)]
        html: Vec<u8>,
    },
}

impl Rendered {
    pub fn html(&self) -> &[u8] {
        match self {
            Self::Index { html, .. } | Self::Post { html, .. } => html,
        }
    }

    /// The view-model as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize view-model")
    }
}

/// Render `page` with whichever renderer its anchors call for.
///
/// Returns `Ok(None)` when the page has neither `#posts` nor
/// `#post-article`.
pub fn boot(page: &[u8], ctx: &BootContext<'_>) -> Result<Option<Rendered>> {
    let anchors = Anchors::scan(page).context("Failed to scan page template")?;

    if anchors.index {
        let posts = load_posts(&ctx.source);
        let mut page = IndexPage::setup(page.to_vec(), posts, ctx.fmt, ViewState::default())
            .context("Failed to render index page")?;

        // replay the requested control values as user input
        if !ctx.state.query.is_empty() {
            page.on_search_input(&ctx.state.query)
                .context("Failed to apply search query")?;
        }
        if ctx.state.sort != page.state().sort {
            page.on_sort_change(ctx.state.sort)
                .context("Failed to apply sort order")?;
        }

        log!("render"; "index page, {}, {} cards", describe(page.state()), page.view().len());
        return Ok(Some(Rendered::Index {
            state: page.state().clone(),
            view: page.view().clone(),
            html: page.html().to_vec(),
        }));
    }

    if anchors.post {
        let slug = ctx.post_slug(anchors.embedded_slug);
        log!("render"; "post page, slug: {}", slug.as_deref().unwrap_or("<none>"));
        let outcome = PostOutcome::resolve(slug.as_deref(), || load_posts(&ctx.source), &ctx.fmt);
        let html = render_post_page(page, &outcome).context("Failed to render post page")?;
        return Ok(Some(Rendered::Post { slug, outcome, html }));
    }

    Ok(None)
}

fn describe(state: &ViewState) -> String {
    if state.query.trim().is_empty() {
        format!("sort: {}", state.sort)
    } else {
        format!("query: `{}`, sort: {}", state.query, state.sort)
    }
}
