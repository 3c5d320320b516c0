//! Index page rendering.

use super::PageError;
use super::rewrite::{Patch, inner_html, rewrite};
use crate::data::PostCollection;
use crate::view::index::NO_POSTS_HTML;
use crate::view::{Formatter, IndexView, PostCard, SortOrder, ViewState};

/// `<template>` holding the markup of one post card.
pub const CARD_TEMPLATE_ID: &str = "post-card-template";

/// A live index page.
///
/// Holds the pristine template, the loaded posts and the control values.
/// Every control change re-renders the whole page from the template, like
/// the `input` / `change` listeners of the browser version.
#[derive(Debug)]
pub struct IndexPage<'a> {
    template: Vec<u8>,
    card_template: String,
    posts: PostCollection,
    fmt: Formatter<'a>,
    state: ViewState,
    view: IndexView,
    html: Vec<u8>,
}

impl<'a> IndexPage<'a> {
    /// Set the page up and perform the initial render.
    pub fn setup(
        template: Vec<u8>,
        posts: PostCollection,
        fmt: Formatter<'a>,
        state: ViewState,
    ) -> Result<Self, PageError> {
        let card_template = inner_html(&template, CARD_TEMPLATE_ID)?
            .ok_or(PageError::MissingTemplate(CARD_TEMPLATE_ID))?;

        let mut page = Self {
            template,
            card_template,
            posts,
            fmt,
            state,
            view: IndexView::Empty,
            html: Vec::new(),
        };
        page.draw()?;
        Ok(page)
    }

    /// The `#search` input changed.
    pub fn on_search_input(&mut self, query: &str) -> Result<&[u8], PageError> {
        self.state = self.state.with_query(query);
        self.draw()?;
        Ok(&self.html)
    }

    /// The `#sort` select changed.
    pub fn on_sort_change(&mut self, sort: SortOrder) -> Result<&[u8], PageError> {
        self.state = self.state.with_sort(sort);
        self.draw()?;
        Ok(&self.html)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> &IndexView {
        &self.view
    }

    pub fn html(&self) -> &[u8] {
        &self.html
    }

    fn draw(&mut self) -> Result<(), PageError> {
        self.view = IndexView::build(self.posts.posts(), &self.state, &self.fmt);

        let listing = match &self.view {
            IndexView::Empty => NO_POSTS_HTML.to_owned(),
            IndexView::Cards(cards) => {
                let mut listing = String::new();
                for card in cards {
                    listing.push_str(&render_card(&self.card_template, card)?);
                }
                listing
            }
        };

        self.html = rewrite(
            &self.template,
            &[
                Patch::new("#posts").html(listing),
                Patch::new("#search").attr("value", self.state.query.as_str()),
                Patch::new("#sort option").selected_if(self.state.sort.as_str()),
            ],
        )?;
        Ok(())
    }
}

/// Fill one copy of the card template.
fn render_card(template: &str, card: &PostCard) -> Result<String, PageError> {
    let html = rewrite(
        template.as_bytes(),
        &[
            Patch::new(".post-title a")
                .text(card.title.as_str())
                .attr("href", card.url.as_str()),
            Patch::new(".post-date")
                .text(card.date.as_str())
                .attr("datetime", card.datetime.as_str()),
            Patch::new(".post-excerpt").text(card.excerpt.as_str()),
            Patch::new(".read-more").attr("href", card.url.as_str()),
        ],
    )?;
    Ok(String::from_utf8_lossy(&html).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::post;

    const TEMPLATE: &str = include_str!("../embed/init/index.html");

    fn posts() -> PostCollection {
        let mut react = post("react-testing", "Testing React", "2024-01-01");
        react.tags = vec!["React".into(), "testing".into()];
        let mut spaced = post("a b&c", "Spaces & Symbols", "2024-06-01");
        spaced.excerpt = "<b>not bold</b>".into();
        let old = post("old-news", "Old News", "2023-12-01");
        PostCollection::new(vec![react, spaced, old])
    }

    fn setup(posts: PostCollection, state: ViewState) -> IndexPage<'static> {
        IndexPage::setup(TEMPLATE.as_bytes().to_vec(), posts, Formatter::default(), state).unwrap()
    }

    fn text(page: &IndexPage<'_>) -> String {
        String::from_utf8(page.html().to_vec()).unwrap()
    }

    #[test]
    fn test_initial_render_newest_first() {
        let page = setup(posts(), ViewState::default());
        let html = text(&page);
        let spaced = html.find("Spaces &amp; Symbols").unwrap();
        let react = html.find("Testing React").unwrap();
        let old = html.find("Old News").unwrap();
        assert!(spaced < react && react < old);
        assert_eq!(html.matches(r#"<article class="card">"#).count(), 3 + 1); // + template
    }

    #[test]
    fn test_card_slots_filled() {
        let page = setup(posts(), ViewState::new("spaces", SortOrder::Newest));
        let html = text(&page);
        assert!(html.contains(r#"<a href="post.html?slug=a%20b%26c">Spaces &amp; Symbols</a>"#));
        assert!(html.contains(r#"datetime="2024-06-01">Jun 1, 2024</time>"#));
        assert!(html.contains("&lt;b&gt;not bold&lt;/b&gt;"));
        assert!(html.contains(r#"<a class="read-more" href="post.html?slug=a%20b%26c">"#));
    }

    #[test]
    fn test_template_left_in_place() {
        let page = setup(posts(), ViewState::default());
        let html = text(&page);
        assert!(html.contains(r#"<template id="post-card-template">"#));
        assert!(html.contains(r##"<h2 class="post-title"><a href="#"></a></h2>"##));
    }

    #[test]
    fn test_no_posts_found() {
        let page = setup(PostCollection::empty(), ViewState::default());
        assert_eq!(page.view(), &IndexView::Empty);
        assert!(text(&page).contains(r#"<section id="posts" aria-live="polite"><p>No posts found.</p></section>"#));
    }

    #[test]
    fn test_search_input_rerenders() {
        let mut page = setup(posts(), ViewState::default());
        assert_eq!(page.view().len(), 3);

        let html = String::from_utf8(page.on_search_input("REACT").unwrap().to_vec()).unwrap();
        assert_eq!(page.view().len(), 1);
        assert!(html.contains("Testing React"));
        assert!(!html.contains("Old News"));
        assert!(html.contains(r#"value="REACT""#));

        page.on_search_input("zzz").unwrap();
        assert!(text(&page).contains("No posts found."));

        page.on_search_input("").unwrap();
        assert_eq!(page.view().len(), 3);
    }

    #[test]
    fn test_sort_change_rerenders() {
        let mut page = setup(posts(), ViewState::default());
        page.on_sort_change(SortOrder::Oldest).unwrap();
        let html = text(&page);
        assert!(html.find("Old News").unwrap() < html.find("Testing React").unwrap());
        assert!(html.contains(r#"<option value="oldest" selected="selected">"#));
        assert!(html.contains(r#"<option value="newest">"#));
        assert_eq!(page.state().sort, SortOrder::Oldest);
    }

    #[test]
    fn test_missing_card_template() {
        let err = IndexPage::setup(
            br#"<section id="posts"></section>"#.to_vec(),
            posts(),
            Formatter::default(),
            ViewState::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PageError::MissingTemplate(CARD_TEMPLATE_ID)));
    }
}
