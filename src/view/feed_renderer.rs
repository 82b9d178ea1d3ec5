use std::io;
use std::path::Path;

use ramhorns::Template;

use crate::card::Card;
use crate::feed::FeedState;
use crate::view::load_template;

pub const EMPTY_FEED_MESSAGE: &str = "No posts yet. Be the first to write one!";

const FEED_TPL: &str = "{{#loading}}Loading posts...
{{/loading}}{{#has_error}}{{{error}}} Run `blog-client feed` to try again.
{{/has_error}}{{#empty}}{{{empty_message}}}
{{/empty}}{{#cards}}
#{{id}} {{{title}}}
{{{date}}} | {{{author}}}{{#has_badge}} | {{{badge}}}{{/has_badge}}
Cover: {{{image}}}
{{{body}}}{{{toggle_hint}}}
{{/cards}}";

#[derive(ramhorns::Content)]
struct FeedPage<'a> {
    loading: bool,
    has_error: bool,
    error: &'a str,
    empty: bool,
    empty_message: &'a str,
    cards: Vec<CardItem<'a>>,
}

#[derive(ramhorns::Content)]
struct CardItem<'a> {
    id: i64,
    title: &'a str,
    date: &'a str,
    author: &'a str,
    image: &'a str,
    has_badge: bool,
    badge: &'a str,
    body: &'a str,
    toggle_hint: &'a str,
}

impl<'a> CardItem<'a> {
    fn from(card: &'a Card) -> Self {
        let toggle_hint = match (card.is_truncated(), card.is_expanded()) {
            (false, _) => "",
            (true, false) => " [more]",
            (true, true) => " [less]",
        };

        CardItem {
            id: card.id.0,
            title: card.title.as_str(),
            date: card.date_label.as_str(),
            author: card.author_label.as_str(),
            image: card.image.as_str(),
            has_badge: card.comment_badge.is_some(),
            badge: card.comment_badge.as_deref().unwrap_or(""),
            body: card.body(),
            toggle_hint,
        }
    }
}

pub struct FeedRenderer {
    template: Template<'static>,
}

impl FeedRenderer {
    pub fn new(template_dir: Option<&Path>) -> io::Result<FeedRenderer> {
        let template = load_template(template_dir, "feed.tpl", FEED_TPL)?;
        Ok(FeedRenderer { template })
    }

    /// Cards are expected in display order, already built from the sorted feed.
    pub fn render(&self, state: &FeedState, cards: &[Card]) -> String {
        let error = state.error.as_deref().unwrap_or("");
        let cards: Vec<CardItem> = cards.iter().map(CardItem::from).collect();

        self.template.render(&FeedPage {
            loading: state.loading,
            has_error: !error.is_empty(),
            error,
            empty: !state.loading && error.is_empty() && cards.is_empty(),
            empty_message: EMPTY_FEED_MESSAGE,
            cards,
        })
    }
}
