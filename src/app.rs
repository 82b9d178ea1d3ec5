use std::io;
use std::time::Duration;

use spdlog::{debug, info};

use crate::api::BlogApi;
use crate::card::{Card, CardOptions};
use crate::composer::{Composer, Field, SubmitOutcome};
use crate::config::{Config, CuratedEntry};
use crate::errors::ApiError;
use crate::feed::{sort_newest_first, FeedLoader};
use crate::post::PostId;
use crate::route::Route;
use crate::view::composer_renderer::ComposerRenderer;
use crate::view::curated_renderer::CuratedRenderer;
use crate::view::feed_renderer::FeedRenderer;

struct Views {
    feed: FeedRenderer,
    composer: ComposerRenderer,
    curated: CuratedRenderer,
}

/// Everything the client shows: the current route plus the state behind each view.
pub struct App {
    api: BlogApi,
    route: Route,
    feed: FeedLoader,
    cards: Vec<Card>,
    composer: Composer,
    card_options: CardOptions,
    grace_delay: Duration,
    curated: Vec<CuratedEntry>,
    views: Views,
}

impl App {
    pub fn new(config: &Config) -> io::Result<App> {
        let api = BlogApi::new(&config.api.base_url)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("Invalid api.base_url {}: {}", config.api.base_url, e)))?;

        let template_dir = config.paths.template_dir.as_deref();
        let views = Views {
            feed: FeedRenderer::new(template_dir)?,
            composer: ComposerRenderer::new(template_dir)?,
            curated: CuratedRenderer::new(template_dir)?,
        };

        Ok(App {
            feed: FeedLoader::new(api.clone()),
            api,
            route: Route::Feed,
            cards: vec![],
            composer: Composer::new(&config.composer.default_image),
            card_options: config.card_options(),
            grace_delay: config.grace_delay(),
            curated: config.curated.clone(),
            views,
        })
    }

    pub fn api(&self) -> &BlogApi {
        &self.api
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn feed(&self) -> &FeedLoader {
        &self.feed
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        self.composer.set(field, value);
    }

    /// Goes to `path`. Entering the feed loads it, a failed load is already in the feed state.
    pub async fn navigate(&mut self, path: &str) -> Route {
        self.route = Route::from_path(path);
        debug!("Navigating to {} ({})", self.route.path(), path);

        if self.route == Route::Feed {
            let _ = self.refresh().await;
        }

        self.route
    }

    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let res = self.feed.refresh().await;
        self.rebuild_cards();
        res.map(|_| ())
    }

    /// Returns false when no card has that id.
    pub fn toggle_card(&mut self, id: PostId) -> bool {
        match self.cards.iter_mut().find(|card| card.id == id) {
            Some(card) => {
                card.toggle();
                true
            }
            None => false,
        }
    }

    pub fn expand_all(&mut self) {
        for card in self.cards.iter_mut().filter(|card| !card.is_expanded()) {
            card.toggle();
        }
    }

    /// Submits the composer. After a successful post the success message stays up for the
    /// grace delay, then the feed is shown.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.composer.submit(&self.api).await;

        if let SubmitOutcome::Published(_) = outcome {
            info!("Showing feed in {} ms", self.grace_delay.as_millis());
            tokio::time::sleep(self.grace_delay).await;
            self.composer.acknowledge();
            self.navigate(Route::Feed.path()).await;
        }

        outcome
    }

    pub fn render(&self) -> String {
        match self.route {
            Route::Feed => self.views.feed.render(&self.feed.snapshot(), &self.cards),
            Route::Create => self.views.composer.render(&self.composer),
            Route::Curated => self.views.curated.render(&self.curated),
        }
    }

    fn rebuild_cards(&mut self) {
        let state = self.feed.snapshot();
        self.cards = sort_newest_first(&state.posts).iter()
            .map(|post| Card::from_post(post, &self.card_options))
            .collect();
    }
}
