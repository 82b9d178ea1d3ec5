#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Feed,
    Create,
    Curated,
}

impl Route {
    /// Unknown paths end up in the feed.
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let path = path.trim_end_matches('/');

        match path {
            "/create" => Route::Create,
            "/curated" => Route::Curated,
            _ => Route::Feed,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Feed => "/",
            Route::Create => "/create",
            Route::Curated => "/curated",
        }
    }
}
