use std::io;
use std::path::Path;

use ramhorns::Template;

use crate::composer::{Composer, ComposerPhase, StatusMessage};
use crate::view::load_template;

const COMPOSER_TPL: &str = "New post
Title:   {{{title}}}
Author:  {{{author}}}
Image:   {{{image}}}
Content:
{{{content}}}
{{#submitting}}Publishing...
{{/submitting}}{{#has_status}}[{{{status_kind}}}] {{{status}}}
{{/has_status}}";

#[derive(ramhorns::Content)]
struct ComposerPage<'a> {
    title: &'a str,
    author: &'a str,
    image: &'a str,
    content: &'a str,
    submitting: bool,
    has_status: bool,
    status_kind: &'a str,
    status: &'a str,
}

pub struct ComposerRenderer {
    template: Template<'static>,
}

impl ComposerRenderer {
    pub fn new(template_dir: Option<&Path>) -> io::Result<ComposerRenderer> {
        let template = load_template(template_dir, "composer.tpl", COMPOSER_TPL)?;
        Ok(ComposerRenderer { template })
    }

    pub fn render(&self, composer: &Composer) -> String {
        let draft = composer.draft();
        let (status_kind, status) = match composer.status() {
            Some(StatusMessage::Success(msg)) => ("ok", msg.as_str()),
            Some(StatusMessage::Error(msg)) => ("error", msg.as_str()),
            None => ("", ""),
        };

        self.template.render(&ComposerPage {
            title: &draft.title,
            author: &draft.author,
            image: &draft.image,
            content: &draft.content,
            submitting: composer.is_submitting() || composer.phase() == ComposerPhase::Submitting,
            has_status: !status.is_empty(),
            status_kind,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::BlogApi;
    use crate::composer::{Field, MISSING_FIELDS_MESSAGE};
    use crate::post::DEFAULT_IMAGE;

    use super::*;

    #[test]
    fn test_render_draft() {
        let renderer = ComposerRenderer::new(None).unwrap();
        let mut composer = Composer::new(DEFAULT_IMAGE);
        composer.set(Field::Title, "Hello");
        composer.set(Field::Author, "Thiago");
        composer.set(Field::Content, "First post");

        let res = renderer.render(&composer);
        assert_eq!(res, "New post
Title:   Hello
Author:  Thiago
Image:   
Content:
First post
");
    }

    #[tokio::test]
    async fn test_render_after_dropped_submit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;
        let api = BlogApi::new(&server.uri()).unwrap();

        let renderer = ComposerRenderer::new(None).unwrap();
        let mut composer = Composer::new(DEFAULT_IMAGE);
        composer.set(Field::Title, "Hello");
        composer.set(Field::Author, "Thiago");
        composer.set(Field::Content, "First post");
        let res = tokio::time::timeout(Duration::from_millis(50), composer.submit(&api)).await;
        assert!(res.is_err());

        let res = renderer.render(&composer);
        assert!(!res.contains("Publishing..."));
        assert!(res.ends_with("First post\n"));
    }

    #[tokio::test]
    async fn test_render_validation_error() {
        let renderer = ComposerRenderer::new(None).unwrap();
        let api = BlogApi::new("http://127.0.0.1:1").unwrap();
        let mut composer = Composer::new(DEFAULT_IMAGE);
        composer.set(Field::Title, "Only a title");
        composer.submit(&api).await;

        let res = renderer.render(&composer);
        assert!(res.contains("Title:   Only a title"));
        assert!(res.ends_with(&format!("[error] {}\n", MISSING_FIELDS_MESSAGE)));
    }
}
