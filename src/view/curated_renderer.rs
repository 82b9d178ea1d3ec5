use std::io;
use std::path::Path;

use ramhorns::Template;

use crate::config::CuratedEntry;
use crate::view::load_template;

pub const NOTHING_CURATED_MESSAGE: &str = "Nothing curated yet.";

const CURATED_TPL: &str = "Curated reading
{{#empty}}{{{empty_message}}}
{{/empty}}{{#entries}}
* {{{title}}}{{#has_url}} <{{{url}}}>{{/has_url}}
  {{{summary}}}
{{/entries}}";

#[derive(ramhorns::Content)]
struct CuratedPage<'a> {
    empty: bool,
    empty_message: &'a str,
    entries: Vec<CuratedItem<'a>>,
}

#[derive(ramhorns::Content)]
struct CuratedItem<'a> {
    title: &'a str,
    summary: &'a str,
    has_url: bool,
    url: &'a str,
}

pub struct CuratedRenderer {
    template: Template<'static>,
}

impl CuratedRenderer {
    pub fn new(template_dir: Option<&Path>) -> io::Result<CuratedRenderer> {
        let template = load_template(template_dir, "curated.tpl", CURATED_TPL)?;
        Ok(CuratedRenderer { template })
    }

    pub fn render(&self, entries: &[CuratedEntry]) -> String {
        let entries: Vec<CuratedItem> = entries.iter()
            .map(|e| CuratedItem {
                title: &e.title,
                summary: &e.summary,
                has_url: e.url.is_some(),
                url: e.url.as_deref().unwrap_or(""),
            })
            .collect();

        self.template.render(&CuratedPage {
            empty: entries.is_empty(),
            empty_message: NOTHING_CURATED_MESSAGE,
            entries,
        })
    }
}
