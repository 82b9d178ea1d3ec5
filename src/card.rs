use crate::post::{resolve_image, PostId, PostRecord};
use crate::text_utils::{format_date_label, truncate_chars};

pub const DEFAULT_EXCERPT_CHARS: usize = 150;

#[derive(Clone)]
pub struct CardOptions {
    pub fallback_image: String,
    pub excerpt_chars: usize,
}

/// A post ready to be shown in the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: PostId,
    pub image: String,
    pub date_label: String,
    pub title: String,
    pub author_label: String,
    pub comment_badge: Option<String>,
    excerpt: Option<String>,
    content: String,
    expanded: bool,
}

impl Card {
    pub fn from_post(post: &PostRecord, options: &CardOptions) -> Card {
        Card {
            id: post.id,
            image: resolve_image(post.image.as_deref(), &options.fallback_image).to_string(),
            date_label: format_date_label(&post.timestamp),
            title: post.title.clone(),
            author_label: format!("By {}", post.author_name),
            comment_badge: post.comment_count().map(comment_badge),
            excerpt: truncate_chars(&post.content, options.excerpt_chars),
            content: post.content.clone(),
            expanded: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether there is more to show than the excerpt.
    pub fn is_truncated(&self) -> bool {
        self.excerpt.is_some()
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn body(&self) -> &str {
        match self.excerpt {
            Some(ref excerpt) if !self.expanded => excerpt,
            _ => &self.content,
        }
    }
}

fn comment_badge(count: usize) -> String {
    match count {
        1 => "1 comment".to_string(),
        n => format!("{} comments", n),
    }
}
