use chrono::{NaiveDate, Utc};
use spdlog::{error, info, warn};

use crate::api::BlogApi;
use crate::errors::ApiError;
use crate::post::{resolve_image, NewPost, PostRecord};
use crate::text_utils::today_iso;

pub const MISSING_FIELDS_MESSAGE: &str = "Please complete the title, author and content fields.";
pub const PUBLISHED_MESSAGE: &str = "Post published successfully!";

/// `Validating` only lasts for the synchronous field check inside a submit,
/// callers holding the composer never observe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerPhase {
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Success(msg) | StatusMessage::Error(msg) => msg,
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Post created. The backend echo is kept when it could be read.
    Published(Option<PostRecord>),
    Invalid,
    Failed(ApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Content,
    Image,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub author: String,
    pub content: String,
    pub image: String,
}

impl Draft {
    fn is_complete(&self) -> bool {
        ![&self.title, &self.author, &self.content].iter().any(|f| f.trim().is_empty())
    }

    fn to_new_post(&self, fallback_image: &str, today: NaiveDate) -> NewPost {
        NewPost {
            title: self.title.trim().to_string(),
            author_name: self.author.trim().to_string(),
            content: self.content.trim().to_string(),
            image: resolve_image(Some(&self.image), fallback_image).to_string(),
            timestamp: today_iso(today),
            has_comments: vec![],
        }
    }
}

/// Marks the composer as submitting until dropped.
///
/// The flag always comes down on drop. A request that never settled, like a submit
/// future dropped mid-flight, also puts the phase back to `Idle`.
struct SubmittingFlag<'a> {
    submitting: &'a mut bool,
    phase: &'a mut ComposerPhase,
    settled: bool,
}

impl<'a> SubmittingFlag<'a> {
    fn raise(submitting: &'a mut bool, phase: &'a mut ComposerPhase) -> Self {
        *submitting = true;
        *phase = ComposerPhase::Submitting;
        SubmittingFlag { submitting, phase, settled: false }
    }

    fn settle(mut self) {
        self.settled = true;
    }
}

impl Drop for SubmittingFlag<'_> {
    fn drop(&mut self) {
        *self.submitting = false;
        if !self.settled {
            *self.phase = ComposerPhase::Idle;
        }
    }
}

/// The new post form.
pub struct Composer {
    draft: Draft,
    phase: ComposerPhase,
    status: Option<StatusMessage>,
    submitting: bool,
    fallback_image: String,
}

impl Composer {
    pub fn new(fallback_image: &str) -> Self {
        Composer {
            draft: Draft::default(),
            phase: ComposerPhase::Idle,
            status: None,
            submitting: false,
            fallback_image: fallback_image.to_string(),
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn phase(&self) -> ComposerPhase {
        self.phase
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set(&mut self, field: Field, value: &str) {
        let target = match field {
            Field::Title => &mut self.draft.title,
            Field::Author => &mut self.draft.author,
            Field::Content => &mut self.draft.content,
            Field::Image => &mut self.draft.image,
        };
        *target = value.to_string();

        // A failed form stays editable, editing puts it back to idle
        if self.phase == ComposerPhase::Failed {
            self.phase = ComposerPhase::Idle;
        }
    }

    /// Back to idle once the success message was seen.
    pub fn acknowledge(&mut self) {
        if self.phase == ComposerPhase::Success {
            self.phase = ComposerPhase::Idle;
            self.status = None;
        }
    }

    pub async fn submit(&mut self, api: &BlogApi) -> SubmitOutcome {
        self.submit_on(api, Utc::now().date_naive()).await
    }

    pub async fn submit_on(&mut self, api: &BlogApi, today: NaiveDate) -> SubmitOutcome {
        self.phase = ComposerPhase::Validating;
        self.status = None;

        if !self.draft.is_complete() {
            warn!("Post not submitted, required fields are empty");
            self.fail(MISSING_FIELDS_MESSAGE.to_string());
            return SubmitOutcome::Invalid;
        }

        let new_post = self.draft.to_new_post(&self.fallback_image, today);

        let res = {
            let flag = SubmittingFlag::raise(&mut self.submitting, &mut self.phase);
            let res = api.create_post(&new_post).await;
            flag.settle();
            res
        };

        match res {
            Ok(created) => {
                info!("Post published: {}", new_post.title);
                self.draft = Draft::default();
                self.phase = ComposerPhase::Success;
                self.status = Some(StatusMessage::Success(PUBLISHED_MESSAGE.to_string()));
                SubmitOutcome::Published(created)
            }
            Err(e) => {
                error!("Error publishing post: {}", e);
                self.fail(e.user_message());
                SubmitOutcome::Failed(e)
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.phase = ComposerPhase::Failed;
        self.status = Some(StatusMessage::Error(message));
    }
}
