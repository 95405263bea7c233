//! Final answer text for the retrieval path.

use threadbot_core::constants::{TAG_PLACEHOLDER, THREAD_ID_PLACEHOLDER};
use threadbot_core::errors::{ThreadbotError, ThreadbotResult};
use threadbot_core::models::ThreadId;

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Tag,
    ThreadId,
}

/// Template with `{tag}` and `{thread_id}` insertion points, parsed once.
///
/// Substituted values are never re-scanned, so a tag that happens to contain
/// `{thread_id}` is inserted literally.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl AnswerTemplate {
    /// Parse `template`.
    ///
    /// # Errors
    /// `ConfigError` unless both placeholders occur at least once.
    pub fn new(template: &str) -> ThreadbotResult<Self> {
        let mut segments = Vec::new();
        let mut rest = template;
        loop {
            let next = [
                (TAG_PLACEHOLDER, Segment::Tag),
                (THREAD_ID_PLACEHOLDER, Segment::ThreadId),
            ]
            .into_iter()
            .filter_map(|(marker, segment)| rest.find(marker).map(|at| (at, marker, segment)))
            .min_by_key(|(at, _, _)| *at);

            let Some((at, marker, segment)) = next else {
                if !rest.is_empty() {
                    segments.push(Segment::Text(rest.to_string()));
                }
                break;
            };
            if at > 0 {
                segments.push(Segment::Text(rest[..at].to_string()));
            }
            segments.push(segment);
            rest = &rest[at + marker.len()..];
        }

        for (marker, segment) in [
            (TAG_PLACEHOLDER, Segment::Tag),
            (THREAD_ID_PLACEHOLDER, Segment::ThreadId),
        ] {
            if !segments.contains(&segment) {
                return Err(ThreadbotError::ConfigError(format!(
                    "answer template must contain {marker}"
                )));
            }
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// Insert `tag` and `thread_id`.
    pub fn render(&self, tag: &str, thread_id: &ThreadId) -> String {
        let thread_id = thread_id.to_string();
        let mut out = String::with_capacity(self.source.len() + tag.len() + thread_id.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Tag => out.push_str(tag),
                Segment::ThreadId => out.push_str(&thread_id),
            }
        }
        out
    }
}
