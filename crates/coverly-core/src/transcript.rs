//! Append-only session transcript.

use coverly_types::message::TranscriptMessage;

/// Greeting the advisor opens every session with.
pub const GREETING_TEXT: &str = "您好👋，我是您的 AI 保費預估與產品推薦小幫手！\n\n\
    為了給您最精準的建議，請告訴我您的年齡、性別、居住地和預計投保的險種等等(如：壽險、意外險等)。\n\n\
    ❗️注意：這些資料並不會被我們儲存利用，只會用來預估保費，所以不用擔心，謝謝";

/// Ordered message log for one consultation session.
///
/// Whole-message appends are the only mutation; nothing is ever edited
/// or removed, so a rendered prefix of the transcript stays valid as it
/// grows. Held in memory only and dropped with the session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<TranscriptMessage>,
}

impl Transcript {
    /// Empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript opened with the fixed advisor greeting.
    pub fn with_greeting() -> Self {
        let mut transcript = Self::new();
        transcript.push(TranscriptMessage::assistant_text(GREETING_TEXT));
        transcript
    }

    pub fn push(&mut self, message: TranscriptMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[TranscriptMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&TranscriptMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use coverly_types::message::{MessageKind, Role};

    use super::*;

    #[test]
    fn test_greeting_seeds_one_assistant_chat_message() {
        let transcript = Transcript::with_greeting();
        assert_eq!(transcript.len(), 1);

        let first = &transcript.messages()[0];
        assert_eq!(first.role, Role::Assistant);
        assert_eq!(first.kind(), MessageKind::Chat);
        assert_eq!(first.text(), Some(GREETING_TEXT));
    }

    #[test]
    fn test_pushes_keep_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push(TranscriptMessage::user_text("第一"));
        transcript.push(TranscriptMessage::assistant_text("第二"));
        transcript.push(TranscriptMessage::user_text("第三"));

        let texts: Vec<&str> = transcript
            .messages()
            .iter()
            .filter_map(|m| m.text())
            .collect();
        assert_eq!(texts, vec!["第一", "第二", "第三"]);
        assert_eq!(transcript.last().and_then(|m| m.text()), Some("第三"));
    }

    #[test]
    fn test_new_transcript_is_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert!(transcript.last().is_none());
    }
}
