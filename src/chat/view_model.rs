//! Chat screen state: the message sequence, its persistence and the
//! send/receive cycle.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::busy::BusyFlag;
use super::ids::IdGenerator;
use crate::api::{ApiClient, ChatReply};
use crate::error::MindnestError;
use crate::models::{project_display_items, ChatMessage, DisplayItem, Language};
use crate::storage;
use crate::traits::{KeyValueStore, StorageError};

/// Seed message shown when there is no history at all.
pub fn greeting_text(language: Language) -> &'static str {
    match language {
        Language::En => "Hello! I'm here to provide support. How are you feeling today?",
        Language::Th => "สวัสดี! ฉันอยู่ตรงนี้เพื่อรับฟังและสนับสนุนคุณ วันนี้คุณรู้สึกอย่างไรบ้าง?",
    }
}

/// Assistant message appended when the chat request fails.
pub fn fallback_text(language: Language) -> &'static str {
    match language {
        Language::En => "I'm having trouble connecting right now. Please try again.",
        Language::Th => "ขณะนี้ไม่สามารถเชื่อมต่อได้ กรุณาลองใหม่อีกครั้ง",
    }
}

/// Where the loaded history came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySource {
    Remote,
    Cache,
    Greeting,
}

/// Result of [`ChatViewModel::load_history`].
///
/// Loading never fails; the errors that were swallowed on the way are
/// carried here for diagnostics.
#[derive(Debug)]
pub struct HistoryLoad {
    pub source: HistorySource,
    pub errors: Vec<MindnestError>,
}

/// Result of [`ChatViewModel::send_message`].
#[derive(Debug)]
pub enum SendOutcome {
    /// Blank input: nothing changed and nothing was sent.
    Ignored,
    /// The assistant answered; the appended reply.
    Replied(ChatMessage),
    /// The request failed and the fallback message was appended.
    Fallback { error: MindnestError },
}

#[derive(Debug)]
struct DisplayCache {
    revision: u64,
    language: Language,
    today: NaiveDate,
    items: Vec<DisplayItem>,
}

/// View-model behind the chat screen.
///
/// The message sequence is append-only during a session and replaced
/// wholesale only by [`load_history`](Self::load_history).
pub struct ChatViewModel {
    api: ApiClient,
    store: Arc<dyn KeyValueStore>,
    messages: Vec<ChatMessage>,
    language: Language,
    revision: u64,
    busy: BusyFlag,
    ids: IdGenerator,
    display: Option<DisplayCache>,
}

impl ChatViewModel {
    /// Create a view-model persisting to the same storage the client reads
    /// its credential from.
    pub fn new(api: ApiClient) -> Self {
        let store = api.store().clone();
        Self {
            api,
            store,
            messages: Vec::new(),
            language: Language::default(),
            revision: 0,
            busy: BusyFlag::new(),
            ids: IdGenerator::new(),
            display: None,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Handle on the busy flag, observable from other tasks.
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    fn replace(&mut self, messages: Vec<ChatMessage>) {
        for message in &messages {
            self.ids.observe(&message.id);
        }
        self.messages = messages;
        self.revision += 1;
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.revision += 1;
    }

    /// Write the sequence to the `chat_history` cache.
    ///
    /// An empty sequence is never written.
    pub async fn persist(&self) -> Result<(), StorageError> {
        if self.messages.is_empty() {
            return Ok(());
        }
        storage::save_json(self.store.as_ref(), storage::CHAT_HISTORY, &self.messages).await
    }

    async fn persist_logged(&self) -> Option<StorageError> {
        match self.persist().await {
            Ok(()) => None,
            Err(e) => {
                warn!("Error saving chat history: {}", e);
                Some(e)
            }
        }
    }

    async fn read_cache(&self) -> Result<Vec<ChatMessage>, StorageError> {
        let cached: Option<Vec<ChatMessage>> =
            storage::load_json(self.store.as_ref(), storage::CHAT_HISTORY).await?;
        Ok(cached.unwrap_or_default())
    }

    /// Load the conversation: remote history, else the local cache, else a
    /// single greeting.
    pub async fn load_history(&mut self) -> HistoryLoad {
        let mut errors: Vec<MindnestError> = Vec::new();

        let source = 'load: {
            match self.api.fetch_history().await {
                Ok(remote) if !remote.is_empty() => {
                    info!(count = remote.len(), "Loaded chat history from server");
                    self.replace(remote);
                    break 'load HistorySource::Remote;
                }
                Ok(_) => debug!("Server chat history is empty"),
                Err(e) => {
                    warn!("Error fetching history: {}", e);
                    errors.push(e);
                }
            }

            match self.read_cache().await {
                Ok(cached) if !cached.is_empty() => {
                    info!(count = cached.len(), "Loaded chat history from cache");
                    self.replace(cached);
                    break 'load HistorySource::Cache;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Error reading cached history: {}", e);
                    errors.push(e.into());
                }
            }

            let now = Utc::now();
            let greeting = ChatMessage::assistant(
                self.ids.next(now),
                greeting_text(self.language),
                now,
            );
            self.replace(vec![greeting]);
            HistorySource::Greeting
        };

        if let Some(e) = self.persist_logged().await {
            errors.push(e.into());
        }

        HistoryLoad { source, errors }
    }

    fn reply_message(&mut self, reply: ChatReply) -> ChatMessage {
        let now = Utc::now();
        let mut message = ChatMessage::assistant(self.ids.next(now), reply.response, now);
        message.severity = reply.severity;
        message.techniques = reply.techniques;
        message.crisis_resources = reply.crisis_resources;
        message.quotes = reply.quotes;
        message
    }

    /// Send user text and append the assistant's answer.
    ///
    /// Blank text is ignored. The user message is appended before the
    /// request goes out; a failed request appends one fallback message.
    pub async fn send_message(&mut self, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        let now = Utc::now();
        let user_message = ChatMessage::user(self.ids.next(now), text, now);
        self.push(user_message);
        self.persist_logged().await;

        let outcome = {
            let _busy = self.busy.begin();
            match self.api.send_chat(text).await {
                Ok(reply) => {
                    let message = self.reply_message(reply);
                    self.push(message.clone());
                    SendOutcome::Replied(message)
                }
                Err(error) => {
                    warn!("Error sending message: {}", error);
                    let now = Utc::now();
                    let fallback = ChatMessage::assistant(
                        self.ids.next(now),
                        fallback_text(self.language),
                        now,
                    );
                    self.push(fallback);
                    SendOutcome::Fallback { error }
                }
            }
        };

        self.persist_logged().await;
        outcome
    }

    /// Display rows with date separators, recomputed only when the
    /// sequence, the language or the day changes.
    pub fn display_items(&mut self, today: NaiveDate) -> &[DisplayItem] {
        let fresh = matches!(
            &self.display,
            Some(cache) if cache.revision == self.revision
                && cache.language == self.language
                && cache.today == today
        );
        if !fresh {
            self.display = Some(DisplayCache {
                revision: self.revision,
                language: self.language,
                today,
                items: project_display_items(&self.messages, self.language, today),
            });
        }
        match &self.display {
            Some(cache) => &cache.items,
            None => &[],
        }
    }

    /// Drop the local conversation and its cache.
    pub async fn clear_local(&mut self) -> Result<(), StorageError> {
        self.replace(Vec::new());
        self.store.remove_item(storage::CHAT_HISTORY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStorage, MockHttpClient, MockResponse};
    use crate::traits::HttpError;
    use serde_json::json;

    const BASE: &str = "http://api.test";

    fn setup() -> (ChatViewModel, Arc<MockHttpClient>, InMemoryStorage) {
        let http = Arc::new(MockHttpClient::new());
        let store = InMemoryStorage::new();
        let api = ApiClient::new(http.clone(), Arc::new(store.clone()), BASE);
        (ChatViewModel::new(api), http, store)
    }

    fn history_json() -> serde_json::Value {
        json!([
            {"id": "a", "text": "hi", "isUser": true, "timestamp": "09:00 AM",
             "techniques": [], "crisis_resources": [], "severity": "", "quotes": []},
            {"id": "b", "text": "hello", "isUser": false, "timestamp": "09:00 AM",
             "techniques": [], "crisis_resources": [], "severity": "", "quotes": []}
        ])
    }

    #[tokio::test]
    async fn test_load_history_remote() {
        let (mut vm, http, store) = setup();
        http.set_default_response(MockResponse::json(200, history_json()));

        let load = vm.load_history().await;
        assert_eq!(load.source, HistorySource::Remote);
        assert!(load.errors.is_empty());
        assert_eq!(vm.messages().len(), 2);
        assert!(store.contains(storage::CHAT_HISTORY));
    }

    #[tokio::test]
    async fn test_load_history_greeting_when_everything_empty() {
        let (mut vm, http, _store) = setup();
        http.set_default_response(MockResponse::json(200, json!([])));

        let load = vm.load_history().await;
        assert_eq!(load.source, HistorySource::Greeting);
        assert_eq!(vm.messages().len(), 1);
        assert!(!vm.messages()[0].is_user);
        assert_eq!(vm.messages()[0].text, greeting_text(Language::En));
    }

    #[tokio::test]
    async fn test_load_history_thai_greeting() {
        let (vm, http, _store) = setup();
        let mut vm = vm.with_language(Language::Th);
        http.set_default_response(MockResponse::Error(HttpError::Connect(
            "refused".to_string(),
        )));

        let load = vm.load_history().await;
        assert_eq!(load.source, HistorySource::Greeting);
        assert_eq!(load.errors.len(), 1);
        assert_eq!(vm.messages()[0].text, greeting_text(Language::Th));
    }

    #[tokio::test]
    async fn test_corrupt_cache_is_reported_not_fatal() {
        let (mut vm, http, store) = setup();
        store.set_item(storage::CHAT_HISTORY, "{oops").await.unwrap();
        http.set_default_response(MockResponse::json(500, json!({"detail": "down"})));

        let load = vm.load_history().await;
        assert_eq!(load.source, HistorySource::Greeting);
        assert_eq!(load.errors.len(), 2);
    }

    #[tokio::test]
    async fn test_send_blank_is_ignored() {
        let (mut vm, http, _store) = setup();
        assert!(matches!(vm.send_message("   ").await, SendOutcome::Ignored));
        assert!(vm.messages().is_empty());
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_send_success_appends_reply_with_annotations() {
        let (mut vm, http, _store) = setup();
        http.set_method_response(
            "POST",
            "http://api.test/chat",
            MockResponse::json(
                200,
                json!({"response": "Let's breathe together.", "severity": "HIGH",
                       "techniques": [{"title": "Box breathing"}],
                       "crisis_resources": [{"name": "1323"}], "quotes": ["q"]}),
            ),
        );

        let outcome = vm.send_message("  I can't sleep ").await;
        match outcome {
            SendOutcome::Replied(reply) => {
                assert_eq!(reply.text, "Let's breathe together.");
                assert!(reply.shows_crisis_resources());
            }
            other => panic!("Expected reply, got {:?}", other),
        }
        assert_eq!(vm.messages().len(), 2);
        assert!(vm.messages()[0].is_user);
        assert_eq!(vm.messages()[0].text, "I can't sleep");
        assert!(!vm.is_busy());

        let body = http.get_requests()[0].json_body().unwrap();
        assert_eq!(body["message"], "I can't sleep");
    }

    #[tokio::test]
    async fn test_send_failure_appends_single_fallback() {
        let (mut vm, http, _store) = setup();
        http.set_default_response(MockResponse::json(500, json!({"detail": "boom"})));

        let outcome = vm.send_message("hello").await;
        assert!(matches!(outcome, SendOutcome::Fallback { .. }));
        assert_eq!(vm.messages().len(), 2);
        assert!(vm.messages()[0].is_user);
        assert_eq!(vm.messages()[1].text, fallback_text(Language::En));
        assert!(!vm.is_busy());
    }

    #[tokio::test]
    async fn test_ids_strictly_increase() {
        let (mut vm, http, _store) = setup();
        http.set_default_response(MockResponse::json(200, json!({"response": "ok"})));
        vm.send_message("one").await;
        vm.send_message("two").await;

        let ids: Vec<i64> = vm
            .messages()
            .iter()
            .map(|m| m.id.parse().unwrap())
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_new_ids_follow_loaded_history() {
        let (mut vm, http, _store) = setup();
        let future_id = "99999999999999";
        http.set_method_response(
            "GET",
            "http://api.test/chat/history",
            MockResponse::json(
                200,
                json!([{"id": future_id, "text": "hi", "isUser": true, "timestamp": "09:00 AM",
                        "techniques": [], "crisis_resources": [], "severity": "", "quotes": []}]),
            ),
        );
        http.set_method_response(
            "POST",
            "http://api.test/chat",
            MockResponse::json(200, json!({"response": "ok"})),
        );

        vm.load_history().await;
        vm.send_message("again").await;

        let ids: Vec<i64> = vm
            .messages()
            .iter()
            .map(|m| m.id.parse().unwrap())
            .collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_display_items_memoized_and_invalidated() {
        let (mut vm, http, _store) = setup();
        http.set_default_response(MockResponse::json(200, json!({"response": "ok"})));
        let today = Utc::now().with_timezone(&chrono::Local).date_naive();

        assert!(vm.display_items(today).is_empty());
        vm.send_message("hi").await;
        let items = vm.display_items(today).to_vec();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_separator());
        assert_eq!(vm.display_items(today), items.as_slice());

        vm.set_language(Language::Th);
        match &vm.display_items(today)[0] {
            DisplayItem::DateSeparator { label, .. } => assert_eq!(label, "วันนี้"),
            other => panic!("Expected separator, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_clear_local() {
        let (mut vm, http, store) = setup();
        http.set_default_response(MockResponse::json(200, json!({"response": "ok"})));
        vm.send_message("hi").await;
        assert!(store.contains(storage::CHAT_HISTORY));

        vm.clear_local().await.unwrap();
        assert!(vm.messages().is_empty());
        assert!(!store.contains(storage::CHAT_HISTORY));
    }

    #[tokio::test]
    async fn test_persist_failure_does_not_block_send() {
        let (mut vm, http, store) = setup();
        http.set_default_response(MockResponse::json(200, json!({"response": "ok"})));
        store.set_write_should_fail(true);

        let outcome = vm.send_message("hi").await;
        assert!(matches!(outcome, SendOutcome::Replied(_)));
        assert!(vm.persist().await.is_err());
    }
}
