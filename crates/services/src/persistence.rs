//! Best-effort session persistence on top of a key-value repository.
//!
//! Every operation tolerates storage failures: reads fall back to the
//! caller's default, writes are dropped. Failures are logged, never returned.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use quiz_core::model::{Answers, ExamRegistry, QuizKey, SessionState, Theme};
use storage::repository::KeyValueRepository;

use crate::quiz_service::SessionChange;

/// Keys of the persisted session layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    CurrentQuiz,
    Theme,
    Answers,
    CurrentPage,
    Submitted,
}

impl StorageKey {
    /// Keys wiped by a restart or a quiz switch. Theme and quiz selection survive.
    pub const SESSION: [StorageKey; 3] = [
        StorageKey::Answers,
        StorageKey::CurrentPage,
        StorageKey::Submitted,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StorageKey::CurrentQuiz => "current_quiz",
            StorageKey::Theme => "theme",
            StorageKey::Answers => "quiz_answers",
            StorageKey::CurrentPage => "quiz_current_page",
            StorageKey::Submitted => "quiz_submitted",
        }
    }
}

pub struct SessionPersistence {
    repo: Arc<dyn KeyValueRepository>,
    // Serializes writers so spawned syncs land in dispatch order.
    write_lock: Mutex<()>,
    // Set once storage holds the key of the quiz the saved progress belongs to.
    quiz_bound: AtomicBool,
}

impl SessionPersistence {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
            quiz_bound: AtomicBool::new(false),
        }
    }

    /// Read and decode `key`, or return `default` if it is absent,
    /// unreadable or unparsable.
    pub async fn load<T: DeserializeOwned>(&self, key: StorageKey, default: T) -> T {
        let raw = match self.repo.get(key.as_str()).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(err) => {
                tracing::warn!(
                    key = key.as_str(),
                    error = %err,
                    "failed to read persisted value"
                );
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    key = key.as_str(),
                    error = %err,
                    "discarding unparsable persisted value"
                );
                default
            }
        }
    }

    /// Encode and write `value` under `key`. Failures drop the write.
    pub async fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) {
        let _guard = self.write_lock.lock().await;
        self.save_unlocked(key, value).await;
    }

    /// Remove the answers, page and submitted keys.
    pub async fn clear_session(&self) {
        let _guard = self.write_lock.lock().await;
        self.clear_session_unlocked().await;
    }

    /// Rebuild the session from storage, repairing whatever no longer fits
    /// the registry.
    ///
    /// Progress is only restored when the persisted quiz key still names an
    /// exam. Otherwise the session starts fresh on the default quiz and that
    /// binding is written back, so orphaned answers are never attributed to
    /// another exam.
    pub async fn load_session(&self, registry: &ExamRegistry) -> SessionState {
        let theme = self.load(StorageKey::Theme, Theme::default()).await;
        let persisted: Option<QuizKey> = self.load(StorageKey::CurrentQuiz, None).await;

        let quiz = match persisted {
            Some(quiz) if registry.contains(&quiz) => quiz,
            stale => {
                if let Some(quiz) = &stale {
                    tracing::warn!(
                        quiz = %quiz,
                        "persisted quiz is not available, starting fresh"
                    );
                }
                let state = SessionState::new(registry.default_key().clone(), theme);
                self.bind_fresh_session(&state).await;
                return state;
            }
        };
        self.quiz_bound.store(true, Ordering::Release);

        let answers = self.load(StorageKey::Answers, Answers::new()).await;
        let page = self.load(StorageKey::CurrentPage, 0_usize).await;
        let submitted = self.load(StorageKey::Submitted, false).await;

        let exam = registry.get_or_default(&quiz);
        SessionState::from_persisted(quiz, exam, answers, page, submitted, theme)
    }

    /// Persist one state change: clear the session keys after a reset, then
    /// write every key whose value moved. The quiz key is also written until
    /// storage holds it.
    pub async fn sync(&self, change: &SessionChange) {
        let _guard = self.write_lock.lock().await;
        let previous = &change.previous;
        let current = &change.current;
        let reset = change.transition.session_reset;

        if reset {
            self.clear_session_unlocked().await;
        }
        if previous.current_quiz() != current.current_quiz()
            || !self.quiz_bound.load(Ordering::Acquire)
        {
            self.save_quiz_key_unlocked(current.current_quiz()).await;
        }
        if previous.theme() != current.theme() {
            self.save_unlocked(StorageKey::Theme, &current.theme()).await;
        }
        if reset || previous.answers() != current.answers() {
            self.save_unlocked(StorageKey::Answers, current.answers()).await;
        }
        if reset || previous.current_page() != current.current_page() {
            self.save_unlocked(StorageKey::CurrentPage, &current.current_page())
                .await;
        }
        if reset || previous.is_submitted() != current.is_submitted() {
            self.save_unlocked(StorageKey::Submitted, &current.is_submitted())
                .await;
        }
    }

    /// Overwrite every progress key with a fresh session owned by `state`'s quiz.
    async fn bind_fresh_session(&self, state: &SessionState) {
        let _guard = self.write_lock.lock().await;
        self.save_quiz_key_unlocked(state.current_quiz()).await;
        self.save_unlocked(StorageKey::Answers, state.answers()).await;
        self.save_unlocked(StorageKey::CurrentPage, &state.current_page())
            .await;
        self.save_unlocked(StorageKey::Submitted, &state.is_submitted())
            .await;
    }

    async fn save_quiz_key_unlocked(&self, quiz: &QuizKey) {
        let saved = self.save_unlocked(StorageKey::CurrentQuiz, quiz).await;
        self.quiz_bound.store(saved, Ordering::Release);
    }

    async fn save_unlocked<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!(key = key.as_str(), error = %err, "failed to encode value");
                return false;
            }
        };
        match self.repo.set(key.as_str(), &raw).await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(key = key.as_str(), error = %err, "failed to persist value");
                false
            }
        }
    }

    async fn clear_session_unlocked(&self) {
        let keys = StorageKey::SESSION.map(StorageKey::as_str);
        if let Err(err) = self.repo.remove(&keys).await {
            tracing::error!(error = %err, "failed to clear session keys");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionId;
    use storage::repository::InMemoryRepository;

    fn persistence() -> (InMemoryRepository, SessionPersistence) {
        let repo = InMemoryRepository::new();
        let persistence = SessionPersistence::new(Arc::new(repo.clone()));
        (repo, persistence)
    }

    #[tokio::test]
    async fn load_returns_default_for_missing_key() {
        let (_repo, persistence) = persistence();
        let page = persistence.load(StorageKey::CurrentPage, 0_usize).await;
        assert_eq!(page, 0);
    }

    #[tokio::test]
    async fn load_returns_default_for_corrupt_answers() {
        let (repo, persistence) = persistence();
        repo.set("quiz_answers", "{not valid json").await.unwrap();

        let answers = persistence.load(StorageKey::Answers, Answers::new()).await;
        assert!(answers.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_answers_map() {
        let (repo, persistence) = persistence();
        let answers = Answers::from([(QuestionId::new(1), 0), (QuestionId::new(3), 2)]);

        persistence.save(StorageKey::Answers, &answers).await;

        let raw = repo.get("quiz_answers").await.unwrap().unwrap();
        assert!(raw.contains("\"3\":2"), "unexpected encoding {raw}");
        let loaded = persistence.load(StorageKey::Answers, Answers::new()).await;
        assert_eq!(loaded, answers);
    }

    #[tokio::test]
    async fn clear_session_keeps_theme_and_quiz() {
        let (repo, persistence) = persistence();
        persistence.save(StorageKey::Theme, &Theme::DarkBw).await;
        persistence.save(StorageKey::CurrentQuiz, "dsa").await;
        persistence.save(StorageKey::CurrentPage, &3_usize).await;
        persistence.save(StorageKey::Submitted, &true).await;
        persistence.save(StorageKey::Answers, &Answers::new()).await;

        persistence.clear_session().await;

        assert_eq!(repo.len(), 2);
        assert_eq!(
            repo.get("theme").await.unwrap().as_deref(),
            Some("\"theme-dark-bw\"")
        );
        assert_eq!(
            repo.get("current_quiz").await.unwrap().as_deref(),
            Some("\"dsa\"")
        );
    }

    #[test]
    fn storage_keys_match_layout() {
        let keys: Vec<&str> = StorageKey::SESSION.iter().map(|key| key.as_str()).collect();
        assert_eq!(keys, vec!["quiz_answers", "quiz_current_page", "quiz_submitted"]);
        assert_eq!(StorageKey::CurrentQuiz.as_str(), "current_quiz");
        assert_eq!(StorageKey::Theme.as_str(), "theme");
    }
}
