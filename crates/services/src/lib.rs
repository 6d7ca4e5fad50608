#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod persistence;
pub mod quiz_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, QuizServiceError};
pub use persistence::{SessionPersistence, StorageKey};
pub use quiz_service::{QuizService, SessionChange};
