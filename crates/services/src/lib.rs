#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod lesson_session;
pub mod progress_service;
pub mod quiz_session;

pub use mathbook_core::Clock;

pub use app_services::AppServices;
pub use catalog::{ChapterStatus, ContentCatalog};
pub use error::{AppServicesError, CatalogError, SessionError};
pub use lesson_session::{LessonSession, LessonStep, ProgressWrite, SubmitOutcome};
pub use progress_service::{PROGRESS_STORAGE_KEY, ProgressOverview, ProgressService};
pub use quiz_session::{QuizAdvance, QuizSession, QuizStep, QuizView};
