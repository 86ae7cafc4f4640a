//! Game sessions: the settings-driven owner of one engine.

pub mod game_session;

pub use game_session::GameSession;
