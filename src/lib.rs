//! Client SDK for the linkline social-network REST API.
//!
//! The crate is organized around four components that mirror the backend's
//! surface: a [`SessionStore`] owning the persisted token pair and cached
//! profile, an [`AuthGateway`] for register/login/logout/refresh, a shared
//! request layer that attaches the bearer credential to outgoing calls, and
//! a [`ContentService`] for posts, comments, and likes. The [`feed`] module
//! holds the pure list-reconciliation helpers callers apply to their local
//! feed after each successful response.
//!
//! DESIGN
//! ======
//! The session store is an explicitly constructed instance injected into the
//! gateways rather than ambient global state. Committing a session is a
//! single atomic operation: one in-memory swap, one document written to
//! disk. There is deliberately no refresh-and-retry on 401 responses; an
//! expired token surfaces as a backend error and the caller decides.

mod http;

pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod session;
pub mod types;

pub use auth::AuthGateway;
pub use config::ApiConfig;
pub use content::ContentService;
pub use error::{ApiError, SessionError};
pub use session::SessionStore;
pub use types::{
    AuthResponse, Comment, CommentResponse, CreateCommentInput, CreatePostInput, FileAttachment,
    LikeResponse, LoginInput, MessageResponse, Post, ProfileUpdateInput, RegisterInput, TokenPair,
    UserProfile,
};
