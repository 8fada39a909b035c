//! Shared UI components for the CookBook web client.

mod auth;
mod header;
mod media_upload;
mod media_view;
mod recipe_card;
mod require_auth;

pub use auth::{use_api, use_auth, use_session, AuthProvider, AuthState, LogoutButton};
pub use header::Header;
pub use media_upload::MediaUpload;
pub use media_view::MediaView;
pub use recipe_card::{CommentRow, RecipeCard};
pub use require_auth::RequireAuth;
