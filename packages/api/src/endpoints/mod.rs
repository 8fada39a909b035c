//! One module per backend controller. Each is a thin `impl ApiClient` block:
//! verb + path + typed body in, typed response out. No state lives here.

mod auth;
mod bookmarks;
mod comments;
mod connections;
mod group_posts;
mod groups;
mod likes;
mod meal_plans;
mod media_items;
mod notifications;
mod posts;
mod profiles;
mod skill_shares;
mod users;
