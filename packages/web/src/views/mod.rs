mod bookmarks;
mod feed;
mod groups;
mod login;
mod meal_plans;
mod notifications;
mod oauth_callback;
mod post_card;
mod profile;
mod recipes;
mod register;
mod skill_shares;

pub use bookmarks::Bookmarks;
pub use feed::Feed;
pub use groups::{CreateGroup, GroupDetail, Groups};
pub use login::Login;
pub use meal_plans::{CreateMealPlan, MealPlans};
pub use notifications::Notifications;
pub use oauth_callback::OAuthCallback;
pub use profile::{EditProfile, Profile};
pub use recipes::{CreateRecipe, EditRecipe, MyRecipes};
pub use register::Register;
pub use skill_shares::{CreateSkillShare, SkillShares};

use dioxus::prelude::*;

/// Split a textarea into trimmed, non-empty lines.
pub(crate) fn lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fallback for unknown paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "not-found",
            h2 { "Page not found" }
            p { "The page /{path} does not exist." }
            Link { to: crate::Route::Feed {}, "Back to the feed" }
        }
    }
}
