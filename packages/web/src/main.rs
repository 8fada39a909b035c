use dioxus::prelude::*;

use ui::{AuthProvider, Header};
use views::{
    Bookmarks, CreateGroup, CreateMealPlan, CreateRecipe, CreateSkillShare, EditProfile,
    EditRecipe, Feed, GroupDetail, Groups, Login, MealPlans, MyRecipes, NotFound, Notifications,
    OAuthCallback, Profile, Register, SkillShares,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/oauth-callback")]
        OAuthCallback {},
        #[route("/feed")]
        Feed {},
        #[route("/create-recipe")]
        CreateRecipe {},
        #[route("/my-recipes")]
        MyRecipes {},
        #[route("/edit-recipe/:post_id")]
        EditRecipe { post_id: String },
        #[route("/meal-plans")]
        MealPlans {},
        #[route("/create-meal-plan")]
        CreateMealPlan {},
        #[route("/skill-shares")]
        SkillShares {},
        #[route("/create-skill-share")]
        CreateSkillShare {},
        #[route("/bookmarks")]
        Bookmarks {},
        #[route("/groups")]
        Groups {},
        #[route("/create-group")]
        CreateGroup {},
        #[route("/groups/:group_id")]
        GroupDetail { group_id: String },
        #[route("/notifications")]
        Notifications {},
        #[route("/profile/:user_id")]
        Profile { user_id: String },
        #[route("/edit-profile")]
        EditProfile {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Navigation bar above every page.
#[component]
fn Shell() -> Element {
    rsx! {
        Header {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

/// Landing page: signed-in users go straight to the feed, visitors get the
/// pitch and the way in.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    let state = auth();
    if state.loading {
        return rsx! {};
    }
    if state.user.is_some() {
        nav.replace(Route::Feed {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "landing",
            h1 { "CookBook" }
            p { "Share recipes, plan your meals, and learn from other cooks." }
            div {
                class: "landing-actions",
                Link { class: "button", to: Route::Register {}, "Get Started" }
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
