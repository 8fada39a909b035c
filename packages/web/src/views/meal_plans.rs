//! Weekly meal plans: shared list, creation, and in-place editing.

use std::collections::HashMap;

use api::models::{MealPlan, NewMealPlan};
use dioxus::prelude::*;
use ui::{use_api, use_auth, RequireAuth};

use crate::Route;

#[component]
pub fn MealPlans() -> Element {
    let client = use_api();
    let auth = use_auth();

    let me = auth().user.map(|user| user.id).unwrap_or_default();
    let mut editing = use_signal(|| Option::<MealPlan>::None);

    let plans = {
        let client = client.clone();
        use_resource(move || {
            let client = client.clone();
            async move {
                let usernames: HashMap<String, String> = client
                    .get_users()
                    .await
                    .unwrap_or_default()
                    .into_iter()
                    .map(|user| (user.id, user.username))
                    .collect();
                let plans = client.get_meal_plans().await?;
                Ok::<_, api::ApiError>((plans, usernames))
            }
        })
    };

    let delete_plan = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            let mut plans = plans;
            spawn(async move {
                if let Err(err) = client.delete_meal_plan(&id).await {
                    tracing::warn!(%err, "could not delete meal plan");
                }
                plans.restart();
            });
        }
    };

    let save_plan = {
        let client = client.clone();
        move |(id, body): (String, NewMealPlan)| {
            let client = client.clone();
            let mut plans = plans;
            spawn(async move {
                if let Err(err) = client.update_meal_plan(&id, &body).await {
                    tracing::warn!(%err, "could not update meal plan");
                }
                plans.restart();
            });
        }
    };

    rsx! {
        RequireAuth {
            div {
                class: "feed",
                div {
                    class: "feed-head",
                    h2 { "Meal Plans" }
                    Link { class: "button", to: Route::CreateMealPlan {}, "New Meal Plan" }
                }

                match plans() {
                    None => rsx! { div { class: "page-loading", "Loading..." } },
                    Some(Err(err)) => rsx! {
                        div { class: "alert alert-error", "Could not load meal plans: {err.message()}" }
                    },
                    Some(Ok((plans, usernames))) => rsx! {
                        if plans.is_empty() {
                            p { class: "empty-state", "No meal plans yet." }
                        }
                        for plan in plans {
                            if editing().as_ref().map(|p| p.id.as_str()) == Some(plan.id.as_str()) {
                                MealPlanEditor {
                                    key: "{plan.id}",
                                    plan: plan.clone(),
                                    on_save: {
                                        let save_plan = save_plan.clone();
                                        move |payload| {
                                            save_plan(payload);
                                            editing.set(None);
                                        }
                                    },
                                    on_cancel: move |_| editing.set(None),
                                }
                            } else {
                                MealPlanCard {
                                    key: "{plan.id}",
                                    author: usernames.get(&plan.user_id).cloned().unwrap_or_else(|| "Unknown".to_string()),
                                    owned: plan.user_id == me,
                                    on_edit: {
                                        let plan = plan.clone();
                                        move |_| editing.set(Some(plan.clone()))
                                    },
                                    on_delete: {
                                        let id = plan.id.clone();
                                        let delete_plan = delete_plan.clone();
                                        move |_| delete_plan(id.clone())
                                    },
                                    plan,
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn MealPlanCard(
    plan: MealPlan,
    author: String,
    owned: bool,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    rsx! {
        article {
            class: "plan-card",
            div {
                class: "plan-head",
                div {
                    h3 { "{plan.name}" }
                    span { class: "plan-author", "by {author}" }
                }
                if owned {
                    div {
                        class: "plan-actions",
                        button { class: "icon-btn", onclick: move |_| on_edit.call(()), "Edit" }
                        button { class: "icon-btn danger", onclick: move |_| on_delete.call(()), "Delete" }
                    }
                }
            }
            if let Some(description) = &plan.description {
                p { "{description}" }
            }
            if !plan.meals.is_empty() {
                h4 { "Meals" }
                ul {
                    for meal in &plan.meals {
                        li { "{meal}" }
                    }
                }
            }
            if !plan.ingredients.is_empty() {
                h4 { "Shopping list" }
                ul {
                    for ingredient in &plan.ingredients {
                        li { "{ingredient}" }
                    }
                }
            }
            if !plan.instructions.is_empty() {
                h4 { "Prep notes" }
                ol {
                    for step in &plan.instructions {
                        li { "{step}" }
                    }
                }
            }
        }
    }
}

#[component]
fn MealPlanEditor(
    plan: MealPlan,
    on_save: EventHandler<(String, NewMealPlan)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut name = use_signal(|| plan.name.clone());
    let mut description = use_signal(|| plan.description.clone().unwrap_or_default());
    let mut meals = use_signal(|| plan.meals.join("\n"));
    let mut ingredients = use_signal(|| plan.ingredients.join("\n"));
    let mut instructions = use_signal(|| plan.instructions.join("\n"));

    let plan_id = plan.id.clone();
    let user_id = plan.user_id.clone();
    let save = move |_| {
        if name().trim().is_empty() {
            return;
        }
        on_save.call((
            plan_id.clone(),
            NewMealPlan {
                user_id: user_id.clone(),
                name: name().trim().to_string(),
                description: description(),
                meals: super::lines(&meals()),
                ingredients: super::lines(&ingredients()),
                instructions: super::lines(&instructions()),
            },
        ));
    };

    rsx! {
        article {
            class: "plan-card editing",
            label { "Name"
                input {
                    r#type: "text",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            label { "Description"
                textarea {
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            label { "Meals (one per line)"
                textarea {
                    value: meals(),
                    oninput: move |evt| meals.set(evt.value()),
                }
            }
            label { "Shopping list (one per line)"
                textarea {
                    value: ingredients(),
                    oninput: move |evt| ingredients.set(evt.value()),
                }
            }
            label { "Prep notes (one per line)"
                textarea {
                    value: instructions(),
                    oninput: move |evt| instructions.set(evt.value()),
                }
            }
            div {
                class: "plan-actions",
                button { onclick: save, "Save" }
                button { class: "secondary", onclick: move |_| on_cancel.call(()), "Cancel" }
            }
        }
    }
}

#[component]
pub fn CreateMealPlan() -> Element {
    let client = use_api();
    let auth = use_auth();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut meals = use_signal(String::new);
    let mut ingredients = use_signal(String::new);
    let mut instructions = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let me = auth().user.map(|user| user.id).unwrap_or_default();
        spawn(async move {
            error.set(None);
            if name().trim().is_empty() {
                error.set(Some("Please name your meal plan".to_string()));
                return;
            }
            busy.set(true);
            let body = NewMealPlan {
                user_id: me,
                name: name().trim().to_string(),
                description: description(),
                meals: super::lines(&meals()),
                ingredients: super::lines(&ingredients()),
                instructions: super::lines(&instructions()),
            };
            match client.create_meal_plan(&body).await {
                Ok(_) => {
                    nav.push(Route::MealPlans {});
                }
                Err(err) => error.set(Some(err.message())),
            }
            busy.set(false);
        });
    };

    rsx! {
        RequireAuth {
            div {
                class: "form-page",
                h2 { "New Meal Plan" }

                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                }

                form {
                    class: "stacked-form",
                    onsubmit: onsubmit,
                    label { "Name"
                        input {
                            r#type: "text",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    label { "Description"
                        textarea {
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    label { "Meals (one per line)"
                        textarea {
                            value: meals(),
                            oninput: move |evt| meals.set(evt.value()),
                        }
                    }
                    label { "Shopping list (one per line)"
                        textarea {
                            value: ingredients(),
                            oninput: move |evt| ingredients.set(evt.value()),
                        }
                    }
                    label { "Prep notes (one per line)"
                        textarea {
                            value: instructions(),
                            oninput: move |evt| instructions.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Saving..." } else { "Create Meal Plan" }
                    }
                }
            }
        }
    }
}
