use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{MealPlan, NewMealPlan};

impl ApiClient {
    pub async fn create_meal_plan(&self, plan: &NewMealPlan) -> Result<MealPlan, ApiError> {
        self.post_json("/api/MealPlans", plan).await
    }

    pub async fn get_meal_plans(&self) -> Result<Vec<MealPlan>, ApiError> {
        self.get_json("/api/MealPlans").await
    }

    pub async fn get_meal_plans_by_user(&self, user_id: &str) -> Result<Vec<MealPlan>, ApiError> {
        self.get_json(&format!("/api/MealPlans/{user_id}")).await
    }

    pub async fn update_meal_plan(
        &self,
        id: &str,
        plan: &NewMealPlan,
    ) -> Result<MealPlan, ApiError> {
        self.put_json(&format!("/api/MealPlans/{id}"), plan).await
    }

    pub async fn delete_meal_plan(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/MealPlans/{id}")).await
    }
}
