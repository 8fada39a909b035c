use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::UserProfile;

impl ApiClient {
    pub async fn create_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError> {
        self.post_json("/api/userProfiles", profile).await
    }

    pub async fn get_profiles(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.get_json("/api/userProfiles").await
    }

    pub async fn get_profile(&self, id: &str) -> Result<UserProfile, ApiError> {
        self.get_json(&format!("/api/userProfiles/{id}")).await
    }

    pub async fn get_profile_by_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        self.get_json(&format!("/api/userProfiles/user/{user_id}")).await
    }

    pub async fn update_profile(
        &self,
        id: &str,
        profile: &UserProfile,
    ) -> Result<UserProfile, ApiError> {
        self.put_json(&format!("/api/userProfiles/{id}"), profile).await
    }

    pub async fn delete_profile(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/userProfiles/{id}")).await
    }
}
