use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{NewNotification, Notification};

impl ApiClient {
    pub async fn get_notifications(&self, user_id: &str) -> Result<Vec<Notification>, ApiError> {
        self.get_json(&format!("/api/notifications/user/{user_id}")).await
    }

    /// Unread notifications only — polled by the header badge.
    pub async fn get_unread_notifications(
        &self,
        user_id: &str,
    ) -> Result<Vec<Notification>, ApiError> {
        self.get_json(&format!("/api/notifications/unread/{user_id}")).await
    }

    pub async fn create_notification(
        &self,
        notification: &NewNotification,
    ) -> Result<Notification, ApiError> {
        self.post_json("/api/notifications", notification).await
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<(), ApiError> {
        self.put_empty(&format!("/api/notifications/{id}/read"), None).await
    }

    pub async fn mark_all_notifications_read(&self, user_id: &str) -> Result<(), ApiError> {
        self.put_empty(&format!("/api/notifications/read-all/{user_id}"), None)
            .await
    }

    pub async fn delete_notification(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/notifications/{id}")).await
    }
}
