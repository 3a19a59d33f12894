//! Typed client for the GreenGo REST backend.
//!
//! Every endpoint requires the bearer credential the session gate
//! injected into the page; it is sent as `Authorization: Bearer <token>`.
//! The backend wraps payloads in a `{ success, message, ... }` envelope;
//! `success: false` and non-2xx statuses both surface as errors carrying
//! the backend's message. Reads retry on transport and 5xx failures;
//! mutating calls are single-attempt.
//!
//! A 401 here means the backend disagrees with the gate's notion of
//! validity. It is returned to the calling page like any other error and
//! does not feed back into the gate.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::retry::{retry_if, Backoff};
use crate::session::SessionCredential;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Failed to reach GreenGo API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("GreenGo API error ({status}): {message}")]
    Status { status: StatusCode, message: String },

    /// The backend answered 2xx but reported `success: false`.
    #[error("GreenGo API rejected the request: {0}")]
    Rejected(String),
}

impl ApiError {
    fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(e) => e.is_timeout() || e.is_connect(),
            ApiError::Status { status, .. } => status.is_server_error(),
            ApiError::Rejected(_) => false,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// ==================== Models ====================

/// One row of the collections list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    pub collection_date: String,
    pub collection_time: Option<String>,
    pub pickup_address: String,
    pub amount: Option<f64>,
    pub number_items: Option<f64>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
    pub status: String,
}

/// Detail view of a single collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CollectionDetails {
    #[serde(rename = "ID")]
    pub id: String,
    pub collection_date: String,
    pub collection_time: Option<String>,
    pub pickup_address: String,
    pub status: String,
    pub weight: Option<f64>,
    pub number_of_items: Option<f64>,
    pub notes: Option<String>,
}

/// Request body for scheduling (id 0) or rescheduling (id > 0) a pickup.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRequest {
    /// 0 schedules a new collection, anything else updates that one.
    pub id: i64,
    #[serde(rename = "userid")]
    pub user_id: i64,
    /// Pickup date, ISO 8601.
    pub date: String,
    #[serde(rename = "timeSlot")]
    pub time_slot: String,
    pub address: String,
    /// The backend derives the estimated weight (60 cans ≈ 1 kg).
    #[serde(rename = "cansCount")]
    pub cans_count: u32,
    pub notes: Option<String>,
}

/// What the backend echoes back for a scheduled pickup.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduledCollection {
    pub id: i64,
    pub date: String,
    #[serde(rename = "timeSlot")]
    pub time_slot: String,
    pub address: String,
    #[serde(rename = "cansCount")]
    pub cans_count: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub cpf: Option<String>,
    pub country: Option<String>,
    pub avatar: Option<String>,
    pub phone_number: Option<String>,
    pub notifications: Option<bool>,
    pub darkmode: Option<bool>,
}

/// Partial profile update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalletHomeData {
    #[serde(rename = "WalletID")]
    pub wallet_id: i64,
    pub current_balance: f64,
    pub last_payment_amount: Option<f64>,
    pub last_payment_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalletAccountSummary {
    #[serde(rename = "WalletID")]
    pub wallet_id: i64,
    pub current_balance: f64,
    pub total_income: f64,
    pub total_expense: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalletTransaction {
    #[serde(rename = "TransactionID")]
    pub transaction_id: i64,
    #[serde(rename = "WalletID")]
    pub wallet_id: i64,
    pub type_name: Option<String>,
    pub reference_code: Option<String>,
    pub amount: f64,
    pub tran_status: Option<String>,
    pub transaction_date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    #[serde(rename = "NotificationID")]
    pub notification_id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    pub title: String,
    pub messages: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub isread: bool,
    pub created_at: String,
    pub read_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethod {
    #[serde(rename = "PmID")]
    pub pm_id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub keyname: String,
    pub label: Option<String>,
    pub isdefault: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPaymentMethod {
    #[serde(rename = "type")]
    pub kind: String,
    pub keyname: String,
    pub label: Option<String>,
    pub isdefault: bool,
}

// ==================== Response envelopes ====================

#[derive(Debug, Deserialize)]
struct StatusResponse {
    success: bool,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResultResponse<T> {
    success: bool,
    message: Option<String>,
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
struct CollectionsResponse {
    success: bool,
    message: Option<String>,
    collections: Option<Vec<Collection>>,
}

#[derive(Debug, Deserialize)]
struct CollectionDetailsResponse {
    success: bool,
    message: Option<String>,
    collection: Option<CollectionDetails>,
}

#[derive(Debug, Deserialize)]
struct ScheduleResponse {
    success: bool,
    message: Option<String>,
    data: Option<ScheduledCollection>,
}

fn rejected(message: Option<String>) -> ApiError {
    ApiError::Rejected(message.unwrap_or_else(|| "no error message".to_string()))
}

// ==================== Client ====================

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    backoff: Backoff,
}

impl ApiClient {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            http,
            backoff: Backoff::api_call(),
        })
    }

    // ==================== Collections ====================

    pub async fn list_collections(
        &self,
        credential: &SessionCredential,
    ) -> ApiResult<Vec<Collection>> {
        let response: CollectionsResponse = self.get("/collections", &[], credential).await?;
        if !response.success {
            return Err(rejected(response.message));
        }
        Ok(response.collections.unwrap_or_default())
    }

    pub async fn collection_details(
        &self,
        credential: &SessionCredential,
        collection_id: &str,
    ) -> ApiResult<CollectionDetails> {
        let query = [("id", collection_id.to_string())];
        let response: CollectionDetailsResponse =
            self.get("/collections_details", &query, credential).await?;
        match (response.success, response.collection) {
            (true, Some(collection)) => Ok(collection),
            (_, _) => Err(rejected(response.message)),
        }
    }

    pub async fn cancel_collection(
        &self,
        credential: &SessionCredential,
        collection_id: &str,
        reason: Option<&str>,
    ) -> ApiResult<()> {
        let body = serde_json::json!({ "id": collection_id, "reason": reason });
        let response: StatusResponse = self
            .post("/collections_details/cancelled", &body, credential)
            .await?;
        if !response.success {
            return Err(rejected(response.message));
        }
        Ok(())
    }

    pub async fn schedule_collection(
        &self,
        credential: &SessionCredential,
        request: &ScheduleRequest,
    ) -> ApiResult<ScheduledCollection> {
        let response: ScheduleResponse = self.post("/schedule", request, credential).await?;
        match (response.success, response.data) {
            (true, Some(scheduled)) => Ok(scheduled),
            (_, _) => Err(rejected(response.message)),
        }
    }

    // ==================== Profile ====================

    pub async fn get_profile(&self, credential: &SessionCredential) -> ApiResult<Profile> {
        let response: ResultResponse<Profile> = self.get("/profile", &[], credential).await?;
        match (response.success, response.result) {
            (true, Some(profile)) => Ok(profile),
            (_, _) => Err(rejected(response.message)),
        }
    }

    pub async fn edit_profile(
        &self,
        credential: &SessionCredential,
        update: &ProfileUpdate,
    ) -> ApiResult<()> {
        let response: StatusResponse = self.post("/profile/edit", update, credential).await?;
        if !response.success {
            return Err(rejected(response.message));
        }
        Ok(())
    }

    /// Persist the display-language preference on the account, so other
    /// devices pick it up. The local store stays authoritative for this
    /// device.
    pub async fn set_profile_language(
        &self,
        credential: &SessionCredential,
        locale_code: &str,
    ) -> ApiResult<()> {
        let body = serde_json::json!({ "language": locale_code });
        let response: StatusResponse = self.post("/profile/language", &body, credential).await?;
        if !response.success {
            return Err(rejected(response.message));
        }
        Ok(())
    }

    // ==================== Wallet ====================

    /// The wallet card on the home page. `None` when the user has no
    /// wallet yet.
    pub async fn wallet_home(
        &self,
        credential: &SessionCredential,
    ) -> ApiResult<Option<WalletHomeData>> {
        let response: ResultResponse<WalletHomeData> =
            self.get("/wallethomedata", &[], credential).await?;
        if !response.success {
            return Err(rejected(response.message));
        }
        Ok(response.result)
    }

    pub async fn wallet_account_summary(
        &self,
        credential: &SessionCredential,
    ) -> ApiResult<WalletAccountSummary> {
        let response: ResultResponse<WalletAccountSummary> =
            self.get("/walletaccountsummary", &[], credential).await?;
        match (response.success, response.result) {
            (true, Some(summary)) => Ok(summary),
            (_, _) => Err(rejected(response.message)),
        }
    }

    pub async fn wallet_statement(
        &self,
        credential: &SessionCredential,
    ) -> ApiResult<Vec<WalletTransaction>> {
        let response: ResultResponse<Vec<WalletTransaction>> =
            self.get("/walletstatement", &[], credential).await?;
        if !response.success {
            return Err(rejected(response.message));
        }
        Ok(response.result.unwrap_or_default())
    }

    // ==================== Notifications ====================

    pub async fn list_notifications(
        &self,
        credential: &SessionCredential,
    ) -> ApiResult<Vec<Notification>> {
        let response: ResultResponse<Vec<Notification>> =
            self.get("/notifications", &[], credential).await?;
        if !response.success {
            return Err(rejected(response.message));
        }
        Ok(response.result.unwrap_or_default())
    }

    /// Mark one notification read; id 0 marks all of them.
    pub async fn mark_notification_read(
        &self,
        credential: &SessionCredential,
        notification_id: i64,
    ) -> ApiResult<()> {
        let path = format!("/notifications/update/{}", notification_id);
        let response: StatusResponse = self
            .post(&path, &serde_json::json!({}), credential)
            .await?;
        if !response.success {
            return Err(rejected(response.message));
        }
        Ok(())
    }

    // ==================== Payment methods ====================

    pub async fn list_payment_methods(
        &self,
        credential: &SessionCredential,
    ) -> ApiResult<Vec<PaymentMethod>> {
        let response: ResultResponse<Vec<PaymentMethod>> =
            self.get("/payment_methods", &[], credential).await?;
        if !response.success {
            return Err(rejected(response.message));
        }
        Ok(response.result.unwrap_or_default())
    }

    pub async fn add_payment_method(
        &self,
        credential: &SessionCredential,
        method: &NewPaymentMethod,
    ) -> ApiResult<PaymentMethod> {
        let response: ResultResponse<PaymentMethod> =
            self.post("/payment_methods/add", method, credential).await?;
        match (response.success, response.result) {
            (true, Some(created)) => Ok(created),
            (_, _) => Err(rejected(response.message)),
        }
    }

    pub async fn delete_payment_method(
        &self,
        credential: &SessionCredential,
        pm_id: i64,
    ) -> ApiResult<()> {
        let path = format!("/payment_methods/delete/{}", pm_id);
        let response: StatusResponse = self
            .post(&path, &serde_json::json!({}), credential)
            .await?;
        if !response.success {
            return Err(rejected(response.message));
        }
        Ok(())
    }

    pub async fn set_default_payment_method(
        &self,
        credential: &SessionCredential,
        pm_id: i64,
    ) -> ApiResult<()> {
        let path = format!("/payment_methods/set_default/{}", pm_id);
        let response: StatusResponse = self
            .post(&path, &serde_json::json!({}), credential)
            .await?;
        if !response.success {
            return Err(rejected(response.message));
        }
        Ok(())
    }

    // ==================== Plumbing ====================

    /// GET with retries on transport/5xx failures.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        credential: &SessionCredential,
    ) -> ApiResult<T> {
        retry_if(
            &self.backoff,
            path,
            || self.send_get(path, query, credential),
            ApiError::is_retryable,
        )
        .await
    }

    async fn send_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        credential: &SessionCredential,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(&url).bearer_auth(credential.token());
        if !query.is_empty() {
            request = request.query(query);
        }
        Self::decode(request.send().await?).await
    }

    /// POST, single attempt: mutations must not be replayed blindly.
    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        credential: &SessionCredential,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .bearer_auth(credential.token())
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message });
        }
        Ok(response.json::<T>().await?)
    }
}
