// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use clap::Parser;
use pestaway_api::{
    ApiError, BookingRequest, BookingResponse, ContactRequest, dispatch_booking, submit_contact,
    validate_booking,
};
use pestaway_notify::{SmtpConfig, SmtpNotifier};
use pestaway_persistence::SqliteStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::{error, info};

/// PestAway Server - HTTP server for the PestAway booking platform
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The contact store is internally synchronized and shared directly; the
/// notifier is absent when SMTP credentials are not configured.
#[derive(Clone)]
struct AppState {
    /// The contact submission store.
    store: Arc<SqliteStore>,
    /// The SMTP notifier, when email credentials are configured.
    notifier: Option<Arc<SmtpNotifier>>,
}

/// Error response type for the booking endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// Contact endpoint response for both outcomes.
///
/// The contact contract always carries `success` and `message`; on
/// persistence failure it additionally carries the error detail and
/// whatever partial identifier exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContactApiResponse {
    /// Success indicator.
    success: bool,
    /// A human-readable message.
    message: String,
    /// Error detail, present on persistence failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    /// The submission identifier: the persisted id on success, or the
    /// partial identifier on persistence failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    submission_id: Option<i64>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::NotificationUnavailable => Self {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: err.to_string(),
            },
            ApiError::PersistenceFailure { .. } | ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for the POST /bookings endpoint.
///
/// Validates the submission payload and dispatches the two booking
/// notification emails. The endpoint's entire effect is email, so it is
/// unavailable while SMTP credentials are not configured.
async fn handle_submit_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(
        pest_type = %request.pest_type,
        property_type = %request.property_type,
        "Handling booking request"
    );

    let form = validate_booking(&request)?;
    let response: BookingResponse =
        dispatch_booking(app_state.notifier.as_deref(), &form).await?;

    Ok(Json(response))
}

/// Handler for the POST /contact endpoint.
///
/// Runs the contact pipeline: validate, persist, then best-effort
/// notification email. The response always carries `success` and
/// `message`; persistence failures add the error detail and any partial
/// identifier.
async fn handle_submit_contact(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<ContactRequest>,
) -> Response {
    info!(name = %request.name, "Handling contact request");

    let result = submit_contact(
        &app_state.store,
        app_state.notifier.as_deref(),
        &request,
        OffsetDateTime::now_utc(),
    )
    .await;

    match result {
        Ok(response) => (
            StatusCode::OK,
            Json(ContactApiResponse {
                success: response.success,
                message: response.message,
                error: None,
                submission_id: response.submission_id,
            }),
        )
            .into_response(),
        Err(err @ ApiError::InvalidInput { .. }) => (
            StatusCode::BAD_REQUEST,
            Json(ContactApiResponse {
                success: false,
                message: err.to_string(),
                error: None,
                submission_id: None,
            }),
        )
            .into_response(),
        Err(ApiError::PersistenceFailure {
            message,
            partial_id,
        }) => {
            error!(error = %message, "Contact submission could not be persisted");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactApiResponse {
                    success: false,
                    message: String::from("Failed to save your message, please try again later"),
                    error: Some(message),
                    submission_id: partial_id,
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!(error = %err, "Contact submission failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactApiResponse {
                    success: false,
                    message: String::from("Something went wrong, please try again later"),
                    error: None,
                    submission_id: None,
                }),
            )
                .into_response()
        }
    }
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/bookings", post(handle_submit_booking))
        .route("/contact", post(handle_submit_contact))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing PestAway Server");

    // Resolve the notifier from the environment; running without one
    // degrades the contact pipeline to persist-only and makes the
    // booking endpoint unavailable.
    let notifier: Option<Arc<SmtpNotifier>> = match SmtpConfig::from_env() {
        Some(config) => Some(Arc::new(SmtpNotifier::new(config))),
        None => {
            info!("SMTP credentials not configured; notification email disabled");
            None
        }
    };

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let store: SqliteStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteStore::new_in_memory()?
    };

    let app_state: AppState = AppState {
        store: Arc::new(store),
        notifier,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence and
    /// no notifier.
    fn create_test_app_state() -> AppState {
        let store = SqliteStore::new_in_memory().expect("in-memory store");
        AppState {
            store: Arc::new(store),
            notifier: None,
        }
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn valid_contact_body() -> serde_json::Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-0100",
            "subject": "Quarterly service",
            "message": "Seeing ants again near the garage."
        })
    }

    fn valid_booking_body() -> serde_json::Value {
        json!({
            "pestType": "Ants",
            "propertyType": "Residential",
            "businessInfo": "n/a",
            "pestInfo": "small ants in kitchen",
            "address": "1 Main St",
            "gateCode": "",
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "j@x.com",
            "phone": "555-0100",
            "selectedDate": "2026-03-11",
            "selectedTime": "11:00 AM"
        })
    }

    #[tokio::test]
    async fn test_contact_submission_persists_without_notifier() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let response = app
            .oneshot(post_json("/contact", valid_contact_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ContactApiResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(body.success);
        assert_eq!(body.submission_id, Some(1));

        // The submission was persisted even though email is disabled.
        assert_eq!(app_state.store.count_contact_submissions().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_contact_missing_name_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let mut body = valid_contact_body();
        body["name"] = json!("");

        let response = app.oneshot(post_json("/contact", body)).await.unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ContactApiResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(!parsed.success);
        assert!(parsed.submission_id.is_none());
    }

    #[tokio::test]
    async fn test_contact_malformed_email_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let mut body = valid_contact_body();
        body["email"] = json!("abc@def");

        let response = app.oneshot(post_json("/contact", body)).await.unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_contact_accepts_legacy_service_key() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let body = json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "service": "Rodent control",
            "message": "Scratching in the attic."
        });

        let response = app.oneshot(post_json("/contact", body)).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let record = app_state.store.get_contact_submission(1).unwrap();
        assert_eq!(record.submission.subject.as_deref(), Some("Rodent control"));
    }

    #[tokio::test]
    async fn test_booking_without_notifier_is_unavailable() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(post_json("/bookings", valid_booking_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(parsed.error);
        // Generic retry-later message; never credential details.
        assert!(parsed.message.contains("try again later"));
    }

    #[tokio::test]
    async fn test_booking_unknown_pest_type_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let mut body = valid_booking_body();
        body["pestType"] = json!("Dragons");

        let response = app.oneshot(post_json("/bookings", body)).await.unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(parsed.message.contains("pestType"));
    }

    #[tokio::test]
    async fn test_booking_unknown_slot_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let mut body = valid_booking_body();
        body["selectedTime"] = json!("3:30 AM");

        let response = app.oneshot(post_json("/bookings", body)).await.unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_booking_null_date_is_accepted() {
        let app: Router = build_router(create_test_app_state());

        let mut body = valid_booking_body();
        body["selectedDate"] = json!(null);

        let response = app.oneshot(post_json("/bookings", body)).await.unwrap();

        // The date may be null; without a notifier the request still
        // reaches the dispatch stage and reports unavailable.
        assert_eq!(response.status(), HttpStatusCode::SERVICE_UNAVAILABLE);
    }
}
