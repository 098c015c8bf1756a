//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here together with their OpenAPI specifications, and Swagger
//! UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/logout` - Delete the upstream session and clear session cookies
/// - `GET /api/auth/user` - Get the user owning the current session
/// - `GET /api/elevenlabs/health` - Voice provider availability
/// - `GET /api/elevenlabs/voices` - Voice catalog
/// - `GET /api/tavus/health` - Avatar provider availability
/// - `GET /api/tavus/replicas` - Avatar replica listing
/// - `GET /api/tavus/videos/{video_id}` - Avatar video generation status
/// - `GET /api/language-test/conversation/{conversation_id}` - Language test conversation details
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>`; call `with_state` before serving.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Lingo", description = "Lingo API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Session routes"),
        (name = controller::elevenlabs::ELEVENLABS_TAG, description = "Voice provider routes"),
        (name = controller::tavus::TAVUS_TAG, description = "Avatar provider routes"),
        (name = controller::language_test::LANGUAGE_TEST_TAG, description = "Language test routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::elevenlabs::health))
        .routes(routes!(controller::elevenlabs::get_voices))
        .routes(routes!(controller::tavus::health))
        .routes(routes!(controller::tavus::get_replicas))
        .routes(routes!(controller::tavus::get_video))
        .routes(routes!(controller::language_test::get_conversation))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
