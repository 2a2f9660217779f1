// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,

        // --- Clientes ---
        handlers::clients::list_clients,
        handlers::clients::get_client,
        handlers::clients::create_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,

        // --- Equipes ---
        handlers::teams::create_team,
        handlers::teams::list_teams,

        // --- Corridas ---
        handlers::requests::list_requests,
        handlers::requests::create_request,
        handlers::requests::run_summaries,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::LoginPayload,
            models::auth::UserPublic,
            models::auth::AuthResponse,

            // --- Clientes ---
            models::client::Client,
            models::client::ClientPayload,

            // --- Equipes ---
            models::team::Team,
            models::team::TeamMember,
            models::team::TeamWithMembers,
            models::team::CreateTeamPayload,

            // --- Corridas ---
            models::request::RequestResponse,
            models::request::CreateRequestPayload,
            models::request::DateSummary,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação"),
        (name = "Clientes", description = "Clientes e seus cadastros"),
        (name = "Equipes", description = "Composição de equipes"),
        (name = "Corridas", description = "Ciclo de vida das corridas e agregados")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
