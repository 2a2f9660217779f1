// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::db::{
    BranchRepository, ClientRepository, NoticeRepository, RequestRepository, ServiceRepository,
    ServiceRequestRepository, SosRepository, StaffRepository, TeamRepository, UserRepository,
};
use crate::services::{
    auth::AuthService, request_service::RequestService, team_service::TeamService,
    upload_service::UploadService,
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,

    pub client_repo: ClientRepository,
    pub branch_repo: BranchRepository,
    pub staff_repo: StaffRepository,
    pub service_repo: ServiceRepository,
    pub service_request_repo: ServiceRequestRepository,
    pub notice_repo: NoticeRepository,
    pub sos_repo: SosRepository,

    pub auth_service: AuthService,
    pub team_service: TeamService,
    pub request_service: RequestService,
    pub upload_service: UploadService,
}

impl AppState {
    // A assinatura retorna um Result para propagar falhas de conexão.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool, jwt_secret, upload_dir))
    }

    // Monta o gráfico de dependências sobre um pool já existente.
    pub fn from_pool(db_pool: PgPool, jwt_secret: String, upload_dir: String) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let branch_repo = BranchRepository::new(db_pool.clone());
        let staff_repo = StaffRepository::new(db_pool.clone());
        let team_repo = TeamRepository::new(db_pool.clone());
        let service_repo = ServiceRepository::new(db_pool.clone());
        let service_request_repo = ServiceRequestRepository::new(db_pool.clone());
        let request_repo = RequestRepository::new(db_pool.clone());
        let notice_repo = NoticeRepository::new(db_pool.clone());
        let sos_repo = SosRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone(), jwt_secret);
        let team_service = TeamService::new(team_repo.clone(), staff_repo.clone(), db_pool.clone());
        let request_service = RequestService::new(
            request_repo,
            team_repo,
            branch_repo.clone(),
            service_repo.clone(),
            user_repo,
        );
        let upload_service = UploadService::new(upload_dir);

        Self {
            db_pool,
            client_repo,
            branch_repo,
            staff_repo,
            service_repo,
            service_request_repo,
            notice_repo,
            sos_repo,
            auth_service,
            team_service,
            request_service,
            upload_service,
        }
    }
}
