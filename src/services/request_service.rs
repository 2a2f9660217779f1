// src/services/request_service.rs
//
// O ciclo de vida de uma corrida: criação com pré-checagens nominativas,
// patch parcial com a propagação equipe -> comandante -> staff_id, o caminho
// estreito de status e o agregado diário.

use crate::{
    common::error::AppError,
    db::{BranchRepository, RequestRepository, ServiceRepository, TeamRepository, UserRepository},
    models::request::{
        CreateRequestPayload, DateSummary, RequestListQuery, RequestResponse, SummaryQuery,
        UpdateRequestPayload, UpdateRequestStatusPayload,
    },
};

#[derive(Clone)]
pub struct RequestService {
    request_repo: RequestRepository,
    team_repo: TeamRepository,
    branch_repo: BranchRepository,
    service_repo: ServiceRepository,
    user_repo: UserRepository,
}

impl RequestService {
    pub fn new(
        request_repo: RequestRepository,
        team_repo: TeamRepository,
        branch_repo: BranchRepository,
        service_repo: ServiceRepository,
        user_repo: UserRepository,
    ) -> Self {
        Self {
            request_repo,
            team_repo,
            branch_repo,
            service_repo,
            user_repo,
        }
    }

    pub async fn list(&self, query: &RequestListQuery) -> Result<Vec<RequestResponse>, AppError> {
        let rows = self.request_repo.list(query).await?;
        Ok(rows.into_iter().map(RequestResponse::from).collect())
    }

    // Cada referência é checada ANTES do INSERT e a recusa diz qual delas
    // falhou; erro de FK do banco nunca é o caminho de validação.
    pub async fn create(
        &self,
        payload: &CreateRequestPayload,
    ) -> Result<RequestResponse, AppError> {
        if self.service_repo.find_type(payload.service_type_id).await?.is_none() {
            return Err(AppError::BadRequest("Tipo de serviço inválido.".into()));
        }
        if !self.user_repo.exists(payload.user_id).await? {
            return Err(AppError::BadRequest("Usuário inválido.".into()));
        }
        if !self.branch_repo.exists(payload.branch_id).await? {
            return Err(AppError::BadRequest("Filial inválida.".into()));
        }

        let priority = payload.priority.as_deref().unwrap_or("medium");
        let my_status = payload.my_status.unwrap_or(0);

        let id = self.request_repo.create(payload, priority, my_status).await?;
        self.fetch_response(id).await
    }

    // Patch parcial. Se veio `team_id`, o staff_id passa a ser o comandante
    // da equipe; sem `team_id`, o staff_id atual fica como está (um staff_id
    // explícito no corpo ainda é aceito, herança do caminho PUT antigo).
    pub async fn patch(
        &self,
        id: i64,
        payload: &UpdateRequestPayload,
    ) -> Result<RequestResponse, AppError> {
        if payload.is_empty() {
            // Nada a gravar; devolve o estado atual (ou 404)
            return self.fetch_found(id).await;
        }

        let staff_id = match payload.team_id {
            Some(team_id) => self
                .team_repo
                .find_crew_commander(team_id)
                .await?
                .or(payload.staff_id),
            None => payload.staff_id,
        };

        let affected = self.request_repo.update_partial(id, payload, staff_id).await?;
        if affected == 0 {
            return Err(AppError::NotFound("Corrida não encontrada.".into()));
        }
        self.fetch_response(id).await
    }

    pub async fn update_status(
        &self,
        id: i64,
        payload: &UpdateRequestStatusPayload,
    ) -> Result<RequestResponse, AppError> {
        let affected = self
            .request_repo
            .update_status(id, &payload.status, payload.end_time)
            .await?;
        if affected == 0 {
            return Err(AppError::NotFound("Corrida não encontrada.".into()));
        }
        self.fetch_response(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.request_repo.delete(id).await? {
            return Err(AppError::NotFound("Corrida não encontrada.".into()));
        }
        Ok(())
    }

    pub async fn summaries(&self, query: &SummaryQuery) -> Result<Vec<DateSummary>, AppError> {
        self.request_repo.summaries(query).await
    }

    pub async fn fetch_found(&self, id: i64) -> Result<RequestResponse, AppError> {
        self.request_repo
            .find(id)
            .await?
            .map(RequestResponse::from)
            .ok_or_else(|| AppError::NotFound("Corrida não encontrada.".into()))
    }

    // Releitura obrigatória pós-escrita: se a linha sumiu, a operação toda é
    // tratada como falha.
    async fn fetch_response(&self, id: i64) -> Result<RequestResponse, AppError> {
        self.request_repo
            .find(id)
            .await?
            .map(RequestResponse::from)
            .ok_or_else(|| {
                AppError::InternalServerError(anyhow::anyhow!(
                    "Corrida {} não pôde ser relida após a escrita.",
                    id
                ))
            })
    }
}
