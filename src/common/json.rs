// src/common/json.rs
//
// Extrator de JSON do crate: corpo ausente, malformado ou sem um campo
// obrigatório vira 400 com { "message": ... }, nunca a resposta 422 em texto
// puro do extrator padrão. Na resposta ele delega ao Json do axum.

use axum::{
    extract::{FromRequest, Request, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::common::error::AppError;

pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Json(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Formulario {
        nome: String,
        conta: String,
    }

    fn request_json(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn campo_obrigatorio_ausente_vira_400_com_mensagem() {
        let req = request_json(r#"{"nome":"Acme"}"#);
        let err = Json::<Formulario>::from_request(req, &())
            .await
            .err()
            .expect("campo ausente deve ser rejeitado");

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn corpo_malformado_vira_400() {
        let req = request_json("{esquisito");
        let err = Json::<Formulario>::from_request(req, &())
            .await
            .err()
            .expect("JSON inválido deve ser rejeitado");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn corpo_valido_passa() {
        let req = request_json(r#"{"nome":"Acme","conta":"A-1"}"#);
        let Json(form) = Json::<Formulario>::from_request(req, &())
            .await
            .expect("corpo completo deve passar");
        assert_eq!(form.nome, "Acme");
        assert_eq!(form.conta, "A-1");
    }
}
