// src/services/upload_service.rs
//
// Armazenamento de arquivos enviados (fotos de funcionários). O serviço é um
// colaborador injetado: o resto do código só conhece `store` e a resposta
// { url, public_id }, igual à do uploader de nuvem que ele substitui.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::error::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct StoredUpload {
    pub url: String,
    pub public_id: String,
}

#[derive(Clone)]
pub struct UploadService {
    upload_dir: PathBuf,
}

impl UploadService {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self { upload_dir: upload_dir.into() }
    }

    pub async fn store(
        &self,
        original_name: Option<&str>,
        bytes: &[u8],
    ) -> Result<StoredUpload, AppError> {
        fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(anyhow::Error::from)?;

        let public_id = Uuid::new_v4().to_string();
        let file_name = match extension_of(original_name) {
            Some(ext) => format!("{public_id}.{ext}"),
            None => public_id.clone(),
        };

        let path = self.upload_dir.join(&file_name);
        fs::write(&path, bytes).await.map_err(anyhow::Error::from)?;

        Ok(StoredUpload {
            url: format!("/uploads/{file_name}"),
            public_id,
        })
    }
}

// A extensão vem do nome original, nunca do conteúdo
fn extension_of(original_name: Option<&str>) -> Option<String> {
    original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensao_vem_do_nome_original() {
        assert_eq!(extension_of(Some("foto.JPG")), Some("jpg".into()));
        assert_eq!(extension_of(Some("arquivo.tar.gz")), Some("gz".into()));
        assert_eq!(extension_of(Some("sem_extensao")), None);
        assert_eq!(extension_of(None), None);
    }

    #[tokio::test]
    async fn grava_o_arquivo_e_devolve_url_com_public_id() {
        let dir = std::env::temp_dir().join(format!("uploads-teste-{}", Uuid::new_v4()));
        let service = UploadService::new(&dir);

        let stored = service.store(Some("foto.png"), b"conteudo").await.unwrap();

        assert!(stored.url.starts_with("/uploads/"));
        assert!(stored.url.ends_with(".png"));
        let written = std::fs::read(dir.join(format!("{}.png", stored.public_id))).unwrap();
        assert_eq!(written, b"conteudo");

        std::fs::remove_dir_all(&dir).ok();
    }
}
