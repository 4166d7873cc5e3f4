// src/db/lead_store.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{common::error::AppError, models::lead::LeadStatus};

// O que o armazém precisa saber sobre um lead, seja Quote ou Contact.
pub trait LeadRecord: Clone + Send + Sync + 'static {
    // Nome do tipo nas mensagens de erro ("Quote not found")
    const KIND: &'static str;

    fn id(&self) -> Uuid;
    fn created_at(&self) -> DateTime<Utc>;
    fn set_status(&mut self, status: LeadStatus, at: DateTime<Utc>);
}

// Contrato do repositório de leads. Os handlers só conhecem este trait,
// então trocar o armazém em memória por um banco real não toca em mais nada.
#[async_trait]
pub trait LeadRepository<T: LeadRecord>: Send + Sync {
    async fn insert(&self, record: T) -> Result<(), AppError>;

    // Sempre do mais novo para o mais antigo, por `createdAt`
    async fn list(&self) -> Result<Vec<T>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, AppError>;

    // Devolve o registro atualizado; NotFound se o id não existe
    async fn update_status(&self, id: Uuid, status: LeadStatus) -> Result<T, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

// Implementação em memória: um Vec atrás de RwLock, zerado a cada restart.
// Perda de dados no restart é uma lacuna declarada do produto, não um bug.
pub struct MemoryLeadStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: LeadRecord> MemoryLeadStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: LeadRecord> Default for MemoryLeadStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: LeadRecord> LeadRepository<T> for MemoryLeadStore<T> {
    async fn insert(&self, record: T) -> Result<(), AppError> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<T>, AppError> {
        let mut all = self.records.read().await.clone();
        all.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn update_status(&self, id: Uuid, status: LeadStatus) -> Result<T, AppError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(AppError::NotFound(T::KIND))?;
        record.set_status(status, Utc::now());
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(AppError::NotFound(T::KIND))?;
        records.remove(index);
        Ok(())
    }
}
