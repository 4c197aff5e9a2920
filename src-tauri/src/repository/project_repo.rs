//! Project Repository
//!
//! One row per project; the board tree is stored as a JSON column.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::traits::Repository;
use crate::domain::{Board, DomainError, DomainResult, Project, ProjectInfo};

pub struct ProjectRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl ProjectRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// Sidebar rows, most recently saved first
    pub async fn list_infos(&self) -> DomainResult<Vec<ProjectInfo>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let mut stmt = conn
            .prepare(
                "SELECT id, name, description, updated_at FROM projects
                 ORDER BY updated_at DESC, name",
            )
            .map_err(DomainError::internal)?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            })
            .map_err(DomainError::internal)?;

        let mut infos = Vec::new();
        for row in rows {
            let (id, name, description, updated_at) = row.map_err(DomainError::internal)?;
            infos.push(ProjectInfo {
                id: parse_id(&id)?,
                name,
                description,
                updated_at,
            });
        }
        Ok(infos)
    }
}

fn connection<'a>(guard: &'a Option<Connection>) -> DomainResult<&'a Connection> {
    guard
        .as_ref()
        .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))
}

fn parse_id(raw: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| DomainError::Internal(format!("Corrupt project id {}: {}", raw, e)))
}

type RawProject = (String, String, String, String);

fn raw_from_row(row: &Row) -> rusqlite::Result<RawProject> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn project_from_raw((id, name, description, boards): RawProject) -> DomainResult<Project> {
    let boards: Vec<Board> = serde_json::from_str(&boards)
        .map_err(|e| DomainError::Internal(format!("Corrupt boards for {}: {}", id, e)))?;
    Ok(Project {
        id: parse_id(&id)?,
        name,
        description,
        boards,
    })
}

fn boards_json(project: &Project) -> DomainResult<String> {
    serde_json::to_string(&project.boards).map_err(DomainError::internal)
}

#[async_trait]
impl Repository<Project> for ProjectRepository {
    async fn create(&self, entity: &Project) -> DomainResult<Project> {
        entity.validate()?;
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let now = chrono::Local::now().timestamp_millis();
        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO projects (id, name, description, boards, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    entity.id.to_string(),
                    entity.name,
                    entity.description,
                    boards_json(entity)?,
                    now
                ],
            )
            .map_err(DomainError::internal)?;
        if inserted == 0 {
            return Err(DomainError::Conflict(format!("Project {} already exists", entity.id)));
        }
        log::info!("created project {} ({})", entity.id, entity.name);
        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Project>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let raw = conn
            .query_row(
                "SELECT id, name, description, boards FROM projects WHERE id = ?1",
                params![id.to_string()],
                raw_from_row,
            )
            .optional()
            .map_err(DomainError::internal)?;
        raw.map(project_from_raw).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Project>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let mut stmt = conn
            .prepare("SELECT id, name, description, boards FROM projects ORDER BY updated_at DESC, name")
            .map_err(DomainError::internal)?;
        let rows = stmt.query_map([], raw_from_row).map_err(DomainError::internal)?;

        let mut projects = Vec::new();
        for row in rows {
            projects.push(project_from_raw(row.map_err(DomainError::internal)?)?);
        }
        Ok(projects)
    }

    async fn update(&self, entity: &Project) -> DomainResult<Project> {
        entity.validate()?;
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let now = chrono::Local::now().timestamp_millis();
        let changed = conn
            .execute(
                "UPDATE projects SET name = ?1, description = ?2, boards = ?3, updated_at = ?4
                 WHERE id = ?5",
                params![
                    entity.name,
                    entity.description,
                    boards_json(entity)?,
                    now,
                    entity.id.to_string()
                ],
            )
            .map_err(DomainError::internal)?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Project {}", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let changed = conn
            .execute("DELETE FROM projects WHERE id = ?1", params![id.to_string()])
            .map_err(DomainError::internal)?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Project {}", id)));
        }
        log::info!("deleted project {}", id);
        Ok(())
    }
}
