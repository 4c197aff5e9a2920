//! Project Commands
//!
//! Tauri commands for project CRUD. The whole board tree travels with the
//! project on save.

use tauri::State;
use uuid::Uuid;

use crate::domain::{DomainError, Project, ProjectInfo};
use crate::repository::{ProjectRepository, Repository};
use crate::AppState;

fn repo(state: &AppState) -> ProjectRepository {
    ProjectRepository::new(state.db_state.conn.clone())
}

fn parse_id(id: &str) -> Result<Uuid, String> {
    Uuid::parse_str(id).map_err(|_| DomainError::InvalidInput(format!("Bad project id '{}'", id)).to_string())
}

#[tauri::command]
pub async fn create_project(
    name: String,
    description: String,
    state: State<'_, AppState>,
) -> Result<Project, String> {
    let project = Project::new(&name, &description).map_err(|e| e.to_string())?;
    repo(&state).create(&project).await.map_err(|e| {
        log::error!("create_project failed: {}", e);
        e.to_string()
    })
}

#[tauri::command]
pub async fn list_projects(state: State<'_, AppState>) -> Result<Vec<ProjectInfo>, String> {
    repo(&state).list_infos().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_project(id: String, state: State<'_, AppState>) -> Result<Project, String> {
    let id = parse_id(&id)?;
    repo(&state)
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| DomainError::NotFound(format!("Project {}", id)).to_string())
}

#[tauri::command]
pub async fn save_project(project: Project, state: State<'_, AppState>) -> Result<Project, String> {
    let saved = repo(&state).update(&project).await.map_err(|e| {
        log::warn!("save_project {} rejected: {}", project.id, e);
        e.to_string()
    })?;
    log::info!(
        "saved project {} ({} boards)",
        saved.id,
        saved.boards.len()
    );
    Ok(saved)
}

#[tauri::command]
pub async fn delete_project(id: String, state: State<'_, AppState>) -> Result<(), String> {
    let id = parse_id(&id)?;
    repo(&state).delete(id).await.map_err(|e| e.to_string())
}
