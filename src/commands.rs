//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands. A rejected invoke surfaces as
//! `Err` with the backend's message.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::models::{Project, ProjectInfo, Settings};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateProjectArgs<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

#[derive(Serialize)]
pub struct IdArgs<'a> {
    pub id: &'a str,
}

#[derive(Serialize)]
pub struct ProjectArgs<'a> {
    pub project: &'a Project,
}

#[derive(Serialize)]
pub struct SettingsArgs<'a> {
    pub settings: &'a Settings,
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

fn to_args<A: Serialize>(args: &A) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())
}

// ========================
// Project Commands
// ========================

pub async fn list_projects() -> Result<Vec<ProjectInfo>, String> {
    call("list_projects", JsValue::NULL).await
}

pub async fn create_project(name: &str, description: &str) -> Result<Project, String> {
    call("create_project", to_args(&CreateProjectArgs { name, description })?).await
}

pub async fn get_project(id: &str) -> Result<Project, String> {
    call("get_project", to_args(&IdArgs { id })?).await
}

pub async fn save_project(project: &Project) -> Result<Project, String> {
    call("save_project", to_args(&ProjectArgs { project })?).await
}

pub async fn delete_project(id: &str) -> Result<(), String> {
    invoke("delete_project", to_args(&IdArgs { id })?)
        .await
        .map(|_| ())
        .map_err(js_error)
}

// ========================
// Settings Commands
// ========================

pub async fn get_settings() -> Result<Settings, String> {
    call("get_settings", JsValue::NULL).await
}

pub async fn save_settings(settings: &Settings) -> Result<Settings, String> {
    call("save_settings", to_args(&SettingsArgs { settings })?).await
}
