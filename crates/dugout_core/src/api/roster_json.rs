//! JSON entry points for every roster command.
//!
//! Each handler takes a JSON request string plus the store, performs one
//! command, and returns a serialized `ApiResponse`. Mutation responses carry
//! all three refreshed views so the host can repaint every dependent surface
//! from a single round trip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::RosterError;
use crate::roster::position::position_label;
use crate::roster::{Player, Position};
use crate::save::StorageBackend;
use crate::store::RosterStore;
use crate::views::{render_all, ViewBundle};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Structured API error with a stable code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }
}

fn api_error_for(err: &RosterError) -> ApiError {
    match err {
        RosterError::DuplicateName { name } => {
            ApiError::new("DUPLICATE_NAME", &format!("A player named {:?} already exists", name))
        }
        RosterError::Save(e) => ApiError::new("SAVE_FAILED", &e.to_string()),
    }
}

fn respond<T: Serialize>(response: ApiResponse<T>) -> String {
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlayerRequest {
    pub schema_version: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlayerResponse {
    pub player: Player,
    pub views: ViewBundle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePlayerRequest {
    pub schema_version: Option<String>,
    pub player_id: String,
    pub new_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPositionRequest {
    pub schema_version: Option<String>,
    pub player_id: String,
    /// Position label; empty string or absent means unassigned.
    #[serde(default, with = "position_label")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetNotesRequest {
    pub schema_version: Option<String>,
    pub player_id: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovePlayerRequest {
    pub schema_version: Option<String>,
    pub player_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub schema_version: Option<String>,
    /// The complete surviving ordering of player ids after a reorder
    /// gesture.
    pub ids: Vec<String>,
}

/// The refreshed views carried by every mutation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewsResponse {
    pub views: ViewBundle,
}

/// Add a player from a JSON request string.
///
/// Returns a JSON `ApiResponse<AddPlayerResponse>` containing the created
/// player and the refreshed views.
pub fn add_player_json<S: StorageBackend>(
    request_json: &str,
    store: &mut RosterStore<S>,
) -> String {
    info!("Processing add player request");

    let request: AddPlayerRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse AddPlayerRequest: {}", e);
            let api_error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return respond(ApiResponse::<AddPlayerResponse>::error(api_error));
        }
    };

    match store.add_player(&request.name) {
        Ok(player) => {
            info!("Added player {} ({})", player.name, player.id);
            let views = render_all(store.roster());
            respond(ApiResponse::success(AddPlayerResponse { player, views }))
        }
        Err(e) => {
            warn!("Add player rejected: {}", e);
            respond(ApiResponse::<AddPlayerResponse>::error(api_error_for(&e)))
        }
    }
}

/// Rename a player from a JSON request string.
pub fn rename_player_json<S: StorageBackend>(
    request_json: &str,
    store: &mut RosterStore<S>,
) -> String {
    info!("Processing rename player request");

    let request: RenamePlayerRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse RenamePlayerRequest: {}", e);
            let api_error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return respond(ApiResponse::<ViewsResponse>::error(api_error));
        }
    };

    match store.rename_player(&request.player_id, &request.new_name) {
        Ok(()) => views_response(store),
        Err(e) => {
            warn!("Rename rejected for {}: {}", request.player_id, e);
            respond(ApiResponse::<ViewsResponse>::error(api_error_for(&e)))
        }
    }
}

/// Assign or clear a player's position from a JSON request string.
pub fn set_position_json<S: StorageBackend>(
    request_json: &str,
    store: &mut RosterStore<S>,
) -> String {
    debug!("Processing set position request");

    let request: SetPositionRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse SetPositionRequest: {}", e);
            let api_error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return respond(ApiResponse::<ViewsResponse>::error(api_error));
        }
    };

    match store.set_position(&request.player_id, request.position) {
        Ok(()) => views_response(store),
        Err(e) => {
            error!("Set position failed for {}: {}", request.player_id, e);
            respond(ApiResponse::<ViewsResponse>::error(api_error_for(&e)))
        }
    }
}

/// Update a bench player's notes from a JSON request string.
pub fn set_notes_json<S: StorageBackend>(request_json: &str, store: &mut RosterStore<S>) -> String {
    debug!("Processing set notes request");

    let request: SetNotesRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse SetNotesRequest: {}", e);
            let api_error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return respond(ApiResponse::<ViewsResponse>::error(api_error));
        }
    };

    match store.set_notes(&request.player_id, &request.notes) {
        Ok(()) => views_response(store),
        Err(e) => {
            error!("Set notes failed for {}: {}", request.player_id, e);
            respond(ApiResponse::<ViewsResponse>::error(api_error_for(&e)))
        }
    }
}

/// Remove a player from a JSON request string.
pub fn remove_player_json<S: StorageBackend>(
    request_json: &str,
    store: &mut RosterStore<S>,
) -> String {
    info!("Processing remove player request");

    let request: RemovePlayerRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse RemovePlayerRequest: {}", e);
            let api_error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return respond(ApiResponse::<ViewsResponse>::error(api_error));
        }
    };

    match store.remove_player(&request.player_id) {
        Ok(()) => views_response(store),
        Err(e) => {
            error!("Remove failed for {}: {}", request.player_id, e);
            respond(ApiResponse::<ViewsResponse>::error(api_error_for(&e)))
        }
    }
}

/// Replace the lineup order from a JSON request string. Invoked exactly once
/// per completed drag-and-drop gesture with the full surviving id ordering.
pub fn reorder_json<S: StorageBackend>(request_json: &str, store: &mut RosterStore<S>) -> String {
    info!("Processing reorder request");

    let request: ReorderRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse ReorderRequest: {}", e);
            let api_error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return respond(ApiResponse::<ViewsResponse>::error(api_error));
        }
    };

    match store.reorder(&request.ids) {
        Ok(()) => views_response(store),
        Err(e) => {
            error!("Reorder failed: {}", e);
            respond(ApiResponse::<ViewsResponse>::error(api_error_for(&e)))
        }
    }
}

/// Render all three views without mutating anything.
pub fn get_views_json<S: StorageBackend>(store: &RosterStore<S>) -> String {
    debug!("Processing get views request");
    respond(ApiResponse::success(ViewsResponse { views: render_all(store.roster()) }))
}

fn views_response<S: StorageBackend>(store: &RosterStore<S>) -> String {
    respond(ApiResponse::success(ViewsResponse { views: render_all(store.roster()) }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::MemoryStorage;
    use serde_json::json;

    fn open_empty() -> RosterStore<MemoryStorage> {
        RosterStore::open(MemoryStorage::new()).unwrap()
    }

    fn parse(response: &str) -> serde_json::Value {
        serde_json::from_str(response).unwrap()
    }

    #[test]
    fn add_player_returns_player_and_views() {
        let mut store = open_empty();
        let request = json!({"name": "Alice"}).to_string();

        let response = parse(&add_player_json(&request, &mut store));

        assert_eq!(response["success"], true);
        assert_eq!(response["schema_version"], API_VERSION);
        assert_eq!(response["data"]["player"]["name"], "Alice");
        assert_eq!(response["data"]["views"]["roster"]["rows"][0]["order"], 1);
        assert_eq!(response["data"]["views"]["bench"]["rows"], json!([]));
    }

    #[test]
    fn malformed_request_yields_invalid_json_code() {
        let mut store = open_empty();

        let response = parse(&add_player_json("{not json", &mut store));

        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "INVALID_JSON");
        assert!(store.roster().is_empty());
    }

    #[test]
    fn duplicate_add_yields_duplicate_name_code() {
        let mut store = open_empty();
        let request = json!({"name": "Alice"}).to_string();
        add_player_json(&request, &mut store);

        let response = parse(&add_player_json(&request, &mut store));

        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "DUPLICATE_NAME");
        assert_eq!(store.roster().len(), 1);
    }

    #[test]
    fn set_position_accepts_wire_labels() {
        let mut store = open_empty();
        let added = parse(&add_player_json(&json!({"name": "Alice"}).to_string(), &mut store));
        let id = added["data"]["player"]["id"].as_str().unwrap().to_string();

        let request = json!({"player_id": id, "position": "Bench"}).to_string();
        let response = parse(&set_position_json(&request, &mut store));

        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["views"]["bench"]["rows"][0]["name"], "Alice");
        assert_eq!(response["data"]["views"]["field"]["labels"], json!([]));

        // Empty label clears the assignment.
        let request = json!({"player_id": id, "position": ""}).to_string();
        let response = parse(&set_position_json(&request, &mut store));
        assert_eq!(response["data"]["views"]["bench"]["rows"], json!([]));
    }

    #[test]
    fn reorder_applies_full_id_ordering() {
        let mut store = open_empty();
        let mut ids = Vec::new();
        for name in ["Alice", "Bob", "Carol"] {
            let added = parse(&add_player_json(&json!({"name": name}).to_string(), &mut store));
            ids.push(added["data"]["player"]["id"].as_str().unwrap().to_string());
        }

        ids.rotate_left(1); // Bob, Carol, Alice
        let request = json!({"ids": ids}).to_string();
        let response = parse(&reorder_json(&request, &mut store));

        let rows = response["data"]["views"]["roster"]["rows"].as_array().unwrap();
        let names: Vec<_> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Bob", "Carol", "Alice"]);
    }

    #[test]
    fn get_views_reflects_current_state_without_mutating() {
        let mut store = open_empty();
        add_player_json(&json!({"name": "Alice"}).to_string(), &mut store);

        let before = store.roster().clone();
        let response = parse(&get_views_json(&store));

        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["views"]["roster"]["rows"][0]["name"], "Alice");
        assert_eq!(store.roster(), &before);
    }
}
