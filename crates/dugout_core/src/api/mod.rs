//! JSON command API for embedding hosts.

pub mod roster_json;

pub use roster_json::{
    add_player_json, get_views_json, remove_player_json, rename_player_json, reorder_json,
    set_notes_json, set_position_json, AddPlayerRequest, AddPlayerResponse, ApiError, ApiResponse,
    RemovePlayerRequest, RenamePlayerRequest, ReorderRequest, SetNotesRequest, SetPositionRequest,
    ViewsResponse, API_VERSION,
};
