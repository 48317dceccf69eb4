use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/teachers`.
///
/// The UI always supplies its own `id`; when it is missing the backend
/// generates one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeacher {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}
