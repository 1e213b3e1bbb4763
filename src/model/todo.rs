use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Payload for creating a todo.
///
/// `priority` is free-form; an empty value is replaced with `"medium"` when the todo is
/// created.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub description: String,
    /// One of `low`, `medium` or `high`.
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub priority: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial update payload.
///
/// A field that is present overwrites the stored value, including `false` and empty
/// strings. Absent fields are left untouched. `due_date` additionally distinguishes an
/// explicit `null`, which clears the deadline.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

/// Reads an explicit `null` as the type's default value.
fn deserialize_or_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + Default,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Wraps any value that is present in the payload, `null` included, in `Some`.
///
/// Paired with `#[serde(default)]` so a missing key stays `None`.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TodoResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
