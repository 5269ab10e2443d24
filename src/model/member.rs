use serde::{Deserialize, Serialize};

/// The value object every binding demonstration binds onto
///
/// Carries no invariants; it only exists so the query, form, and JSON
/// endpoints have a two-field shape to bind and echo.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, utoipa::ToSchema, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemberDto {
    /// Display name of the member
    pub username: String,
    /// Age of the member in years
    pub age: i32,
}
