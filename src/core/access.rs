//! Client-side role gating. This is cosmetic surface behavior, not
//! authorization: the store applies no checks of its own.

use crate::models::identity::Role;

/// Only admins and managers may add roster records.
pub fn can_add(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Manager)
}

/// Admins and managers may edit any row; viewers only rows whose Name
/// field contains their own display name.
pub fn can_edit(role: Role, record_name: &str, user_name: &str) -> bool {
    match role {
        Role::Admin | Role::Manager => true,
        Role::Viewer => record_name.contains(user_name),
    }
}

/// Only viewers get the editable forecast calendar; the other roles
/// see a placeholder.
pub fn can_edit_forecast(role: Role) -> bool {
    role == Role::Viewer
}
