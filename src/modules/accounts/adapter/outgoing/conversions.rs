use sea_orm::DbErr;

use crate::accounts::application::domain::entities::{Account, Profile, Role, Subject};

use super::sea_orm_entity::{accounts, profiles};

/// Postgres reports unique violations as 23505; SeaORM surfaces them as
/// stringly errors, so match the usual spellings.
pub fn is_unique_violation(e: &DbErr) -> bool {
    let err_str = e.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

pub fn account_model_to_domain(model: accounts::Model) -> Result<Account, String> {
    Ok(Account {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        first_name: model.first_name,
        last_name: model.last_name,
        is_staff: model.is_staff,
        is_active: model.is_active,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

pub fn profile_model_to_domain(model: profiles::Model) -> Result<Profile, String> {
    let role = Role::parse(&model.role)
        .ok_or_else(|| format!("Unknown role '{}' on profile {}", model.role, model.id))?;

    let subject = match model.subject {
        Some(ref raw) => Some(
            Subject::parse(raw)
                .ok_or_else(|| format!("Unknown subject '{}' on profile {}", raw, model.id))?,
        ),
        None => None,
    };

    Ok(Profile {
        id: model.id,
        account_id: model.account_id,
        role,
        subject,
        bio: model.bio,
        phone_number: model.phone_number,
        location: model.location,
        picture_path: model.picture_path,
        is_verified: model.is_verified,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
