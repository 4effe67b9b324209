use async_trait::async_trait;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::accounts::application::domain::entities::{Profile, Role};
use crate::accounts::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};

/// Operator-only profile mutations: role changes and teacher
/// verification. The caller's own profile gates access; the target is
/// addressed by account id.
#[derive(Debug, Error)]
pub enum ModerateProfileError {
    #[error("Only operators may perform this action")]
    AdminOnly,
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("Only teachers can be verified")]
    NotATeacher,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISetRoleUseCase: Send + Sync {
    async fn execute(
        &self,
        caller_id: Uuid,
        target_id: Uuid,
        role: Role,
    ) -> Result<Profile, ModerateProfileError>;
}

#[async_trait]
pub trait IVerifyTeacherUseCase: Send + Sync {
    async fn execute(
        &self,
        caller_id: Uuid,
        target_id: Uuid,
    ) -> Result<Profile, ModerateProfileError>;
}

pub struct ModerateProfileUseCase<P>
where
    P: ProfileRepository + Send + Sync,
{
    profiles: P,
}

impl<P> ModerateProfileUseCase<P>
where
    P: ProfileRepository + Send + Sync,
{
    pub fn new(profiles: P) -> Self {
        Self { profiles }
    }

    async fn require_admin(&self, caller_id: Uuid) -> Result<(), ModerateProfileError> {
        let caller = self
            .profiles
            .find_by_account_id(caller_id)
            .await
            .map_err(|e| ModerateProfileError::RepositoryError(e.to_string()))?
            .ok_or(ModerateProfileError::AdminOnly)?;

        if !caller.is_admin() {
            return Err(ModerateProfileError::AdminOnly);
        }
        Ok(())
    }
}

fn map_repo_err(e: ProfileRepositoryError) -> ModerateProfileError {
    match e {
        ProfileRepositoryError::ProfileNotFound => ModerateProfileError::ProfileNotFound,
        other => ModerateProfileError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<P> ISetRoleUseCase for ModerateProfileUseCase<P>
where
    P: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller_id: Uuid,
        target_id: Uuid,
        role: Role,
    ) -> Result<Profile, ModerateProfileError> {
        self.require_admin(caller_id).await?;

        // Demotion to student drops any earlier teacher verification.
        let is_verified = match role {
            Role::Student => false,
            Role::Teacher | Role::Admin => {
                self.profiles
                    .find_by_account_id(target_id)
                    .await
                    .map_err(|e| ModerateProfileError::RepositoryError(e.to_string()))?
                    .ok_or(ModerateProfileError::ProfileNotFound)?
                    .is_verified
            }
        };

        let updated = self
            .profiles
            .set_role(target_id, role, is_verified)
            .await
            .map_err(map_repo_err)?;

        info!(
            target = %target_id,
            role = role.as_str(),
            "Profile role changed by operator"
        );
        Ok(updated)
    }
}

#[async_trait]
impl<P> IVerifyTeacherUseCase for ModerateProfileUseCase<P>
where
    P: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller_id: Uuid,
        target_id: Uuid,
    ) -> Result<Profile, ModerateProfileError> {
        self.require_admin(caller_id).await?;

        let target = self
            .profiles
            .find_by_account_id(target_id)
            .await
            .map_err(|e| ModerateProfileError::RepositoryError(e.to_string()))?
            .ok_or(ModerateProfileError::ProfileNotFound)?;

        if target.role != Role::Teacher {
            return Err(ModerateProfileError::NotATeacher);
        }

        let updated = self
            .profiles
            .set_verified(target_id, true)
            .await
            .map_err(map_repo_err)?;

        info!(target = %target_id, "Teacher verified by operator");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::application::ports::outgoing::ProfileChanges;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct InMemoryProfiles {
        rows: Mutex<HashMap<Uuid, Profile>>,
    }

    impl InMemoryProfiles {
        fn with(profiles: Vec<Profile>) -> Self {
            Self {
                rows: Mutex::new(
                    profiles
                        .into_iter()
                        .map(|p| (p.account_id, p))
                        .collect(),
                ),
            }
        }
    }

    #[async_trait]
    impl ProfileRepository for InMemoryProfiles {
        async fn find_by_account_id(
            &self,
            account_id: Uuid,
        ) -> Result<Option<Profile>, ProfileRepositoryError> {
            Ok(self.rows.lock().unwrap().get(&account_id).cloned())
        }

        async fn create_profile(
            &self,
            _: Uuid,
            _: Role,
        ) -> Result<Profile, ProfileRepositoryError> {
            unimplemented!()
        }

        async fn apply_changes(
            &self,
            _: Uuid,
            _: ProfileChanges,
        ) -> Result<Profile, ProfileRepositoryError> {
            unimplemented!()
        }

        async fn set_role(
            &self,
            account_id: Uuid,
            role: Role,
            is_verified: bool,
        ) -> Result<Profile, ProfileRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let profile = rows
                .get_mut(&account_id)
                .ok_or(ProfileRepositoryError::ProfileNotFound)?;
            profile.role = role;
            profile.is_verified = is_verified;
            Ok(profile.clone())
        }

        async fn set_verified(
            &self,
            account_id: Uuid,
            is_verified: bool,
        ) -> Result<Profile, ProfileRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let profile = rows
                .get_mut(&account_id)
                .ok_or(ProfileRepositoryError::ProfileNotFound)?;
            profile.is_verified = is_verified;
            Ok(profile.clone())
        }
    }

    fn profile(account_id: Uuid, role: Role, is_verified: bool) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            account_id,
            role,
            subject: None,
            bio: None,
            phone_number: None,
            location: None,
            picture_path: None,
            is_verified,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn admin_can_verify_teacher() {
        let admin_id = Uuid::new_v4();
        let teacher_id = Uuid::new_v4();
        let uc = ModerateProfileUseCase::new(InMemoryProfiles::with(vec![
            profile(admin_id, Role::Admin, false),
            profile(teacher_id, Role::Teacher, false),
        ]));

        let updated = IVerifyTeacherUseCase::execute(&uc, admin_id, teacher_id)
            .await
            .unwrap();
        assert!(updated.is_verified);
    }

    #[tokio::test]
    async fn student_cannot_be_verified() {
        let admin_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();
        let uc = ModerateProfileUseCase::new(InMemoryProfiles::with(vec![
            profile(admin_id, Role::Admin, false),
            profile(student_id, Role::Student, false),
        ]));

        let result = IVerifyTeacherUseCase::execute(&uc, admin_id, student_id).await;
        assert!(matches!(result, Err(ModerateProfileError::NotATeacher)));
    }

    #[tokio::test]
    async fn non_admin_caller_is_rejected() {
        let caller_id = Uuid::new_v4();
        let target_id = Uuid::new_v4();
        let uc = ModerateProfileUseCase::new(InMemoryProfiles::with(vec![
            profile(caller_id, Role::Teacher, true),
            profile(target_id, Role::Teacher, false),
        ]));

        let result = IVerifyTeacherUseCase::execute(&uc, caller_id, target_id).await;
        assert!(matches!(result, Err(ModerateProfileError::AdminOnly)));
    }

    #[tokio::test]
    async fn demoting_to_student_clears_verification() {
        let admin_id = Uuid::new_v4();
        let teacher_id = Uuid::new_v4();
        let uc = ModerateProfileUseCase::new(InMemoryProfiles::with(vec![
            profile(admin_id, Role::Admin, false),
            profile(teacher_id, Role::Teacher, true),
        ]));

        let updated = ISetRoleUseCase::execute(&uc, admin_id, teacher_id, Role::Student)
            .await
            .unwrap();
        assert_eq!(updated.role, Role::Student);
        assert!(!updated.is_verified);
    }

    #[tokio::test]
    async fn promoting_to_teacher_keeps_verification_flag() {
        let admin_id = Uuid::new_v4();
        let target_id = Uuid::new_v4();
        let uc = ModerateProfileUseCase::new(InMemoryProfiles::with(vec![
            profile(admin_id, Role::Admin, false),
            profile(target_id, Role::Student, false),
        ]));

        let updated = ISetRoleUseCase::execute(&uc, admin_id, target_id, Role::Teacher)
            .await
            .unwrap();
        assert_eq!(updated.role, Role::Teacher);
        assert!(!updated.is_verified, "promotion does not auto-verify");
    }
}
