use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::accounts::application::domain::entities::{Profile, Role};
use crate::accounts::application::ports::outgoing::{
    ProfileChanges, ProfileRepository, ProfileRepositoryError,
};

#[derive(Debug, Error)]
pub enum UpdateProfileError {
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("Teachers must have a subject specialization")]
    TeacherNeedsSubject,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        account_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, UpdateProfileError>;
}

pub struct UpdateProfileUseCase<P>
where
    P: ProfileRepository + Send + Sync,
{
    profiles: P,
}

impl<P> UpdateProfileUseCase<P>
where
    P: ProfileRepository + Send + Sync,
{
    pub fn new(profiles: P) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl<P> IUpdateProfileUseCase for UpdateProfileUseCase<P>
where
    P: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        account_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, UpdateProfileError> {
        let current = self
            .profiles
            .find_by_account_id(account_id)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::ProfileNotFound)?;

        // Validation-time invariant: a teacher may never end up without a
        // subject. Checked against the resulting state, not the patch.
        let resulting_subject = match &changes.subject {
            Some(subject) => *subject,
            None => current.subject,
        };
        if current.role == Role::Teacher && resulting_subject.is_none() {
            return Err(UpdateProfileError::TeacherNeedsSubject);
        }

        self.profiles
            .apply_changes(account_id, changes)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::ProfileNotFound => UpdateProfileError::ProfileNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::application::domain::entities::Subject;
    use chrono::Utc;

    struct MockProfiles {
        current: Profile,
    }

    #[async_trait]
    impl ProfileRepository for MockProfiles {
        async fn find_by_account_id(
            &self,
            _: Uuid,
        ) -> Result<Option<Profile>, ProfileRepositoryError> {
            Ok(Some(self.current.clone()))
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
            changes: ProfileChanges,
        ) -> Result<Profile, ProfileRepositoryError> {
            let mut updated = self.current.clone();
            if let Some(subject) = changes.subject {
                updated.subject = subject;
            }
            if let Some(bio) = changes.bio {
                updated.bio = bio;
            }
            if let Some(phone) = changes.phone_number {
                updated.phone_number = phone;
            }
            if let Some(location) = changes.location {
                updated.location = location;
            }
            if let Some(picture) = changes.picture_path {
                updated.picture_path = picture;
            }
            Ok(updated)
        }

        async fn set_role(
            &self,
            _: Uuid,
            _: Role,
            _: bool,
        ) -> Result<Profile, ProfileRepositoryError> {
            unimplemented!()
        }

        async fn set_verified(&self, _: Uuid, _: bool) -> Result<Profile, ProfileRepositoryError> {
            unimplemented!()
        }
    }

    fn profile(role: Role, subject: Option<Subject>) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            role,
            subject,
            bio: None,
            phone_number: None,
            location: None,
            picture_path: None,
            is_verified: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn student_can_update_without_subject() {
        let uc = UpdateProfileUseCase::new(MockProfiles {
            current: profile(Role::Student, None),
        });

        let changes = ProfileChanges {
            bio: Some(Some("hello".to_string())),
            ..Default::default()
        };
        let updated = uc.execute(Uuid::new_v4(), changes).await.unwrap();
        assert_eq!(updated.bio.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn teacher_cannot_clear_subject() {
        let uc = UpdateProfileUseCase::new(MockProfiles {
            current: profile(Role::Teacher, Some(Subject::Mathematics)),
        });

        let changes = ProfileChanges {
            subject: Some(None),
            ..Default::default()
        };
        let result = uc.execute(Uuid::new_v4(), changes).await;
        assert!(matches!(result, Err(UpdateProfileError::TeacherNeedsSubject)));
    }

    #[tokio::test]
    async fn teacher_without_subject_must_supply_one() {
        let uc = UpdateProfileUseCase::new(MockProfiles {
            current: profile(Role::Teacher, None),
        });

        // Patch that does not touch subject is still invalid
        let result = uc
            .execute(
                Uuid::new_v4(),
                ProfileChanges {
                    bio: Some(Some("bio".to_string())),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(UpdateProfileError::TeacherNeedsSubject)));

        // Supplying a subject in the same patch passes
        let updated = uc
            .execute(
                Uuid::new_v4(),
                ProfileChanges {
                    subject: Some(Some(Subject::Sciences)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.subject, Some(Subject::Sciences));
    }
}
