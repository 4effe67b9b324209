use std::collections::HashMap;
use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::accounts::application::domain::entities::{Profile, Role};
use crate::accounts::application::ports::outgoing::profile_repository::ProfileChanges;
use crate::accounts::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};
use crate::accounts::application::use_cases::fetch_profile::{
    FetchProfileError, IFetchProfileUseCase, ProfileView,
};
use crate::accounts::application::use_cases::login_account::{
    ILoginAccountUseCase, LoginAccountError, LoginAccountOutput,
};
use crate::accounts::application::use_cases::moderate_profile::{
    ISetRoleUseCase, IVerifyTeacherUseCase, ModerateProfileError,
};
use crate::accounts::application::use_cases::register_account::{
    IRegisterAccountUseCase, RegisterAccountError, RegisterAccountInput, RegisterAccountOutput,
};
use crate::accounts::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileError,
};
use crate::ads::application::domain::entities::{Ad, AdPosition};
use crate::ads::application::ports::outgoing::ad_repository::AdChanges;
use crate::ads::application::use_cases::manage_ads::{
    CreateAdInput, ICreateAdUseCase, IDeleteAdUseCase, IListAdsUseCase, IUpdateAdUseCase,
    ManageAdsError,
};
use crate::ads::application::use_cases::select_active_ads::{
    ISelectActiveAdsUseCase, SelectActiveAdsError,
};
use crate::content::application::domain::entities::ContentItem;
use crate::content::application::use_cases::delete_content::{
    DeleteContentError, IDeleteContentUseCase,
};
use crate::content::application::use_cases::download_content::{
    DownloadContentError, IDownloadContentUseCase,
};
use crate::content::application::use_cases::list_content::{IListContentUseCase, ListContentError};
use crate::content::application::use_cases::search_content::{
    ISearchContentUseCase, SearchContentError,
};
use crate::content::application::use_cases::set_cover_image::{
    ISetCoverImageUseCase, SetCoverImageError, SetCoverImageInput,
};
use crate::content::application::use_cases::upload_content::{
    IUploadContentUseCase, UploadContentError, UploadContentInput,
};
use crate::content::application::use_cases::view_content::{
    IViewContentUseCase, ViewContentError,
};

#[derive(Default, Clone)]
pub struct StubRegisterAccountUseCase;

#[async_trait]
impl IRegisterAccountUseCase for StubRegisterAccountUseCase {
    async fn execute(
        &self,
        _input: RegisterAccountInput,
    ) -> Result<RegisterAccountOutput, RegisterAccountError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginAccountUseCase;

#[async_trait]
impl ILoginAccountUseCase for StubLoginAccountUseCase {
    async fn execute(
        &self,
        _username: String,
        _password: String,
    ) -> Result<LoginAccountOutput, LoginAccountError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _account_id: Uuid) -> Result<ProfileView, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _account_id: Uuid,
        _changes: ProfileChanges,
    ) -> Result<Profile, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSetRoleUseCase;

#[async_trait]
impl ISetRoleUseCase for StubSetRoleUseCase {
    async fn execute(
        &self,
        _caller_id: Uuid,
        _target_id: Uuid,
        _role: Role,
    ) -> Result<Profile, ModerateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyTeacherUseCase;

#[async_trait]
impl IVerifyTeacherUseCase for StubVerifyTeacherUseCase {
    async fn execute(
        &self,
        _caller_id: Uuid,
        _target_id: Uuid,
    ) -> Result<Profile, ModerateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUploadContentUseCase;

#[async_trait]
impl IUploadContentUseCase for StubUploadContentUseCase {
    async fn execute(&self, _input: UploadContentInput) -> Result<ContentItem, UploadContentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSetCoverImageUseCase;

#[async_trait]
impl ISetCoverImageUseCase for StubSetCoverImageUseCase {
    async fn execute(
        &self,
        _input: SetCoverImageInput,
    ) -> Result<ContentItem, SetCoverImageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListContentUseCase;

#[async_trait]
impl IListContentUseCase for StubListContentUseCase {
    async fn execute(&self) -> Result<Vec<ContentItem>, ListContentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSearchContentUseCase;

#[async_trait]
impl ISearchContentUseCase for StubSearchContentUseCase {
    async fn execute(&self, _term: &str) -> Result<Vec<ContentItem>, SearchContentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubViewContentUseCase;

#[async_trait]
impl IViewContentUseCase for StubViewContentUseCase {
    async fn execute(&self, _slug: &str) -> Result<ContentItem, ViewContentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDownloadContentUseCase;

#[async_trait]
impl IDownloadContentUseCase for StubDownloadContentUseCase {
    async fn execute(&self, _slug: &str) -> Result<ContentItem, DownloadContentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteContentUseCase;

#[async_trait]
impl IDeleteContentUseCase for StubDeleteContentUseCase {
    async fn execute(&self, _caller_id: Uuid, _content_id: Uuid) -> Result<(), DeleteContentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSelectActiveAdsUseCase;

#[async_trait]
impl ISelectActiveAdsUseCase for StubSelectActiveAdsUseCase {
    async fn execute(&self) -> Result<HashMap<AdPosition, Ad>, SelectActiveAdsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateAdUseCase;

#[async_trait]
impl ICreateAdUseCase for StubCreateAdUseCase {
    async fn execute(&self, _caller_id: Uuid, _input: CreateAdInput) -> Result<Ad, ManageAdsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateAdUseCase;

#[async_trait]
impl IUpdateAdUseCase for StubUpdateAdUseCase {
    async fn execute(
        &self,
        _caller_id: Uuid,
        _ad_id: Uuid,
        _changes: AdChanges,
    ) -> Result<Ad, ManageAdsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteAdUseCase;

#[async_trait]
impl IDeleteAdUseCase for StubDeleteAdUseCase {
    async fn execute(&self, _caller_id: Uuid, _ad_id: Uuid) -> Result<(), ManageAdsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListAdsUseCase;

#[async_trait]
impl IListAdsUseCase for StubListAdsUseCase {
    async fn execute(&self, _caller_id: Uuid) -> Result<Vec<Ad>, ManageAdsError> {
        unimplemented!("Not used in this test")
    }
}

/// Accepts any bearer token and resolves it to a fixed account id, so
/// handler tests can exercise authenticated routes without real JWTs.
#[derive(Clone)]
pub struct StubTokenProvider {
    account_id: Uuid,
}

impl StubTokenProvider {
    pub fn accepting(account_id: Uuid) -> Self {
        Self { account_id }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _account_id: Uuid) -> Result<String, TokenError> {
        Ok("stub-access-token".to_string())
    }

    fn generate_refresh_token(&self, _account_id: Uuid) -> Result<String, TokenError> {
        Ok("stub-refresh-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: self.account_id,
            exp: now + 900,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        })
    }

    fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, TokenError> {
        Ok("stub-access-token".to_string())
    }
}

pub fn token_provider_data(account_id: Uuid) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(StubTokenProvider::accepting(account_id));
    web::Data::new(provider)
}
