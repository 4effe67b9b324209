use std::sync::Arc;

use actix_web::web;

use crate::accounts::application::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::accounts::application::use_cases::login_account::ILoginAccountUseCase;
use crate::accounts::application::use_cases::moderate_profile::{
    ISetRoleUseCase, IVerifyTeacherUseCase,
};
use crate::accounts::application::use_cases::register_account::IRegisterAccountUseCase;
use crate::accounts::application::use_cases::update_profile::IUpdateProfileUseCase;
use crate::ads::application::use_cases::manage_ads::{
    ICreateAdUseCase, IDeleteAdUseCase, IListAdsUseCase, IUpdateAdUseCase,
};
use crate::ads::application::use_cases::select_active_ads::ISelectActiveAdsUseCase;
use crate::content::application::use_cases::delete_content::IDeleteContentUseCase;
use crate::content::application::use_cases::download_content::IDownloadContentUseCase;
use crate::content::application::use_cases::list_content::IListContentUseCase;
use crate::content::application::use_cases::search_content::ISearchContentUseCase;
use crate::content::application::use_cases::set_cover_image::ISetCoverImageUseCase;
use crate::content::application::use_cases::upload_content::IUploadContentUseCase;
use crate::content::application::use_cases::view_content::IViewContentUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a panicking stub unless a
/// test swaps in its own double for the slot under test.
pub struct TestAppStateBuilder {
    register_account: Option<Arc<dyn IRegisterAccountUseCase + Send + Sync>>,
    login_account: Option<Arc<dyn ILoginAccountUseCase + Send + Sync>>,
    fetch_profile: Option<Arc<dyn IFetchProfileUseCase + Send + Sync>>,
    update_profile: Option<Arc<dyn IUpdateProfileUseCase + Send + Sync>>,
    set_role: Option<Arc<dyn ISetRoleUseCase + Send + Sync>>,
    verify_teacher: Option<Arc<dyn IVerifyTeacherUseCase + Send + Sync>>,
    upload_content: Option<Arc<dyn IUploadContentUseCase + Send + Sync>>,
    set_cover: Option<Arc<dyn ISetCoverImageUseCase + Send + Sync>>,
    list_content: Option<Arc<dyn IListContentUseCase + Send + Sync>>,
    search_content: Option<Arc<dyn ISearchContentUseCase + Send + Sync>>,
    view_content: Option<Arc<dyn IViewContentUseCase + Send + Sync>>,
    download_content: Option<Arc<dyn IDownloadContentUseCase + Send + Sync>>,
    delete_content: Option<Arc<dyn IDeleteContentUseCase + Send + Sync>>,
    select_ads: Option<Arc<dyn ISelectActiveAdsUseCase + Send + Sync>>,
    create_ad: Option<Arc<dyn ICreateAdUseCase + Send + Sync>>,
    update_ad: Option<Arc<dyn IUpdateAdUseCase + Send + Sync>>,
    delete_ad: Option<Arc<dyn IDeleteAdUseCase + Send + Sync>>,
    list_ads: Option<Arc<dyn IListAdsUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_account: Some(Arc::new(StubRegisterAccountUseCase)),
            login_account: Some(Arc::new(StubLoginAccountUseCase)),
            fetch_profile: Some(Arc::new(StubFetchProfileUseCase)),
            update_profile: Some(Arc::new(StubUpdateProfileUseCase)),
            set_role: Some(Arc::new(StubSetRoleUseCase)),
            verify_teacher: Some(Arc::new(StubVerifyTeacherUseCase)),
            upload_content: Some(Arc::new(StubUploadContentUseCase)),
            set_cover: Some(Arc::new(StubSetCoverImageUseCase)),
            list_content: Some(Arc::new(StubListContentUseCase)),
            search_content: Some(Arc::new(StubSearchContentUseCase)),
            view_content: Some(Arc::new(StubViewContentUseCase)),
            download_content: Some(Arc::new(StubDownloadContentUseCase)),
            delete_content: Some(Arc::new(StubDeleteContentUseCase)),
            select_ads: Some(Arc::new(StubSelectActiveAdsUseCase)),
            create_ad: Some(Arc::new(StubCreateAdUseCase)),
            update_ad: Some(Arc::new(StubUpdateAdUseCase)),
            delete_ad: Some(Arc::new(StubDeleteAdUseCase)),
            list_ads: Some(Arc::new(StubListAdsUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_account(
        mut self,
        uc: impl IRegisterAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_account = Some(Arc::new(uc));
        self
    }

    pub fn with_login_account(
        mut self,
        uc: impl ILoginAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.login_account = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl IFetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl IUpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_set_role(mut self, uc: impl ISetRoleUseCase + Send + Sync + 'static) -> Self {
        self.set_role = Some(Arc::new(uc));
        self
    }

    pub fn with_verify_teacher(
        mut self,
        uc: impl IVerifyTeacherUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verify_teacher = Some(Arc::new(uc));
        self
    }

    pub fn with_upload_content(
        mut self,
        uc: impl IUploadContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.upload_content = Some(Arc::new(uc));
        self
    }

    pub fn with_set_cover(
        mut self,
        uc: impl ISetCoverImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.set_cover = Some(Arc::new(uc));
        self
    }

    pub fn with_list_content(
        mut self,
        uc: impl IListContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_content = Some(Arc::new(uc));
        self
    }

    pub fn with_search_content(
        mut self,
        uc: impl ISearchContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.search_content = Some(Arc::new(uc));
        self
    }

    pub fn with_view_content(
        mut self,
        uc: impl IViewContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.view_content = Some(Arc::new(uc));
        self
    }

    pub fn with_download_content(
        mut self,
        uc: impl IDownloadContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.download_content = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_content(
        mut self,
        uc: impl IDeleteContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_content = Some(Arc::new(uc));
        self
    }

    pub fn with_select_ads(
        mut self,
        uc: impl ISelectActiveAdsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.select_ads = Some(Arc::new(uc));
        self
    }

    pub fn with_create_ad(mut self, uc: impl ICreateAdUseCase + Send + Sync + 'static) -> Self {
        self.create_ad = Some(Arc::new(uc));
        self
    }

    pub fn with_update_ad(mut self, uc: impl IUpdateAdUseCase + Send + Sync + 'static) -> Self {
        self.update_ad = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_ad(mut self, uc: impl IDeleteAdUseCase + Send + Sync + 'static) -> Self {
        self.delete_ad = Some(Arc::new(uc));
        self
    }

    pub fn with_list_ads(mut self, uc: impl IListAdsUseCase + Send + Sync + 'static) -> Self {
        self.list_ads = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_account: self.register_account.unwrap(),
            login_account: self.login_account.unwrap(),
            fetch_profile: self.fetch_profile.unwrap(),
            update_profile: self.update_profile.unwrap(),
            set_role: self.set_role.unwrap(),
            verify_teacher: self.verify_teacher.unwrap(),
            upload_content: self.upload_content.unwrap(),
            set_cover: self.set_cover.unwrap(),
            list_content: self.list_content.unwrap(),
            search_content: self.search_content.unwrap(),
            view_content: self.view_content.unwrap(),
            download_content: self.download_content.unwrap(),
            delete_content: self.delete_content.unwrap(),
            select_ads: self.select_ads.unwrap(),
            create_ad: self.create_ad.unwrap(),
            update_ad: self.update_ad.unwrap(),
            delete_ad: self.delete_ad.unwrap(),
            list_ads: self.list_ads.unwrap(),
        })
    }
}
