pub mod modules;
pub use modules::accounts;
pub use modules::ads;
pub use modules::content;
pub mod api;
pub mod health;
pub mod shared;

use crate::accounts::application::use_cases::{
    fetch_profile::IFetchProfileUseCase,
    login_account::ILoginAccountUseCase,
    moderate_profile::{ISetRoleUseCase, IVerifyTeacherUseCase},
    register_account::IRegisterAccountUseCase,
    update_profile::IUpdateProfileUseCase,
};
use crate::ads::application::use_cases::{
    manage_ads::{ICreateAdUseCase, IDeleteAdUseCase, IListAdsUseCase, IUpdateAdUseCase},
    select_active_ads::ISelectActiveAdsUseCase,
};
use crate::content::application::use_cases::{
    delete_content::IDeleteContentUseCase, download_content::IDownloadContentUseCase,
    list_content::IListContentUseCase, search_content::ISearchContentUseCase,
    set_cover_image::ISetCoverImageUseCase, upload_content::IUploadContentUseCase,
    view_content::IViewContentUseCase,
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_account: Arc<dyn IRegisterAccountUseCase + Send + Sync>,
    pub login_account: Arc<dyn ILoginAccountUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub set_role: Arc<dyn ISetRoleUseCase + Send + Sync>,
    pub verify_teacher: Arc<dyn IVerifyTeacherUseCase + Send + Sync>,
    pub upload_content: Arc<dyn IUploadContentUseCase + Send + Sync>,
    pub set_cover: Arc<dyn ISetCoverImageUseCase + Send + Sync>,
    pub list_content: Arc<dyn IListContentUseCase + Send + Sync>,
    pub search_content: Arc<dyn ISearchContentUseCase + Send + Sync>,
    pub view_content: Arc<dyn IViewContentUseCase + Send + Sync>,
    pub download_content: Arc<dyn IDownloadContentUseCase + Send + Sync>,
    pub delete_content: Arc<dyn IDeleteContentUseCase + Send + Sync>,
    pub select_ads: Arc<dyn ISelectActiveAdsUseCase + Send + Sync>,
    pub create_ad: Arc<dyn ICreateAdUseCase + Send + Sync>,
    pub update_ad: Arc<dyn IUpdateAdUseCase + Send + Sync>,
    pub delete_ad: Arc<dyn IDeleteAdUseCase + Send + Sync>,
    pub list_ads: Arc<dyn IListAdsUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::accounts::adapter::outgoing::account_query_postgres::AccountQueryPostgres;
    use crate::accounts::adapter::outgoing::account_repository_postgres::AccountRepositoryPostgres;
    use crate::accounts::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::accounts::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
    use crate::accounts::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
    use crate::accounts::application::ports::outgoing::password_hasher::PasswordHasher;
    use crate::accounts::application::ports::outgoing::token_provider::TokenProvider;
    use crate::accounts::application::use_cases::fetch_profile::FetchProfileUseCase;
    use crate::accounts::application::use_cases::login_account::LoginAccountUseCase;
    use crate::accounts::application::use_cases::moderate_profile::ModerateProfileUseCase;
    use crate::accounts::application::use_cases::register_account::RegisterAccountUseCase;
    use crate::accounts::application::use_cases::update_profile::UpdateProfileUseCase;
    use crate::ads::adapter::outgoing::ad_query_postgres::AdQueryPostgres;
    use crate::ads::adapter::outgoing::ad_repository_postgres::AdRepositoryPostgres;
    use crate::ads::application::use_cases::manage_ads::ManageAdsUseCase;
    use crate::ads::application::use_cases::select_active_ads::SelectActiveAdsUseCase;
    use crate::api::openapi::ApiDoc;
    use crate::content::adapter::outgoing::content_query_postgres::ContentQueryPostgres;
    use crate::content::adapter::outgoing::content_repository_postgres::ContentRepositoryPostgres;
    use crate::content::adapter::outgoing::disk_file_store::DiskFileStore;
    use crate::content::application::use_cases::delete_content::DeleteContentUseCase;
    use crate::content::application::use_cases::download_content::DownloadContentUseCase;
    use crate::content::application::use_cases::list_content::ListContentUseCase;
    use crate::content::application::use_cases::search_content::SearchContentUseCase;
    use crate::content::application::use_cases::set_cover_image::SetCoverImageUseCase;
    use crate::content::application::use_cases::upload_content::UploadContentUseCase;
    use crate::content::application::use_cases::view_content::ViewContentUseCase;
    use crate::shared::api::json_config::custom_json_config;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let media_root = env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string());

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let account_query = AccountQueryPostgres::new(Arc::clone(&db_arc));
    let account_repo = AccountRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let content_query = ContentQueryPostgres::new(Arc::clone(&db_arc));
    let content_repo = ContentRepositoryPostgres::new(Arc::clone(&db_arc));
    let file_store = DiskFileStore::new(media_root);
    let ad_query = AdQueryPostgres::new(Arc::clone(&db_arc));
    let ad_repo = AdRepositoryPostgres::new(Arc::clone(&db_arc));

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let argon2_hasher = if std::env::var("RUST_ENV").as_deref() == Ok("production") {
        Argon2Hasher::from_env()
    } else {
        Argon2Hasher::fast_env()
    };
    let hasher_arc: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(argon2_hasher);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    // Account use cases
    let register_account = RegisterAccountUseCase::new(
        account_query.clone(),
        account_repo.clone(),
        Arc::clone(&hasher_arc),
        Arc::clone(&token_provider_arc),
    );
    let login_account = LoginAccountUseCase::new(
        account_query.clone(),
        Arc::clone(&hasher_arc),
        Arc::clone(&token_provider_arc),
    );
    let fetch_profile = FetchProfileUseCase::new(account_query.clone(), profile_repo.clone());
    let update_profile = UpdateProfileUseCase::new(profile_repo.clone());
    let moderate_profile = Arc::new(ModerateProfileUseCase::new(profile_repo.clone()));

    // Content use cases
    let upload_content = UploadContentUseCase::new(
        profile_repo.clone(),
        content_query.clone(),
        content_repo.clone(),
        file_store.clone(),
    );
    let set_cover = SetCoverImageUseCase::new(
        profile_repo.clone(),
        content_query.clone(),
        content_repo.clone(),
        file_store.clone(),
    );
    let list_content = ListContentUseCase::new(content_query.clone());
    let search_content = SearchContentUseCase::new(content_query.clone());
    let view_content = ViewContentUseCase::new(content_query.clone(), content_repo.clone());
    let download_content = DownloadContentUseCase::new(content_query.clone(), content_repo.clone());
    let delete_content = DeleteContentUseCase::new(
        profile_repo.clone(),
        content_query,
        content_repo,
        file_store,
    );

    // Ad use cases
    let select_ads = SelectActiveAdsUseCase::new(ad_query.clone());
    let manage_ads = Arc::new(ManageAdsUseCase::new(profile_repo, ad_query, ad_repo));

    let state = AppState {
        register_account: Arc::new(register_account),
        login_account: Arc::new(login_account),
        fetch_profile: Arc::new(fetch_profile),
        update_profile: Arc::new(update_profile),
        set_role: moderate_profile.clone(),
        verify_teacher: moderate_profile,
        upload_content: Arc::new(upload_content),
        set_cover: Arc::new(set_cover),
        list_content: Arc::new(list_content),
        search_content: Arc::new(search_content),
        view_content: Arc::new(view_content),
        download_content: Arc::new(download_content),
        delete_content: Arc::new(delete_content),
        select_ads: Arc::new(select_ads),
        create_ad: manage_ads.clone(),
        update_ad: manage_ads.clone(),
        delete_ad: manage_ads.clone(),
        list_ads: manage_ads,
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::accounts::adapter::incoming::web::routes::register_handler);
    cfg.service(crate::accounts::adapter::incoming::web::routes::login_handler);
    // Profile
    cfg.service(crate::accounts::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::accounts::adapter::incoming::web::routes::update_profile_handler);
    // Moderation
    cfg.service(crate::accounts::adapter::incoming::web::routes::set_role_handler);
    cfg.service(crate::accounts::adapter::incoming::web::routes::verify_teacher_handler);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::upload_youtube_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::upload_file_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::set_cover_image_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::list_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::search_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::view_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::download_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_content_handler);
    // Ads
    cfg.service(crate::ads::adapter::incoming::web::routes::active_ads_handler);
    cfg.service(crate::ads::adapter::incoming::web::routes::create_ad_handler);
    cfg.service(crate::ads::adapter::incoming::web::routes::update_ad_handler);
    cfg.service(crate::ads::adapter::incoming::web::routes::delete_ad_handler);
    cfg.service(crate::ads::adapter::incoming::web::routes::list_ads_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
