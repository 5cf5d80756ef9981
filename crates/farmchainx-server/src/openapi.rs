use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FarmChainX API",
        version = "0.1.0",
        description = "Supply chain tracking for agricultural produce, from farm to consumer."
    ),
    paths(
        crate::routes::system::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::farmer::list_my_crops,
        crate::routes::farmer::create_crop,
        crate::routes::farmer::update_crop,
        crate::routes::farmer::delete_crop,
        crate::routes::farmer::list_all_crops,
        crate::routes::farmer::list_by_code,
        crate::routes::distributor::list_my_crops,
        crate::routes::distributor::create_crop,
        crate::routes::distributor::update_crop,
        crate::routes::distributor::delete_crop,
        crate::routes::distributor::list_all_crops,
        crate::routes::distributor::list_by_code,
        crate::routes::retailer::list_my_crops,
        crate::routes::retailer::create_crop,
        crate::routes::retailer::update_crop,
        crate::routes::retailer::delete_crop,
        crate::routes::purchases::create_purchase,
        crate::routes::purchases::list_purchases,
        crate::routes::purchases::list_my_purchases,
        crate::routes::purchases::list_by_payment_status,
        crate::routes::purchases::get_purchase,
        crate::routes::purchases::update_purchase,
        crate::routes::purchases::delete_purchase,
        crate::routes::crops::scan,
        crate::routes::crops::list_my_records,
        crate::routes::crops::create_crop,
        crate::routes::crops::update_record,
        crate::routes::crops::delete_record,
        crate::routes::admin::list_users,
        crate::routes::admin::delete_user,
        crate::routes::admin::stats,
    ),
    components(schemas(
        crate::dto::RegisterRequest,
        crate::dto::LoginRequest,
        crate::dto::AuthResponse,
        crate::dto::UserResponse,
        crate::dto::FarmerCropRequest,
        crate::dto::FarmerCropResponse,
        crate::dto::DistributorCropRequest,
        crate::dto::DistributorCropResponse,
        crate::dto::RetailerCropRequest,
        crate::dto::RetailerCropResponse,
        crate::dto::PurchaseRequest,
        crate::dto::PurchaseResponse,
        crate::dto::StatsResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "farmer", description = "Farmer crop records"),
        (name = "distributor", description = "Distributor lots"),
        (name = "retailer", description = "Retailer lots"),
        (name = "purchases", description = "Consumer purchases"),
        (name = "crops", description = "Role-dispatched crop facade and provenance lookups"),
        (name = "admin", description = "Account administration"),
        (name = "system", description = "Health and system status"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Adds Bearer token security scheme to the OpenAPI spec.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT issued by /auth/register or /auth/login."))
                        .build(),
                ),
            );
        }
    }
}
