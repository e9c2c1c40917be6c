use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Customer as sent and received by the API. `id` is ignored on create and
/// taken from the path on update.
#[derive(ToSchema)]
pub struct CustomerDoc {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::create,
        crate::routes::customers::update,
        crate::routes::customers::delete,
    ),
    components(schemas(HealthResponse, CustomerDoc)),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;
