use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::waitlist::{Lang, Role, WaitlistPayload, WaitlistRequest},
    error::ErrorBody,
    routes::{health, waitlist},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        waitlist::join_waitlist
    ),
    components(
        schemas(
            health::HealthData,
            WaitlistRequest,
            WaitlistPayload,
            Role,
            Lang,
            ErrorBody
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Waitlist", description = "Waitlist signup endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
