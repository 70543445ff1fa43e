use salvo::cors::*;
use salvo::prelude::*;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .hoop(affix_state::inject(state))
        .hoop(
            Cors::new()
                .allow_origin(AllowOrigin::any())
                .allow_methods(AllowMethods::any())
                .allow_headers(AllowHeaders::any())
                .into_handler(),
        )
        // Health & Models
        .push(Router::with_path("health").get(handlers::health::health))
        .push(Router::with_path("v1/models").get(handlers::health::list_models))
        // Research & verification
        .push(Router::with_path("v1/research").post(handlers::research::research))
        .push(Router::with_path("v1/verify").post(handlers::research::verify))
        .push(Router::with_path("v1/infographics").post(handlers::research::create_infographic))
        // Images
        .push(Router::with_path("v1/images/generations").post(handlers::image::images_generations))
        .push(Router::with_path("v1/images/edits").post(handlers::image::images_edits))
        .push(Router::with_path("v1/images/fixes").post(handlers::image::images_fixes))
}
