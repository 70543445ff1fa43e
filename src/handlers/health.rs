use salvo::prelude::*;

use super::helpers::get_state;

/// GET /health - Health check
#[handler]
pub async fn health(res: &mut Response) {
    res.render(Json(serde_json::json!({
        "status": "healthy",
        "service": "infographic-api"
    })));
}

/// GET /v1/models - Provider models used for each step
#[handler]
pub async fn list_models(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = get_state(depot)?;
    let models = state.engine.models();

    let data: Vec<_> = [
        (&models.text, "research"),
        (&models.image, "generation"),
        (&models.edit, "edit"),
    ]
    .into_iter()
    .map(|(id, purpose)| {
        serde_json::json!({
            "id": id, "object": "model", "owned_by": "google", "purpose": purpose
        })
    })
    .collect();

    res.render(Json(serde_json::json!({
        "object": "list",
        "data": data
    })));
    Ok(())
}
