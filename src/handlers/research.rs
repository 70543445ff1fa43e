use salvo::prelude::*;

use crate::data_uri::strip_image_prefix;
use crate::types::{
    GeneratedImage, GenerationRequest, InfographicRequest, InfographicResponse, VerifyRequest,
};

use super::helpers::{get_state, parse_body, require_non_empty, run_with_timeout};

/// POST /v1/research - Search-grounded research for a topic
#[handler]
pub async fn research(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = get_state(depot)?;

    let Ok(request) = parse_body::<GenerationRequest>(req, res).await else {
        return Ok(());
    };
    if require_non_empty(res, "topic", &request.topic).is_err() {
        return Ok(());
    }

    let Ok(result) =
        run_with_timeout(res, state.request_timeout, state.engine.research(&request)).await
    else {
        return Ok(());
    };

    res.render(Json(result));
    Ok(())
}

/// POST /v1/verify - Accuracy check of a rendered infographic
#[handler]
pub async fn verify(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = get_state(depot)?;

    let Ok(request) = parse_body::<VerifyRequest>(req, res).await else {
        return Ok(());
    };
    if require_non_empty(res, "image", strip_image_prefix(&request.image)).is_err()
        || require_non_empty(res, "topic", &request.topic).is_err()
    {
        return Ok(());
    }

    let verdict = state
        .engine
        .verify(&request.image, &request.generation_request())
        .await;
    res.render(Json(verdict));
    Ok(())
}

/// POST /v1/infographics - Research, render and verify in one call
///
/// Steps run strictly in order; the first failure ends the request.
#[handler]
pub async fn create_infographic(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = get_state(depot)?;

    let Ok(InfographicRequest {
        request,
        aspect_ratio,
    }) = parse_body::<InfographicRequest>(req, res).await
    else {
        return Ok(());
    };
    if require_non_empty(res, "topic", &request.topic).is_err() {
        return Ok(());
    }

    let Ok(findings) =
        run_with_timeout(res, state.request_timeout, state.engine.research(&request)).await
    else {
        return Ok(());
    };

    let Ok(data) = run_with_timeout(
        res,
        state.request_timeout,
        state.engine.generate_image(&findings.image_prompt, aspect_ratio),
    )
    .await
    else {
        return Ok(());
    };

    let image = GeneratedImage::new(data, findings.image_prompt.clone()).with_tags(
        Some(request.level),
        Some(request.style),
        Some(request.language),
    );
    let verification = state.engine.verify(&image.data, &request).await;
    tracing::info!("Created infographic {} for {:?}", image.id, request.topic);

    res.render(Json(InfographicResponse {
        research: findings,
        verification,
        image,
    }));
    Ok(())
}
