use salvo::prelude::*;

use crate::data_uri::strip_image_prefix;
use crate::types::{GeneratedImage, ImageEditRequest, ImageGenerationRequest};

use super::helpers::{get_state, parse_body, require_non_empty, run_with_timeout};

/// POST /v1/images/generations - Render an infographic from a prompt
#[handler]
pub async fn images_generations(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = get_state(depot)?;

    let Ok(request) = parse_body::<ImageGenerationRequest>(req, res).await else {
        return Ok(());
    };
    if require_non_empty(res, "prompt", &request.prompt).is_err() {
        return Ok(());
    }

    let Ok(data) = run_with_timeout(
        res,
        state.request_timeout,
        state.engine.generate_image(&request.prompt, request.aspect_ratio),
    )
    .await
    else {
        return Ok(());
    };

    let image = GeneratedImage::new(data, request.prompt).with_tags(
        request.level,
        request.style,
        request.language,
    );
    res.render(Json(image));
    Ok(())
}

/// POST /v1/images/edits - Free-form edit of an existing image
#[handler]
pub async fn images_edits(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = get_state(depot)?;

    let Ok(request) = parse_edit_request(req, res).await else {
        return Ok(());
    };

    let Ok(data) = run_with_timeout(
        res,
        state.request_timeout,
        state.engine.edit_image(&request.image, &request.instruction),
    )
    .await
    else {
        return Ok(());
    };

    res.render(Json(GeneratedImage::new(data, request.instruction)));
    Ok(())
}

/// POST /v1/images/fixes - "Simplify and fix" correction of an existing image
#[handler]
pub async fn images_fixes(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = get_state(depot)?;

    let Ok(request) = parse_edit_request(req, res).await else {
        return Ok(());
    };

    let Ok(data) = run_with_timeout(
        res,
        state.request_timeout,
        state.engine.fix_image(&request.image, &request.instruction),
    )
    .await
    else {
        return Ok(());
    };

    res.render(Json(GeneratedImage::new(data, request.instruction)));
    Ok(())
}

async fn parse_edit_request(
    req: &mut Request,
    res: &mut Response,
) -> Result<ImageEditRequest, super::helpers::Rendered> {
    let request = parse_body::<ImageEditRequest>(req, res).await?;
    require_non_empty(res, "image", strip_image_prefix(&request.image))?;
    require_non_empty(res, "instruction", &request.instruction)?;
    Ok(request)
}
