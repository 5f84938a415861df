//! Promotion Index Handler

use salvo::prelude::*;

use crate::{extensions::*, promotions::responses::PromotionResponse};

/// Promotion Index Handler
///
/// Returns every promotion in creation order.
#[endpoint(tags("promotions"), summary = "List Promotions")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<PromotionResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let promotions = state
        .app
        .promotions
        .list_promotions()
        .await
        .or_500("failed to list promotions")?;

    Ok(Json(promotions.into_iter().map(Into::into).collect()))
}
