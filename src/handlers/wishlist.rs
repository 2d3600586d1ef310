//! # Wishlist Handler
//!
//! The one authenticated business action: add a product to the caller's
//! wishlist. Requires the auth middleware upstream; the user id comes from
//! the verified token claims, never from the body.

use crate::{
    auth::Claims,
    database::{repository::WishlistRepository, DbPool},
    dto::{WishlistRequest, WishlistResponse},
    error::AppError,
};
use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use tracing::{error, info, instrument};

/// Add a product to the authenticated user's wishlist.
///
/// No duplicate guard and no product-catalog existence check: repeated adds
/// insert repeated rows until the intended semantics are settled.
#[instrument(skip(pool, claims), fields(user_id = claims.user_id))]
pub async fn add_wishlist_item(
    State(pool): State<DbPool>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<WishlistRequest>,
) -> Result<(StatusCode, Json<WishlistResponse>), AppError> {
    info!(
        "[WISHLIST] Add request - user: {}, product: {}",
        claims.user_id, req.product_id
    );

    WishlistRepository::add(&pool, claims.user_id, req.product_id)
        .await
        .map_err(|e| {
            error!("[WISHLIST] Failed to add item: {}", e);
            AppError::from(e)
        })?;

    info!("[WISHLIST] Item added - user: {}", claims.user_id);

    Ok((
        StatusCode::CREATED,
        Json(WishlistResponse {
            message: "Item added to wishlist".to_string(),
        }),
    ))
}
