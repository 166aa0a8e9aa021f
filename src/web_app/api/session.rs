// web_app/api/session.rs - Who is making this request?
//
// Account pages (orders, wishlist, profile) act on the signed-in user.
// The user is identified by a `sessionid` cookie holding a token from
// store.sessions. Embedders and tests can short-circuit the lookup by
// providing a `SessionUser` in the Leptos context.

use leptos::prelude::*;
use sqlx::PgPool;
use uuid::Uuid;

use super::error::StoreError;

pub const SESSION_COOKIE: &str = "sessionid";

/// Id of the signed-in user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionUser(pub i32);

/// Parse a session cookie value; anything that is not a UUID is ignored
pub fn parse_token(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Look up a live session token
pub async fn find_session_user(pool: &PgPool, token: Uuid) -> Result<Option<SessionUser>, sqlx::Error> {
    let row: Option<(i32,)> = sqlx::query_as(
        r#"
        SELECT user_id
        FROM store.sessions
        WHERE token = $1 AND expires_at > NOW()
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(id,)| SessionUser(id)))
}

/// Create a session for `user_id` valid for `ttl`
pub async fn create_session(pool: &PgPool, user_id: i32, ttl: chrono::Duration) -> Result<Uuid, sqlx::Error> {
    let token = Uuid::new_v4();
    let expires_at = chrono::Utc::now().naive_utc() + ttl;

    sqlx::query("INSERT INTO store.sessions (token, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .execute(pool)
        .await?;

    Ok(token)
}

/// Resolve the current user, failing with `NotAuthenticated` when anonymous
pub async fn require_user(pool: &PgPool) -> Result<SessionUser, StoreError> {
    if let Some(user) = use_context::<SessionUser>() {
        return Ok(user);
    }

    let req: actix_web::HttpRequest = match leptos_actix::extract().await {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!("Failed to extract HttpRequest: {}", e);
            return Err(StoreError::NotAuthenticated);
        }
    };

    let Some(token) = req.cookie(SESSION_COOKIE).and_then(|c| parse_token(c.value())) else {
        return Err(StoreError::NotAuthenticated);
    };

    match find_session_user(pool, token).await? {
        Some(user) => Ok(user),
        None => {
            tracing::debug!("Session token unknown or expired");
            Err(StoreError::NotAuthenticated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token() {
        let token = Uuid::new_v4();
        assert_eq!(parse_token(&token.to_string()), Some(token));
        assert_eq!(parse_token(&format!(" {} ", token)), Some(token));
        assert_eq!(parse_token("not-a-token"), None);
        assert_eq!(parse_token(""), None);
    }
}
