mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use common::{login, send, test_app_with, test_config, EMAIL};
use employee_management_api::auth::{Claims, JwtService};

#[tokio::test]
async fn token_for_unknown_user_is_unauthorized() -> Result<()> {
    let config = test_config();
    let jwt = JwtService::from_config(&config.security, config.environment)?;
    let app = test_app_with(config)?;

    // Correctly signed, but nobody registered this address
    let token = jwt.generate_token("ghost@example.com", &["ROLE_USER".to_string()])?;

    let (status, body) = send(&app, Method::GET, "/api/auth/whoami", Some(&token), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errorCode"], "UNAUTHORIZED");
    assert_eq!(body["message"], "User not found");
    assert_eq!(body["details"], "uri=/api/auth/whoami");

    let (status, _) = send(&app, Method::GET, "/api/employees", Some(&token), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn expired_token_is_unauthorized() -> Result<()> {
    let config = test_config();
    let key = STANDARD.decode(&config.security.jwt_secret)?;
    let app = test_app_with(config)?;

    // A live token works, so the user exists and only expiry can fail below
    let token = login(&app).await?;
    let (status, _) = send(&app, Method::GET, "/api/employees", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: EMAIL.to_string(),
        iat: now - 120,
        exp: now - 60,
        roles: vec!["ROLE_USER".to_string()],
    };
    let expired = encode(&Header::new(Algorithm::HS512), &claims, &EncodingKey::from_secret(&key))?;

    let (status, body) = send(&app, Method::GET, "/api/employees", Some(&expired), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errorCode"], "UNAUTHORIZED");
    assert_eq!(body["details"], "uri=/api/employees");

    let (status, _) = send(&app, Method::GET, "/api/auth/whoami", Some(&expired), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}
