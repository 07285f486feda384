mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

// These tests exercise database-backed behavior end to end and only run when
// a database is configured, mirroring how the rest of the suite tolerates a
// degraded /health.
fn database_configured() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

#[tokio::test]
async fn deleting_missing_cat_reports_route_specific_messages() -> Result<()> {
    if !database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let missing = uuid::Uuid::new_v4();

    // Owner route
    let owner_token = common::mint_token(
        common::TEST_USER_ID,
        "mittens_owner",
        "owner@example.com",
        "user",
    );
    let res = client
        .delete(format!("{}/api/cats/{}", server.base_url, missing))
        .bearer_auth(&owner_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "No cat found");

    // Admin route uses the other wording
    let admin_token = common::mint_token(
        common::TEST_USER_ID,
        "overseer",
        "overseer@example.com",
        "admin",
    );
    let res = client
        .delete(format!("{}/api/admin/cats/{}", server.base_url, missing))
        .bearer_auth(&admin_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Cat not found");
    Ok(())
}

#[tokio::test]
async fn self_registration_persists_role_user() -> Result<()> {
    if !database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Unique email so repeated runs don't collide on the unique constraint
    let email = format!("felix-{}@example.com", uuid::Uuid::new_v4());
    let res = client
        .post(format!("{}/api/users", server.base_url))
        .json(&json!({
            "user_name": "felix",
            "email": email,
            "password": "s3cret-enough",
            "role": "admin"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "User created");
    assert!(body["data"].get("role").is_none());
    assert!(body["data"].get("password").is_none());

    // Check the stored row directly: the requested "admin" must not stick
    let id = uuid::Uuid::parse_str(body["data"]["id"].as_str().unwrap_or_default())?;
    let pool = sqlx::PgPool::connect(&std::env::var("DATABASE_URL")?).await?;
    let (role, stored_password): (String, String) =
        sqlx::query_as("SELECT role, password FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await?;
    assert_eq!(role, "user");
    assert_ne!(stored_password, "s3cret-enough");
    assert!(bcrypt::verify("s3cret-enough", &stored_password)?);
    Ok(())
}

#[tokio::test]
async fn cat_by_id_projects_owner_to_name_and_email() -> Result<()> {
    if !database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Register an owner through the API, then act as them
    let email = format!("whiskers-{}@example.com", uuid::Uuid::new_v4());
    let res = client
        .post(format!("{}/api/users", server.base_url))
        .json(&json!({
            "user_name": "whiskers_owner",
            "email": email,
            "password": "s3cret-enough"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let owner = res.json::<serde_json::Value>().await?;
    let owner_id = owner["data"]["id"].as_str().unwrap_or_default().to_string();
    let token = common::mint_token(&owner_id, "whiskers_owner", &email, "user");

    let photo = reqwest::multipart::Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]).file_name("felix.jpg");
    let form = reqwest::multipart::Form::new()
        .text("name", "Felix")
        .text("breed", "tabby")
        .part("photo", photo);

    let res = client
        .post(format!("{}/api/cats", server.base_url))
        .bearer_auth(&token)
        .header("X-Client-Geo", "5.5,4.25")
        .multipart(form)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["message"], "Cat created");
    let cat_id = created["data"]["id"].as_str().unwrap_or_default().to_string();

    // The stored filename is server-assigned, only the extension survives
    let filename = created["data"]["filename"].as_str().unwrap_or_default();
    assert_ne!(filename, "felix.jpg");
    assert!(filename.ends_with(".jpg"));

    // get-by-id resolves the owner down to {user_name, email} and nothing else
    let res = client
        .get(format!("{}/api/cats/{}", server.base_url, cat_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let cat = res.json::<serde_json::Value>().await?;
    let owner_obj = cat["owner"].as_object().expect("owner object");
    assert_eq!(owner_obj.len(), 2);
    assert_eq!(owner_obj["user_name"], "whiskers_owner");
    assert_eq!(owner_obj["email"], email.as_str());
    assert_eq!(cat["location"]["lat"], 5.5);
    assert_eq!(cat["location"]["lng"], 4.25);

    // The cat's location (4.25, 5.5) lies within the (0,0)-(10,10) rectangle
    let res = client
        .get(format!(
            "{}/api/cats/area?topRight=10,10&bottomLeft=0,0",
            server.base_url
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let in_area = res.json::<serde_json::Value>().await?;
    let found = in_area
        .as_array()
        .expect("array")
        .iter()
        .any(|c| c["id"] == cat_id.as_str());
    assert!(found, "created cat missing from bounding-box result");
    Ok(())
}
