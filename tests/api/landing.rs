use crate::helpers::spawn_app;

#[tokio::test]
async fn landing_page_renders_the_signup_form() {
    let (app, _) = spawn_app().await;

    let response = app
        .api_client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let page = response.text().await.unwrap();
    assert!(page.contains(r#"<form id="email-form""#));
    assert!(page.contains(r#""/api/submit-email""#));
    assert!(page.contains(r#""Email is required""#));
    assert!(page.contains(r#""Please enter a valid email address""#));
    assert!(page.contains("Our mascot is excited to have you join us!"));
}
