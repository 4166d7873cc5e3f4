// src/tests.rs
//
// Testes de ponta a ponta: montam o router real sobre um estado de teste
// (provedor de e-mail em sandbox) e falam HTTP com `tower::oneshot`.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use crate::app_router;
use crate::config::{AppState, Settings};

const TEST_PASSWORD: &str = "AmeriTrust2025!";
const VALID_KEY: &str = "re_0123456789abcdefghijklmnopqrstuvwxyz";

fn test_settings(sandbox: bool, api_key: &str) -> Settings {
    Settings {
        port: 0,
        resend_api_key: api_key.to_string(),
        // Endereço inválido de propósito: nenhum teste deve tocar a rede
        resend_api_url: "http://invalid.invalid/emails".to_string(),
        email_from: "AmeriTrust Insurance <notifications@mail.ameritrust-ins.com>".to_string(),
        resend_sandbox: sandbox,
        admin_notify_emails: vec![
            "quotes@example.com".to_string(),
            "admin@example.com".to_string(),
            "backup@example.com".to_string(),
        ],
        admin_username: "admin".to_string(),
        admin_password_hash: bcrypt::hash(TEST_PASSWORD, 4).unwrap(),
        jwt_secret: "segredo-de-teste".to_string(),
        public_base_url: "http://localhost:3000".to_string(),
    }
}

fn test_app() -> Router {
    app_router(AppState::from_settings(test_settings(true, VALID_KEY)))
}

// Provedor inacessível e chave vazia: todo envio real falha.
fn broken_email_app() -> Router {
    app_router(AppState::from_settings(test_settings(false, "")))
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    request_with_token(app, method, uri, body, None).await
}

async fn request_with_token(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn auto_quote_payload() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Smith",
        "email": "john.smith@email.com",
        "phone": "(555) 123-4567",
        "serviceType": "auto",
        "driverName": "John Smith",
        "driverDateOfBirth": "1985-03-12",
        "driverLicenseNo": "TX1234567",
        "vehicleYear": "2020",
        "vehicleMake": "Toyota",
        "vehicleModel": "Camry",
        "address": "100 Main St, Austin, TX",
        "currentInsurer": "Acme Mutual"
    })
}

async fn login(app: &Router) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/admin/login",
        Some(json!({ "username": "admin", "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn orcamento_auto_completo_e_aceito() {
    let app = test_app();

    let (status, body) = request(&app, "POST", "/api/quote", Some(auto_quote_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();

    // Em sandbox o alerta à equipe "chega" para todos os destinatários
    assert_eq!(body["emailStatus"]["adminNotificationsSent"], json!(3));
    assert_eq!(body["emailStatus"]["emailServiceWorking"], json!(true));

    let (status, record) = request(&app, "GET", &format!("/api/quote/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["status"], json!("new"));
    assert_eq!(record["serviceType"], json!("auto"));
    assert_eq!(record["vehicleMake"], json!("Toyota"));
}

#[tokio::test]
async fn campos_ausentes_sao_todos_listados_e_nada_e_gravado() {
    let app = test_app();

    let mut payload = auto_quote_payload();
    payload.as_object_mut().unwrap().remove("driverLicenseNo");
    payload["vehicleYear"] = json!("   "); // em branco conta como ausente

    let (status, body) = request(&app, "POST", "/api/quote", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Missing required fields"));
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("driverLicenseNo"));
    assert!(details.contains("vehicleYear"));

    let (_, list) = request(&app, "GET", "/api/quote", None).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn email_sem_dominio_valido_e_rejeitado() {
    let app = test_app();

    let mut payload = auto_quote_payload();
    payload["email"] = json!("john@smith");

    let (status, body) = request(&app, "POST", "/api/quote", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid email format"));
}

#[tokio::test]
async fn service_type_desconhecido_e_rejeitado() {
    let app = test_app();

    let mut payload = auto_quote_payload();
    payload["serviceType"] = json!("boat");

    let (status, _) = request(&app, "POST", "/api/quote", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_com_id_desconhecido_e_404() {
    let app = test_app();

    let (status, body) = request(
        &app,
        "PATCH",
        "/api/quote",
        Some(json!({ "id": Uuid::new_v4(), "status": "pending" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Quote not found"));
}

#[tokio::test]
async fn listagem_vem_do_mais_novo_para_o_mais_antigo() {
    let app = test_app();

    for n in 1..=3 {
        let mut payload = auto_quote_payload();
        payload["email"] = json!(format!("lead{n}@example.com"));
        let (status, _) = request(&app, "POST", "/api/quote", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let (status, list) = request(&app, "GET", "/api/quote", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["email"], json!("lead3@example.com"));
    assert_eq!(list[2]["email"], json!("lead1@example.com"));
}

#[tokio::test]
async fn filtros_da_listagem_por_produto_status_e_busca() {
    let app = test_app();

    let (_, created) = request(&app, "POST", "/api/quote", Some(auto_quote_payload())).await;
    let auto_id = created["id"].as_str().unwrap().to_string();

    let life = json!({
        "firstName": "Mary",
        "lastName": "Jones",
        "email": "mary.jones@email.com",
        "phone": "(555) 999-0000",
        "serviceType": "life"
    });
    let (status, _) = request(&app, "POST", "/api/quote", Some(life)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, list) = request(&app, "GET", "/api/quote?serviceType=auto", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (_, list) = request(&app, "GET", "/api/quote?search=mary", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["serviceType"], json!("life"));

    let (_, list) = request(&app, "GET", "/api/quote?status=contacted", None).await;
    assert_eq!(list.as_array().unwrap().len(), 0);

    // Status atualizado à mão aparece no filtro
    let (status, _) = request(
        &app,
        "PATCH",
        "/api/quote",
        Some(json!({ "id": auto_id, "status": "pending" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = request(&app, "GET", "/api/quote?status=pending", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_duplo_devolve_404_na_segunda() {
    let app = test_app();

    let (_, created) = request(&app, "POST", "/api/quote", Some(auto_quote_payload())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = request(&app, "DELETE", &format!("/api/quote/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedId"], json!(id));

    let (status, _) = request(&app, "DELETE", &format!("/api/quote/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn corpo_malformado_ou_vazio_e_400() {
    let app = test_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/quote")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], json!("Invalid JSON in request body"));

    let req = Request::builder()
        .method("POST")
        .uri("/api/quote")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn fluxo_de_contato_grava_sem_disparar_email() {
    let app = broken_email_app();

    // Mesmo com o provedor fora do ar a mensagem entra: o caminho de
    // contato não envia e-mail nenhum
    let (status, body) = request(
        &app,
        "POST",
        "/api/contact",
        Some(json!({
            "name": "Michael Brown",
            "email": "michael.brown@email.com",
            "subject": "Question about commercial insurance",
            "message": "Do you cover interstate fleets?"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], json!("Message sent successfully"));
    let id = body["id"].as_str().unwrap().to_string();

    let (status, record) = request(&app, "GET", &format!("/api/contact/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["status"], json!("new"));

    // `phone` é o único opcional
    let (status, body) = request(
        &app,
        "POST",
        "/api/contact",
        Some(json!({ "name": "X", "email": "x@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("subject"));
    assert!(details.contains("message"));
}

#[tokio::test]
async fn login_valida_credenciais_e_emite_token() {
    let app = test_app();

    let (status, body) = request(
        &app,
        "POST",
        "/api/admin/login",
        Some(json!({ "username": "", "password": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Username and password are required"));

    let (status, _) = request(
        &app,
        "POST",
        "/api/admin/login",
        Some(json!({ "username": "admin", "password": "senha-errada" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = request(
        &app,
        "POST",
        "/api/admin/login",
        Some(json!({ "username": "admin", "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["username"], json!("admin"));
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn rotas_guardadas_exigem_token_valido() {
    let app = test_app();

    let (status, _) = request(&app, "POST", "/api/admin/reply", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = request_with_token(
        &app,
        "POST",
        "/api/admin/test-email",
        Some(json!({ "to": "a@b.com" })),
        Some("token-de-mentira"),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("Invalid or missing authentication token"));
}

#[tokio::test]
async fn resposta_do_admin_marca_o_lead_como_contacted() {
    let app = test_app();

    let (_, created) = request(&app, "POST", "/api/quote", Some(auto_quote_payload())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let token = login(&app).await;
    let (status, body) = request_with_token(
        &app,
        "POST",
        "/api/admin/reply",
        Some(json!({
            "to": "john.smith@email.com",
            "subject": "Your quote",
            "message": "Here is your personalized quote.",
            "type": "quote",
            "originalId": id,
        })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["emailSent"], json!(true));

    let (_, record) = request(&app, "GET", &format!("/api/quote/{id}"), None).await;
    assert_eq!(record["status"], json!("contacted"));
    assert!(record["updatedAt"].is_string());
}

#[tokio::test]
async fn falha_no_envio_da_resposta_preserva_o_status() {
    let app = broken_email_app();

    let (status, created) =
        request(&app, "POST", "/api/quote", Some(auto_quote_payload())).await;
    // A submissão entra mesmo sem provedor; só o status secundário degrada
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["emailStatus"]["emailServiceWorking"], json!(false));
    assert_eq!(created["emailStatus"]["adminNotificationsSent"], json!(0));
    let id = created["id"].as_str().unwrap().to_string();

    let token = login(&app).await;
    let (status, body) = request_with_token(
        &app,
        "POST",
        "/api/admin/reply",
        Some(json!({
            "to": "john.smith@email.com",
            "subject": "Your quote",
            "message": "Here is your personalized quote.",
            "type": "quote",
            "originalId": id,
        })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        json!("Failed to send email. Please check your email configuration.")
    );

    let (_, record) = request(&app, "GET", &format!("/api/quote/{id}"), None).await;
    assert_eq!(record["status"], json!("new"));
}

#[tokio::test]
async fn resposta_a_lead_inexistente_e_404_sem_envio() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = request_with_token(
        &app,
        "POST",
        "/api/admin/reply",
        Some(json!({
            "to": "ghost@example.com",
            "subject": "Hello",
            "message": "Anyone there?",
            "type": "contact",
            "originalId": Uuid::new_v4(),
        })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Contact not found"));
}

#[tokio::test]
async fn depoimentos_comecam_com_a_carga_inicial_e_aceitam_novos() {
    let app = test_app();

    let (status, list) = request(&app, "GET", "/api/testimonials", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 6);

    let (status, body) = request(
        &app,
        "POST",
        "/api/testimonials",
        Some(json!({
            "name": "Carlos Rivera",
            "location": "El Paso, TX",
            "rating": 5,
            "review": "Fast quote, great rate.",
            "serviceType": "Auto Insurance"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], json!("Testimonial added successfully"));

    // Id e data vêm do servidor, nunca do cliente
    let created_id: Uuid = body["testimonial"]["id"].as_str().unwrap().parse().unwrap();
    assert!(body["testimonial"]["date"].is_string());

    // O depoimento volta na listagem exatamente como foi enviado
    let (_, list) = request(&app, "GET", "/api/testimonials", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 7);
    let stored = list
        .iter()
        .find(|t| t["id"] == json!(created_id))
        .expect("depoimento recém-criado na listagem");
    assert_eq!(stored["name"], json!("Carlos Rivera"));
    assert_eq!(stored["rating"], json!(5));
    assert_eq!(stored["review"], json!("Fast quote, great rate."));
    assert!(stored["date"].is_string());

    // Nota fora da escala 1..=5
    let (status, _) = request(
        &app,
        "POST",
        "/api/testimonials",
        Some(json!({
            "name": "X",
            "location": "Y",
            "rating": 9,
            "review": "Z",
            "serviceType": "Auto Insurance"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn email_de_teste_do_console_exige_destinatario() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = request_with_token(
        &app,
        "POST",
        "/api/admin/test-email",
        Some(json!({})),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Missing required fields"));

    let (status, body) = request_with_token(
        &app,
        "POST",
        "/api/admin/test-email",
        Some(json!({ "to": "admin@example.com" })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["messageId"], json!("sandbox-message-id"));
}
