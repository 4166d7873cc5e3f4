//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

#[cfg(test)]
mod tests;

use crate::config::{AppState, Settings};
use crate::middleware::auth::admin_guard;

// Router completo da aplicação, separado do main para os testes
// montarem a mesma árvore de rotas sobre um estado próprio.
pub(crate) fn app_router(app_state: AppState) -> Router {
    let quote_routes = Router::new()
        .route("/"
               ,post(handlers::quote::submit_quote)
               .get(handlers::quote::list_quotes)
               .patch(handlers::quote::update_quote_status)
        )
        .route("/{id}"
               ,get(handlers::quote::get_quote)
               .delete(handlers::quote::delete_quote)
        );

    let contact_routes = Router::new()
        .route("/"
               ,post(handlers::contact::submit_contact)
               .get(handlers::contact::list_contacts)
               .patch(handlers::contact::update_contact_status)
        )
        .route("/{id}"
               ,get(handlers::contact::get_contact)
               .delete(handlers::contact::delete_contact)
        );

    let testimonial_routes = Router::new()
        .route("/"
               ,get(handlers::testimonials::list_testimonials)
               .post(handlers::testimonials::submit_testimonial)
        );

    // O login fica fora do guard; só as operações que disparam e-mail
    // em nome da agência exigem a sessão
    let admin_routes = Router::new()
        .route("/reply", post(handlers::admin::reply))
        .route("/test-email", post(handlers::admin::test_email))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            admin_guard,
        ))
        .route("/login", post(handlers::admin::login));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/quote", quote_routes)
        .nest("/api/contact", contact_routes)
        .nest("/api/testimonials", testimonial_routes)
        .nest("/api/admin", admin_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    // Inicializa o logger antes de qualquer outra coisa
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .compact()
        .init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let settings = Settings::from_env().expect("Falha ao carregar a configuração do ambiente.");
    let port = settings.port;

    if settings.resend_sandbox {
        tracing::warn!("⚠️ RESEND_SANDBOX ativo: nenhum e-mail real será enviado");
    }

    let app_state = AppState::from_settings(settings);
    let app = app_router(app_state);

    // Inicia o servidor
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
