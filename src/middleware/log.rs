use axum::{extract::Request, middleware::Next, response::Response};

// Uma linha de log por requisição, com o status da resposta.
pub async fn registrar_requisicao(request: Request, next: Next) -> Response {
    let metodo = request.method().clone();
    let caminho = request.uri().path().to_owned();

    let resposta = next.run(request).await;

    tracing::info!("{} {} -> {}", metodo, caminho, resposta.status());
    resposta
}
