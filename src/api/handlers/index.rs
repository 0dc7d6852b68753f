use axum::response::Html;

const INDEX_PAGE: &str = r#"
    <h1>InstaGo 测试服务器</h1>
    <p>服务器正在运行，等待接收图片上传...</p>
    <p>上传端点: <code>POST /upload</code></p>
    <p>健康检查: <code>GET /health</code></p>
    "#;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String)
    ),
    tag = "system"
)]
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
