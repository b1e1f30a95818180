//! Static landing page.
//!
//! The page fetches `GET /api/users` once when loaded and logs the JSON to
//! the browser console. Nothing is rendered from the result.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Seedling</title>
  </head>
  <body>
    <h1>Hello World</h1>
    <script>
      fetch('/api/users')
        .then((res) => res.json())
        .then((data) => console.log(data));
    </script>
  </body>
</html>
"#;

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};

    #[actix_web::test]
    async fn serves_hello_world_page() {
        let app = test::init_service(App::new().service(index)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));

        let body = test::read_body(res).await;
        let html = std::str::from_utf8(&body).expect("utf8 body");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("fetch('/api/users')"));
    }
}
