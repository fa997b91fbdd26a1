use actix_web::{get, HttpResponse};
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub banner: Option<Banner>,
}

pub struct Banner {
    pub kind: &'static str,
    pub message: String,
}

impl Banner {
    pub fn warning(message: &str) -> Self {
        Banner {
            kind: "warning",
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Banner {
            kind: "error",
            message: message.to_string(),
        }
    }
}

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().body(IndexTemplate { banner: None }.render().unwrap())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    #[actix_web::test]
    async fn index_page_renders_scrape_form() {
        let app = test::init_service(App::new().service(super::index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());

        let body = test::read_body(res).await;
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("Scrape Website"));
        assert!(page.contains(r#"value="http://example.com""#));
    }
}
