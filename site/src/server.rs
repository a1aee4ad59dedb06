use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;

/// Static routes: `/assets/*` from the assets dir, everything else from the
/// bundle, and `index.html` for paths the bundle does not have.
pub fn routes(dist: PathBuf, assets: PathBuf) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg: &mut web::ServiceConfig| {
        let index = dist.join("index.html");

        cfg.service(Files::new("/assets", assets.clone()))
            .service(
                Files::new("/", dist.clone())
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index = index.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(&index).await?;
                            let res = file.into_response(&req);
                            Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
                        }
                    })),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use portfolio_ui::content::{ASSET_PREFIX, PROFILE_IMAGE, SKILLS_IMAGE};
    use std::fs;

    const INDEX: &str = "<!doctype html><title>portfolio</title>";
    const JPEG: [u8; 3] = [0xff, 0xd8, 0xff];

    fn site() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let root = tempfile::tempdir().unwrap();
        let dist = root.path().join("dist");
        let assets = root.path().join("assets");
        fs::create_dir_all(&dist).unwrap();
        fs::create_dir_all(&assets).unwrap();
        fs::write(dist.join("index.html"), INDEX).unwrap();
        fs::write(dist.join("portfolio_ui.js"), "export {}").unwrap();
        for image in [SKILLS_IMAGE, PROFILE_IMAGE] {
            let name = image.strip_prefix(ASSET_PREFIX).unwrap();
            fs::write(assets.join(name), JPEG).unwrap();
        }
        (root, dist, assets)
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let (_root, dist, assets) = site();
        let app = test::init_service(App::new().configure(routes(dist, assets))).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, INDEX.as_bytes());
    }

    #[actix_web::test]
    async fn bundle_files_are_served() {
        let (_root, dist, assets) = site();
        let app = test::init_service(App::new().configure(routes(dist, assets))).await;

        let req = test::TestRequest::get().uri("/portfolio_ui.js").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "export {}".as_bytes());
    }

    #[actix_web::test]
    async fn page_images_resolve_to_image_bytes() {
        let (_root, dist, assets) = site();
        let app = test::init_service(App::new().configure(routes(dist, assets))).await;

        for image in [SKILLS_IMAGE, PROFILE_IMAGE] {
            let req = test::TestRequest::get().uri(image).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK);
            assert_eq!(test::read_body(res).await, JPEG.as_slice(), "{image}");
        }
    }

    #[actix_web::test]
    async fn unknown_path_falls_back_to_index() {
        let (_root, dist, assets) = site();
        let app = test::init_service(App::new().configure(routes(dist, assets))).await;

        let req = test::TestRequest::get().uri("/ecommerce-project").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, INDEX.as_bytes());
    }
}
