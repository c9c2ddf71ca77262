//! 前端静态资源路由
//!
//! 使用 rust-embed 嵌入前端构建产物，未匹配的路径回退到 index.html
//! 以支持 SPA 客户端路由。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

/// 编译时嵌入 frontend/dist/ 下的文件
#[derive(Embed)]
#[folder = "frontend/dist/"]
struct FrontendAssets;

fn extension(path: &str) -> &str {
    Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
}

/// 按扩展名确定 Content-Type
fn content_type_for(path: &str) -> &'static str {
    match extension(path) {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" | "map" => "application/json; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "mp4" => "video/mp4",
        "pdf" => "application/pdf",
        "txt" => "text/plain; charset=utf-8",
        "wasm" => "application/wasm",
        _ => "application/octet-stream",
    }
}

/// 构建产物文件名带内容 hash，可以永久缓存；HTML 与 manifest 不缓存
fn cache_control_for(path: &str) -> &'static str {
    match extension(path) {
        "js" | "mjs" | "css" | "woff" | "woff2" | "ttf" | "png" | "jpg" | "jpeg" | "gif"
        | "svg" | "webp" => "public, max-age=31536000, immutable",
        _ => "no-cache, no-store, must-revalidate",
    }
}

fn embedded(path: &str) -> Option<Vec<u8>> {
    FrontendAssets::get(path).map(|f| f.data.to_vec())
}

/// 前端资源请求处理，所有未命中的路径回退到 index.html
pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let tail = req.match_info().query("tail").trim_start_matches('/');

    let (data, served_path) = if tail.is_empty() {
        (embedded("index.html"), "index.html")
    } else {
        match embedded(tail) {
            Some(data) => (Some(data), tail),
            // SPA fallback
            None => (embedded("index.html"), "index.html"),
        }
    };

    let Some(data) = data else {
        // 前端尚未构建时的占位页面
        return Ok(HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(
                "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
                 <title>ELearn Platform</title></head><body>\
                 <h1>Frontend Not Found</h1>\
                 <p>Build the frontend first: <code>cd frontend &amp;&amp; npm run build</code></p>\
                 </body></html>",
            ));
    };

    Ok(HttpResponse::Ok()
        .content_type(content_type_for(served_path))
        .insert_header(("Cache-Control", cache_control_for(served_path)))
        .body(data))
}

/// 配置前端路由，必须注册在所有 API 路由之后
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type_for("index.html"), "text/html; charset=utf-8");
        assert_eq!(
            content_type_for("assets/app-4f2a.js"),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(content_type_for("style.css"), "text/css; charset=utf-8");
        assert_eq!(content_type_for("cert.pdf"), "application/pdf");
        assert_eq!(content_type_for("data.bin"), "application/octet-stream");
    }

    #[test]
    fn hashed_assets_are_immutable() {
        assert!(cache_control_for("assets/app-4f2a.js").contains("immutable"));
        assert!(cache_control_for("fonts/inter.woff2").contains("immutable"));
        assert!(cache_control_for("index.html").contains("no-store"));
        assert!(cache_control_for("manifest.json").contains("no-store"));
    }
}
