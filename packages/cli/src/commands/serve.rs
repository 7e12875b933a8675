//! Local preview server.
//!
//! `/` is a host page embedding `/preview` in a sandboxed iframe. `/preview`
//! recomposes the workspace buffers on every request and carries a sandbox
//! CSP header, so the document runs scripts but gets an opaque origin even
//! when opened directly. Reloading the frame is the refresh action.

use crate::session::{read_workspace_buffers, Session};
use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use clap::Args;
use codestudio_preview::{compose, escape_attribute, SANDBOX_CSP, SANDBOX_POLICY};
use colored::Colorize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to serve on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Clone)]
struct ServeState {
    workspace_dir: Arc<PathBuf>,
    title: Arc<str>,
}

pub fn serve(args: ServeArgs, cwd: &str) -> Result<()> {
    let session = Session::open(cwd)?;
    let port = args.port.unwrap_or(session.config.port);
    let title = session
        .playground
        .active_project()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "CodeStudio".to_string());

    let state = ServeState {
        workspace_dir: Arc::new(session.workspace_dir()),
        title: title.into(),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(state, port))
}

async fn run(state: ServeState, port: u16) -> Result<()> {
    let app = router(state.clone());
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("{}", "🚀 CodeStudio preview".bright_blue().bold());
    println!("   Serving {}", state.workspace_dir.display());
    println!("   Open http://{}", addr.to_string().cyan());
    println!("{}", "   Edit the workspace files, then press Refresh".dimmed());
    info!(%addr, "Preview server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: ServeState) -> Router {
    Router::new()
        .route("/", get(host_page))
        .route("/preview", get(preview_document))
        .with_state(state)
}

async fn host_page(State(state): State<ServeState>) -> Html<String> {
    Html(render_host_page(&state.title))
}

async fn preview_document(State(state): State<ServeState>) -> Response {
    match read_workspace_buffers(&state.workspace_dir) {
        Ok(sources) => {
            let document = compose(&sources.unwrap_or_default());
            (
                [
                    (header::CONTENT_SECURITY_POLICY, SANDBOX_CSP),
                    (header::CACHE_CONTROL, "no-store"),
                ],
                Html(document),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to read workspace buffers");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

fn render_host_page(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <style>
    html, body {{ margin: 0; height: 100%; font-family: system-ui, sans-serif; }}
    header {{ display: flex; align-items: center; justify-content: space-between; padding: 8px 16px; border-bottom: 1px solid #ddd; }}
    iframe {{ width: 100%; height: calc(100% - 50px); border: 0; background: white; }}
  </style>
</head>
<body>
  <header>
    <strong>{title}</strong>
    <button id="refresh" type="button">Refresh</button>
  </header>
  <iframe id="preview" title="Preview" sandbox="{sandbox}" src="/preview"></iframe>
  <script>
    document.getElementById('refresh').addEventListener('click', function () {{
      document.getElementById('preview').src = '/preview?t=' + Date.now();
    }});
  </script>
</body>
</html>
"#,
        title = escape_attribute(title),
        sandbox = SANDBOX_POLICY,
    )
}
