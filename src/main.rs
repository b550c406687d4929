mod api;
#[cfg(feature = "server")]
mod db;
mod query;
mod routes;
mod session;
mod sponsor;
#[cfg(feature = "server")]
mod state;
mod views;

use dioxus::prelude::*;
use views::{
    About, CodeOfConduct, Home, MyPage, NavBar, PageNotFound, Schedule, SponsorDetailPage,
    SponsorList, Theme,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/coc")]
        CodeOfConduct {},
        #[route("/schedule")]
        Schedule {},
        #[route("/sponsor/list")]
        SponsorList {},
        #[route("/sponsor/detail/:id")]
        SponsorDetailPage { id: String },
        #[route("/mypage")]
        MyPage {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
fn App() -> Element {
    use crate::query::QueryCache;
    use crate::session::{SessionEvent, SessionSink, SessionStore, UserSession};
    use crate::sponsor::SponsorDetail;

    let store = use_context_provider(|| SessionStore::new(Signal::new(UserSession::default())));
    use_context_provider(|| Signal::new(QueryCache::<SponsorDetail>::default()));
    let theme = use_context_provider(|| Signal::new(Theme::default()));

    // pick up a session opened by the login service
    use_future(move || async move {
        let mut store = store;
        match api::current_session().await {
            Ok(Some(userid)) => store.dispatch(SessionEvent::SignedIn {
                userid,
                nickname: None,
            }),
            Ok(None) => log::debug!("No active session"),
            Err(e) => log::error!("Failed to load session: {}", e),
        }
    });

    let theme_name = theme().as_str();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "app", "data-theme": "{theme_name}", Router::<Route> {} }
    }
}

#[cfg(feature = "server")]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = String::from("127.0.0.1"))]
    ip: String,
    /// 0 lets the dioxus CLI pick the address
    #[arg(long, default_value_t = 0)]
    port: u16,
    #[arg(long, default_value_t = String::from(state::DEFAULT_DB_PATH))]
    db_path: String,
    /// JSON array of sponsors to load at startup
    #[arg(long)]
    sponsors: Option<std::path::PathBuf>,
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use crate::sponsor::SponsorEntry;
    use crate::state::LOCAL_SERVER_STATE;
    use clap::Parser;
    use std::net::SocketAddr;

    env_logger::init();

    let args = Args::parse();

    {
        let mut state = LOCAL_SERVER_STATE.lock().await;
        state.db_path = args.db_path.clone();
    }

    let conn = rusqlite::Connection::open(&args.db_path)?;
    db::init_db(&conn)?;

    if let Some(path) = &args.sponsors {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<SponsorEntry> = serde_json::from_str(&raw)?;
        db::seed_sponsors(&conn, &entries)?;
    }
    drop(conn);

    let addr: SocketAddr = if args.port == 0 {
        dioxus_cli_config::fullstack_address_or_localhost()
    } else {
        format!("{}:{}", args.ip, args.port).parse()?
    };

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfigBuilder::default(), App)
        .into_make_service();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Serving the site at http://{}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    #[cfg(feature = "web")]
    {
        console_error_panic_hook::set_once();
        _ = console_log::init_with_level(log::Level::Debug);
    }

    dioxus::launch(App);
}
