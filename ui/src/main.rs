pub use app::App;

pub mod app;
mod data;
mod extension;
mod fields;
mod login;
mod popup;
mod signup;

use cli_log::*;
use color_eyre::eyre::WrapErr;
use log::info;
use mental_auth::PageConfig;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    init_cli_log!("mental_auth");
    color_eyre::install()?;
    let config = PageConfig::from_env().wrap_err("invalid MENTAL_AUTH_* environment")?;
    info!("starting with {:?}", config);
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal).await;
    ratatui::restore();
    result
}
