use notes_api::{app::App, cli};

#[tokio::main]
async fn main() -> notes_api::Result<()> {
    cli::main::<App>().await
}
