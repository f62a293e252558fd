// bases/yt_downloader/src/main.rs
mod app;
mod args;
mod output;

use app::App;
use args::Args;
use color_eyre::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse_or_exit();

    let default_filter = if args.verbose {
        "yt_downloader=debug,video_downloader=debug"
    } else {
        "yt_downloader=warn,video_downloader=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let app = App::new(args);

    // Failed downloads are reported, not turned into an exit status
    if let Err(error) = app.run().await {
        app.print_error(&error);
    }
    Ok(())
}
