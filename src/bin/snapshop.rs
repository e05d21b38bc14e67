fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let config = snapshop::AppConfig::default();
    snapshop::ui::run(config)
}
