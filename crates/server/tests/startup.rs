use std::fs;

#[tokio::test]
async fn run_leaves_subscriber_to_the_caller() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("rental-bad-config-{}.toml", std::process::id()));
    fs::write(&path, "[server\nport = ")?;
    std::env::set_var("CONFIG_PATH", &path);

    let result = server::startup::run().await;
    fs::remove_file(&path)?;

    assert!(result.is_err());
    assert!(!tracing::dispatcher::has_been_set());
    Ok(())
}
