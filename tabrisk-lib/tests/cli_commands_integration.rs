//! The `plugins`, `init` and `validate` commands, driven through `run`.

use camino::Utf8PathBuf;
use tabrisk_lib::Host;

#[derive(Debug, Default)]
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

#[tokio::test]
async fn test_plugins_lists_registry_order() {
    let mut host = TestHost::default();
    tabrisk_lib::run(&mut host, ["tabrisk", "plugins"]).await.unwrap();

    let output = host.output_str();
    let ids: Vec<_> = output.lines().filter_map(|line| line.split_whitespace().next()).collect();
    assert_eq!(
        ids,
        [
            "tabrisk_lib::plugins::row_count",
            "tabrisk_lib::plugins::similar_check",
            "tabrisk_lib::plugins::dcr",
        ]
    );
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_init_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let config = Utf8PathBuf::from_path_buf(dir.path().join("tabrisk.toml")).unwrap();

    let mut host = TestHost::default();
    tabrisk_lib::run(&mut host, ["tabrisk", "init", config.as_str()]).await.unwrap();
    assert!(config.exists());

    let mut host = TestHost::default();
    tabrisk_lib::run(&mut host, ["tabrisk", "validate", "--config", config.as_str()])
        .await
        .unwrap();

    let output = host.output_str();
    assert!(output.contains("Configuration file is valid"), "{output}");
    assert!(output.contains(config.parent().unwrap().join("data").as_str()), "{output}");
    assert_eq!(host.exit_code, None);
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_validate_rejects_unknown_field() {
    let dir = tempfile::tempdir().unwrap();
    let config = Utf8PathBuf::from_path_buf(dir.path().join("bad.toml")).unwrap();
    std::fs::write(&config, "paralel = true\n").unwrap();

    let mut host = TestHost::default();
    let result = tabrisk_lib::run(&mut host, ["tabrisk", "validate", "-c", config.as_str()]).await;

    assert!(result.is_err());
    assert_eq!(host.exit_code, Some(1));
}
