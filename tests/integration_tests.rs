use etl_dispatch::core::DispatchStage;
use etl_dispatch::{DispatchError, Dispatcher, Registry, Transformer, TransformerCatalog};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::{Builder, TempDir};

struct RecordingTransformer {
    calls: Arc<AtomicUsize>,
}

impl Transformer for RecordingTransformer {
    fn transform(&mut self) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn write_registry(dir: &TempDir, file_name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_end_to_end_with_json_registry() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_registry(
        &temp_dir,
        "module.json",
        r#"{"datasource_a": "pkg.sub.mod.ClassA"}"#,
    );

    let calls = Arc::new(AtomicUsize::new(0));
    let mut catalog = TransformerCatalog::new();
    let calls_c = calls.clone();
    catalog
        .register("pkg.sub.mod", "ClassA", move || {
            Ok(Box::new(RecordingTransformer {
                calls: calls_c.clone(),
            }) as Box<dyn Transformer>)
        })
        .unwrap();

    let dispatcher = Dispatcher::new(Registry::load(&path).unwrap(), catalog);
    dispatcher.transform_data("datasource_a").unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_end_to_end_with_toml_registry_and_builtin_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_registry(
        &temp_dir,
        "datasources.toml",
        r#"
datasource_a = "solution_2.data_etl.datasource_a.DatasourceA"
datasource_b = "solution_2.data_etl.datasource_b.DatasourceB"
"#,
    );

    let dispatcher = Dispatcher::new(
        Registry::load(&path).unwrap(),
        TransformerCatalog::builtin().unwrap(),
    );

    assert!(dispatcher.transform_data("datasource_a").is_ok());
    assert!(dispatcher.transform_data("datasource_b").is_ok());
}

#[test]
fn test_shipped_registry_matches_builtin_catalog() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/datasources.json");
    let dispatcher = Dispatcher::new(
        Registry::load(path).unwrap(),
        TransformerCatalog::builtin().unwrap(),
    );

    let names: Vec<String> = dispatcher
        .registry()
        .data_sources()
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(names, vec!["datasource_a", "datasource_b", "datasource_c"]);

    for name in &names {
        let reference = dispatcher.plan(name).unwrap();
        assert!(!reference.namespace_path().is_empty());
        assert!(!reference.type_name.is_empty());
        dispatcher.transform_data(name).unwrap();
    }
}

#[test]
fn test_unknown_data_source_from_file() {
    let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
    temp_file
        .write_all(br#"{"datasource_a": "solution_2.data_etl.datasource_a.DatasourceA"}"#)
        .unwrap();

    let dispatcher = Dispatcher::new(
        Registry::load(temp_file.path()).unwrap(),
        TransformerCatalog::builtin().unwrap(),
    );

    let err = dispatcher.transform_data("datasource_z").unwrap_err();
    assert!(matches!(err, DispatchError::UnknownDataSource { .. }));
    assert_eq!(err.stage(), DispatchStage::Resolving);
}

#[test]
fn test_configured_but_unregistered_type() {
    let registry =
        Registry::from_entries([("datasource_x", "solution_2.data_etl.datasource_x.DatasourceX")])
            .unwrap();
    let dispatcher = Dispatcher::new(registry, TransformerCatalog::builtin().unwrap());

    let err = dispatcher.plan("datasource_x").unwrap_err();
    assert!(matches!(err, DispatchError::TypeLoad { .. }));
    assert_eq!(err.stage(), DispatchStage::Loading);
}

#[test]
fn test_dispatcher_is_shareable_across_threads() {
    let registry =
        Registry::from_entries([("datasource_a", "solution_2.data_etl.datasource_a.DatasourceA")])
            .unwrap();
    let dispatcher = Arc::new(Dispatcher::new(
        registry,
        TransformerCatalog::builtin().unwrap(),
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dispatcher = dispatcher.clone();
            std::thread::spawn(move || dispatcher.transform_data("datasource_a").is_ok())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
