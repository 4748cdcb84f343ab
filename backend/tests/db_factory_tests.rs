//! Tests for db::factory module - repository creation and configuration.

mod support;

use std::path::Path;
use std::str::FromStr;

use skylark_ops::db::factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
use skylark_ops::db::{services, RepositoryConfig, RepositoryError};

#[test]
fn test_repository_type_from_str_workbook() {
    let rt = RepositoryType::from_str("workbook").unwrap();
    assert_eq!(rt, RepositoryType::Workbook);

    let rt = RepositoryType::from_str("SPREADSHEET").unwrap();
    assert_eq!(rt, RepositoryType::Workbook);
}

#[test]
fn test_repository_type_from_str_local() {
    let rt = RepositoryType::from_str("local").unwrap();
    assert_eq!(rt, RepositoryType::Local);

    let rt = RepositoryType::from_str(" Memory ").unwrap();
    assert_eq!(rt, RepositoryType::Local);
}

#[test]
fn test_repository_type_from_str_invalid() {
    let result = RepositoryType::from_str("gsheets-cloud");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Unknown repository type"));
}

#[test]
fn test_repository_type_from_env_default() {
    support::with_scoped_env(
        &[("REPOSITORY_TYPE", None), ("WORKBOOK_DIR", None)],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
        },
    );
}

#[test]
fn test_repository_type_from_env_with_workbook_dir() {
    support::with_scoped_env(
        &[("REPOSITORY_TYPE", None), ("WORKBOOK_DIR", Some("/tmp"))],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Workbook);
        },
    );
}

#[test]
fn test_repository_type_explicit_env_wins() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("local")),
            ("WORKBOOK_DIR", Some("/tmp")),
        ],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
        },
    );
}

#[test]
fn test_repository_type_invalid_env_falls_back_to_local() {
    support::with_scoped_env(&[("REPOSITORY_TYPE", Some("bogus"))], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[tokio::test]
async fn test_factory_from_env_opens_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_string_lossy().into_owned();

    let repo = support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("workbook")),
            ("WORKBOOK_DIR", Some(dir_str.as_str())),
            ("ROSTER_SHEET", None),
            ("FLEET_SHEET", None),
            ("MISSIONS_SHEET", None),
        ],
        RepositoryFactory::from_env,
    )
    .unwrap();

    assert!(repo.health_check().await.unwrap());
}

#[test]
fn test_factory_from_env_workbook_without_dir() {
    let result = support::with_scoped_env(
        &[("REPOSITORY_TYPE", Some("workbook")), ("WORKBOOK_DIR", None)],
        RepositoryFactory::from_env,
    );
    assert!(matches!(
        result,
        Err(RepositoryError::ConfigurationError { .. })
    ));
}

#[test]
fn test_builder_from_env_local() {
    let result = support::with_scoped_env(
        &[("REPOSITORY_TYPE", Some("local")), ("WORKBOOK_DIR", None)],
        || RepositoryBuilder::new().from_env().and_then(|b| b.build()),
    );
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_factory_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("sheets")).unwrap();
    let config_path = dir.path().join("repository.toml");
    std::fs::write(
        &config_path,
        "[repository]\ntype = \"workbook\"\n\n[workbook]\ndirectory = \"sheets\"\n",
    )
    .unwrap();

    let repo = RepositoryFactory::from_config_file(&config_path).unwrap();
    assert!(repo.health_check().await.unwrap());

    let builder_repo = RepositoryBuilder::new()
        .from_config_file(&config_path)
        .unwrap()
        .build()
        .unwrap();
    assert!(builder_repo.health_check().await.unwrap());
}

#[test]
fn test_factory_from_config_file_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("repository.toml");
    std::fs::write(
        &config_path,
        "[repository]\ntype = \"workbook\"\n\n[workbook]\ndirectory = \"nowhere\"\n",
    )
    .unwrap();

    assert!(matches!(
        RepositoryFactory::from_config_file(&config_path),
        Err(RepositoryError::ConfigurationError { .. })
    ));
}

#[test]
fn test_config_file_invalid_type() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("repository.toml");
    std::fs::write(&config_path, "[repository]\ntype = \"cloud\"\n").unwrap();

    let Err(err) = RepositoryFactory::from_config_file(&config_path) else {
        panic!("expected an invalid repository type error");
    };
    assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    assert!(err.to_string().contains("Invalid repository type"));
}

#[tokio::test]
async fn test_shipped_configuration_loads_sample_workbook() {
    let config_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("repository.toml");
    let config = RepositoryConfig::from_file(&config_path).unwrap();
    assert_eq!(config.repository_type().unwrap(), RepositoryType::Workbook);

    let repo = RepositoryFactory::from_repository_config(&config).unwrap();
    let data = services::load_dashboard(repo.as_ref()).await.unwrap();
    assert!(!data.pilots.is_empty());
    assert!(!data.drones.is_empty());
    assert!(!data.missions.is_empty());
}
