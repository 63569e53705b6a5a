use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Default, Serialize)]
struct BootstrapConfig {
    firebase_api_key: Option<String>,
    firebase_auth_domain: Option<String>,
    firebase_project_id: Option<String>,
    firebase_app_id: Option<String>,
}

fn main() {
    println!("cargo:rerun-if-env-changed=FIREBASE_API_KEY");
    println!("cargo:rerun-if-env-changed=FIREBASE_AUTH_DOMAIN");
    println!("cargo:rerun-if-env-changed=FIREBASE_PROJECT_ID");
    println!("cargo:rerun-if-env-changed=FIREBASE_APP_ID");

    if let Err(error) = write_bootstrap_config() {
        println!("cargo:warning=failed to generate bootstrap config: {error}");
    }
}

fn write_bootstrap_config() -> io::Result<()> {
    load_workspace_dotenv();

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    fs::create_dir_all(&out_dir)?;

    let config = BootstrapConfig {
        firebase_api_key: env_var_trimmed("FIREBASE_API_KEY"),
        firebase_auth_domain: env_var_trimmed("FIREBASE_AUTH_DOMAIN"),
        firebase_project_id: env_var_trimmed("FIREBASE_PROJECT_ID"),
        firebase_app_id: env_var_trimmed("FIREBASE_APP_ID"),
    };

    let content = serde_json::to_string_pretty(&config)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))?;
    fs::write(out_dir.join("bootstrap.json"), content)?;
    Ok(())
}

fn load_workspace_dotenv() {
    let manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
    let candidate = manifest_dir.join("..").join("..").join(".env");
    if candidate.exists() {
        let _ = dotenvy::from_path(candidate);
    }
}

fn env_var_trimmed(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
