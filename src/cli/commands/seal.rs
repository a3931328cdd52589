use std::io::Read;
use std::path::{Path, PathBuf};

use crate::adapters::cipher::pgp_backend::PgpBackend;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::{Result, SealError};
use crate::core::services::seal_service::SealService;

/// Execute the `gpgseal seal` command.
///
/// Encrypts the content of `file` (or stdin) for every public key given
/// with `--key`, falling back to the recipients listed in the config
/// file. The armored message goes to `out` or stdout; status lines go
/// to stderr so the artifact stays pipeable.
pub fn execute(
    file: Option<&str>,
    keys: &[String],
    out: Option<&str>,
    json: bool,
    config: &AppConfig,
    verbose: bool,
) -> Result<()> {
    let key_paths: Vec<PathBuf> = if keys.is_empty() {
        config.seal.recipients.clone()
    } else {
        keys.iter().map(PathBuf::from).collect()
    };

    if key_paths.is_empty() {
        return Err(SealError::NoRecipients);
    }

    let public_keys = key_paths
        .iter()
        .map(|path| read_key_file(path))
        .collect::<Result<Vec<String>>>()?;

    let content = read_content(file)?;

    let backend = PgpBackend::with_algorithm(&config.seal.cipher)?;
    let service = SealService::new(backend);
    let sealed = service.create(&content, &public_keys)?;

    if verbose {
        for (path, key_id) in key_paths.iter().zip(&sealed.public_keys) {
            output::detail(&format!("Recipient {}: {}", path.display(), key_id));
        }
    }

    if json {
        let snapshot = serde_json::to_string_pretty(&sealed).map_err(|e| SealError::State {
            field: "result".into(),
            detail: e.to_string(),
        })?;
        println!("{snapshot}");
    } else {
        match out {
            Some(dest) => {
                std::fs::write(dest, &sealed.result)?;
                output::success(&format!("Sealed message written to {dest}"));
            }
            None => print!("{}", sealed.result),
        }
        output::success(&format!(
            "Sealed for {} recipient(s), id {}",
            sealed.public_keys.len(),
            sealed.id
        ));
    }

    Ok(())
}

/// Read one armored public key file.
fn read_key_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SealError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Read the plaintext from a file, or stdin when no file is given.
fn read_content(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                return Err(SealError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}
