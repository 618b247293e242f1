use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{AgentConfig, AgentKind, ValidationError, validate_agents};

/// Parse a plain-text roster into agent definitions.
///
/// One agent per line as `name,kind`. Blank lines and `#` comments are
/// skipped. The same seat-count and uniqueness rules as the YAML agent
/// list apply.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<AgentConfig>, RosterError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| RosterError::Read {
        source,
        path: path.to_path_buf(),
    })?;
    let agents = parse_roster(&text)?;
    validate_agents(&agents).map_err(|source| RosterError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(agents)
}

pub fn parse_roster(text: &str) -> Result<Vec<AgentConfig>, RosterError> {
    let mut agents = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no = index + 1;
        let Some((name, kind)) = line.split_once(',') else {
            return Err(RosterError::Line {
                line_no,
                message: format!("expected 'name,kind', got '{line}'"),
            });
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::Line {
                line_no,
                message: "agent name must not be empty".to_string(),
            });
        }

        let kind: AgentKind = kind.parse().map_err(|source| RosterError::Line {
            line_no,
            message: format!("{source}"),
        })?;

        agents.push(AgentConfig {
            name: name.to_string(),
            kind,
        });
    }
    Ok(agents)
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("roster line {line_no}: {message}")]
    Line { line_no: usize, message: String },
    #[error("invalid roster in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}
