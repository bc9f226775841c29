use crate::config::Config;
use crate::error::{ArmadaError, Result};
use crate::io;
use crate::paths;
use crate::port::PortMode;
use crate::session::SessionScope;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

pub const ENABLED_KEY: &str = "ARMADA_DEVELOP";
pub const NAME_KEY: &str = "MICROSERVICE_NAME";
pub const DYNAMIC_PORTS_KEY: &str = "MICROSERVICE_DYNAMIC_PORTS";
pub const VOLUME_KEY: &str = "MICROSERVICE_VOLUME";

/// Development mode settings for one session.
///
/// Every field is stored as a string so readers can export the record
/// straight into a container environment. Empty strings mean "not set".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevEnvironmentRecord {
    #[serde(rename = "ARMADA_DEVELOP", with = "flag")]
    pub enabled: bool,
    #[serde(rename = "MICROSERVICE_NAME", default)]
    pub microservice_name: String,
    #[serde(rename = "MICROSERVICE_DYNAMIC_PORTS", with = "flag", default)]
    pub dynamic_ports: bool,
    #[serde(rename = "MICROSERVICE_VOLUME", default)]
    pub volume: String,
}

impl DevEnvironmentRecord {
    pub fn new(
        microservice_name: impl Into<String>,
        dynamic_ports: bool,
        volume: impl Into<String>,
    ) -> Self {
        Self {
            enabled: true,
            microservice_name: microservice_name.into(),
            dynamic_ports,
            volume: volume.into(),
        }
    }

    /// How collaborators should expose this service's ports.
    pub fn port_mode(&self) -> PortMode {
        PortMode::resolve(&self.microservice_name, self.dynamic_ports)
    }

    /// The record as environment variable pairs, in wire order.
    pub fn env_pairs(&self) -> [(&'static str, String); 4] {
        [
            (ENABLED_KEY, flag::encode(self.enabled).to_string()),
            (NAME_KEY, self.microservice_name.clone()),
            (DYNAMIC_PORTS_KEY, flag::encode(self.dynamic_ports).to_string()),
            (VOLUME_KEY, self.volume.clone()),
        ]
    }
}

/// `"1"` / `"0"` on the wire; lenient when reading.
mod flag {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn encode(value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }

    pub fn serialize<S: Serializer>(value: &bool, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(encode(*value))
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        match Raw::deserialize(d)? {
            Raw::Bool(b) => Ok(b),
            Raw::Int(n) => Ok(n != 0),
            Raw::Text(s) => match s.trim() {
                "1" | "true" | "True" => Ok(true),
                "0" | "false" | "False" | "" => Ok(false),
                other => Err(D::Error::custom(format!("invalid flag value '{other}'"))),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Enable / disable results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct EnableRequest {
    pub microservice_name: Option<String>,
    pub dynamic_ports: bool,
    pub volume: Option<PathBuf>,
    /// Directory the command was run from. Only used for the name advisory.
    pub working_dir: Option<PathBuf>,
}

/// The working directory name differs from the microservice name.
/// Informational only; the record is written regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameMismatch {
    pub directory_name: String,
    pub microservice_name: String,
}

impl fmt::Display for NameMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current working directory name \"{}\" does not match microservice name \"{}\".",
            self.directory_name, self.microservice_name
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnableReport {
    pub path: PathBuf,
    pub record: DevEnvironmentRecord,
    pub port_mode: PortMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_mismatch: Option<NameMismatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisableOutcome {
    Removed,
    AlreadyAbsent,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Reads and writes the development record of one session scope.
#[derive(Debug, Clone)]
pub struct DevEnvironmentStore {
    state_dir: PathBuf,
    scope: SessionScope,
}

impl DevEnvironmentStore {
    pub fn new(state_dir: impl Into<PathBuf>, scope: SessionScope) -> Self {
        Self {
            state_dir: state_dir.into(),
            scope,
        }
    }

    pub fn for_current_session(config: &Config) -> Result<Self> {
        Ok(Self::new(&config.state_dir, SessionScope::current()?))
    }

    pub fn scope(&self) -> SessionScope {
        self.scope
    }

    pub fn locate(&self) -> PathBuf {
        paths::record_path(&self.state_dir, self.scope)
    }

    /// Write a fresh record, replacing whatever this session had before.
    pub fn enable(&self, req: &EnableRequest) -> Result<EnableReport> {
        let volume = match req.volume.as_deref() {
            Some(v) => v
                .to_str()
                .ok_or_else(|| ArmadaError::NonUtf8Path(v.to_path_buf()))?
                .to_string(),
            None => String::new(),
        };
        let record = DevEnvironmentRecord::new(
            req.microservice_name.clone().unwrap_or_default(),
            req.dynamic_ports,
            volume,
        );
        let name_mismatch = req
            .working_dir
            .as_deref()
            .and_then(|dir| name_mismatch(dir, &record.microservice_name));

        let path = self.locate();
        let data = serde_json::to_vec(&record)?;
        io::atomic_write(&path, &data)?;
        tracing::debug!(
            path = %path.display(),
            session = %self.scope,
            microservice = %record.microservice_name,
            "development record written"
        );

        Ok(EnableReport {
            path,
            port_mode: record.port_mode(),
            record,
            name_mismatch,
        })
    }

    pub fn disable(&self) -> Result<DisableOutcome> {
        let path = self.locate();
        let outcome = if io::remove_if_exists(&path)? {
            DisableOutcome::Removed
        } else {
            DisableOutcome::AlreadyAbsent
        };
        tracing::debug!(path = %path.display(), ?outcome, "development record cleared");
        Ok(outcome)
    }

    /// Current record, or `None` when development mode is off.
    pub fn load(&self) -> Result<Option<DevEnvironmentRecord>> {
        let path = self.locate();
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ArmadaError::Read { path, source }),
        };
        let record = serde_json::from_slice(&data)
            .map_err(|source| ArmadaError::CorruptRecord { path, source })?;
        Ok(Some(record))
    }

    pub fn is_enabled(&self) -> Result<bool> {
        Ok(self.load()?.is_some_and(|r| r.enabled))
    }
}

fn name_mismatch(working_dir: &Path, microservice_name: &str) -> Option<NameMismatch> {
    let directory_name = paths::dir_name(working_dir);
    (directory_name != microservice_name).then(|| NameMismatch {
        directory_name,
        microservice_name: microservice_name.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
