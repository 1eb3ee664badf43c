//! Configuration types for loading run settings from YAML.
//!
//! The body set is fixed, so a configuration only carries the numerical
//! parameters:
//!
//! - [`ParametersConfig`] – step size and momentum reference body
//! - [`SimulationConfig`] – top-level wrapper used to load a run from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 0.01            # step size
//!   reference: "sun"    # body whose velocity is set to -p / m
//! ```
//!
//! Every field is optional and defaults to the benchmark settings above.
//! Unknown keys are rejected so that typos do not silently fall back.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::bodies::{body_index, BODY_NAMES, SUN};
use crate::simulation::params::{Parameters, DEFAULT_DT};

/// Numerical parameters for a run
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersConfig {
    pub dt: f64, // time step size
    pub reference: String, // body whose velocity is set to -p / m, by name
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            reference: BODY_NAMES[SUN].to_string(),
        }
    }
}

/// Top-level run configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub parameters: ParametersConfig,
}

impl SimulationConfig {
    /// Read and parse a YAML file
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let file = File::open(path).map_err(|source| SimError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).map_err(|source| SimError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse from an in-memory YAML string
    pub fn from_yaml(text: &str) -> Result<Self, SimError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Validate into runtime parameters
    pub fn to_parameters(&self) -> Result<Parameters, SimError> {
        let reference = body_index(&self.parameters.reference)?;
        Parameters::new(self.parameters.dt, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = SimulationConfig::from_yaml("{}").unwrap();
        assert_eq!(cfg, SimulationConfig::default());
        assert_eq!(cfg.to_parameters().unwrap(), Parameters::default());
    }

    #[test]
    fn partial_parameters_keep_other_defaults() {
        let cfg = SimulationConfig::from_yaml("parameters:\n  reference: Jupiter\n").unwrap();
        let p = cfg.to_parameters().unwrap();
        assert_eq!(p.reference, 1);
        assert_eq!(p.dt, DEFAULT_DT);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            SimulationConfig::from_yaml("parameters:\n  h0: 0.5\n"),
            Err(SimError::Parse(_))
        ));
    }

    #[test]
    fn zero_step_is_invalid() {
        let cfg = SimulationConfig::from_yaml("parameters:\n  dt: 0.0\n").unwrap();
        assert!(matches!(cfg.to_parameters(), Err(SimError::InvalidTimeStep(_))));
    }

    #[test]
    fn unknown_body_is_invalid() {
        let cfg = SimulationConfig::from_yaml("parameters:\n  reference: pluto\n").unwrap();
        assert!(matches!(cfg.to_parameters(), Err(SimError::UnknownBody(name)) if name == "pluto"));
    }
}
