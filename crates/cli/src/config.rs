use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shm_core::{DampedParams, InvalidArgument, OscillatorParams, PendulumParams, TimeGrid};
use shm_solvers::sweep::{SweepMode, SweepRange};

use crate::error::CliError;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "shm.toml";

/// Parameters for every scenario the driver can run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub time: TimeConfig,
    pub oscillator: OscillatorConfig,
    pub pendulum: PendulumConfig,
    pub damped: DampedConfig,
    pub sweep: SweepConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Duration in seconds.
    pub t_max: f64,
    pub samples: usize,
    /// Multiple of the initial amplitude beyond which integration is flagged.
    pub instability_factor: f64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            t_max: 20.0,
            samples: 1000,
            instability_factor: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorConfig {
    pub stiffness: f64,
    pub mass: f64,
    pub amplitude: f64,
    pub phase: f64,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            mass: 1.0,
            amplitude: 0.2,
            phase: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumConfig {
    pub length: f64,
    pub gravity: f64,
    /// Initial angle in degrees.
    pub theta0_deg: f64,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            length: 1.0,
            gravity: 9.81,
            theta0_deg: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DampedConfig {
    pub stiffness: f64,
    pub mass: f64,
    pub amplitude: f64,
    pub zeta: f64,
}

impl Default for DampedConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            mass: 1.0,
            amplitude: 0.2,
            zeta: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub samples: usize,
    pub stiffness: StiffnessSweep,
    pub mass: MassSweep,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            samples: SweepRange::DEFAULT_SAMPLES,
            stiffness: StiffnessSweep::default(),
            mass: MassSweep::default(),
        }
    }
}

/// Sweep of `k` with the mass held fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StiffnessSweep {
    pub mass: f64,
    pub k_min: f64,
    pub k_max: f64,
}

impl Default for StiffnessSweep {
    fn default() -> Self {
        Self {
            mass: 1.0,
            k_min: 50.0,
            k_max: 500.0,
        }
    }
}

/// Sweep of `m` with the stiffness held fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MassSweep {
    pub stiffness: f64,
    pub m_min: f64,
    pub m_max: f64,
}

impl Default for MassSweep {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            m_min: 0.5,
            m_max: 10.0,
        }
    }
}

impl ScenarioConfig {
    /// Loads the configuration.
    ///
    /// With an explicit `path`, the file must exist and parse. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is used if present and defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] if a file that should be read cannot be read or
    /// parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    tracing::info!("{DEFAULT_CONFIG_FILE} not found, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| CliError::Parse {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses a configuration from TOML; omitted keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn grid(&self) -> Result<TimeGrid, InvalidArgument> {
        TimeGrid::new(self.time.t_max, self.time.samples)
    }

    pub fn oscillator(&self) -> Result<OscillatorParams, InvalidArgument> {
        let c = &self.oscillator;
        OscillatorParams::new(c.stiffness, c.mass, c.amplitude, c.phase)
    }

    pub fn pendulum(&self) -> Result<PendulumParams, InvalidArgument> {
        let c = &self.pendulum;
        PendulumParams::from_degrees(c.length, c.gravity, c.theta0_deg)
    }

    pub fn damped(&self) -> Result<DampedParams, InvalidArgument> {
        let c = &self.damped;
        let oscillator = OscillatorParams::new(c.stiffness, c.mass, c.amplitude, 0.0)?;
        DampedParams::new(oscillator, c.zeta)
    }

    /// Returns the mode and range for a stiffness sweep.
    pub fn stiffness_sweep(&self) -> Result<(SweepMode, SweepRange), InvalidArgument> {
        let c = &self.sweep.stiffness;
        let range = SweepRange::new(c.k_min, c.k_max, self.sweep.samples)?;
        Ok((SweepMode::VaryStiffness { mass: c.mass }, range))
    }

    /// Returns the mode and range for a mass sweep.
    pub fn mass_sweep(&self) -> Result<(SweepMode, SweepRange), InvalidArgument> {
        let c = &self.sweep.mass;
        let range = SweepRange::new(c.m_min, c.m_max, self.sweep.samples)?;
        Ok((SweepMode::VaryMass { stiffness: c.stiffness }, range))
    }
}
