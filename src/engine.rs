//! # Validation Engine
//!
//! Runs the validators and defaulters over a [`ClusterSpec`] in a fixed order:
//!
//! 1. global fields (resolves the track)
//! 2. git settings, when the caller asks for it
//! 3. sealed secrets key pair
//! 4. the track's own section(s)
//! 5. defaulting for the resolved track
//!
//! The first failure stops the run. Nothing is collected or retried.

use tracing::{debug, info, info_span};

use crate::defaults::{set_default_eks_values, set_default_global_values, set_default_ssh_values};
use crate::env::{Environment, ProcessEnvironment};
use crate::error::ConfigError;
use crate::spec::{ClusterSpec, Track, TrackConfig};
use crate::validation::{
    check_required_eks_values, check_required_footloose_values, check_required_git_values,
    check_required_global_values, check_required_ssh_values, check_required_wks_values,
    validate_sealed_secrets_values,
};

/// Caller-controlled switches for a validation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Run the git settings validator
    pub validate_git: bool,
}

impl ValidationOptions {
    /// Validate git settings only when the document mentions a provider or URL
    pub fn from_git_intent(spec: &ClusterSpec) -> Self {
        Self {
            validate_git: spec.declares_git_intent(),
        }
    }
}

/// Progress of a validation run
///
/// Every stage after `Loaded` carries the track resolved by the global checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loaded,
    GlobalsChecked(Track),
    GitChecked(Track),
    SecretsChecked(Track),
    TrackChecked(Track),
    Defaulted(Track),
    /// Failed; the error is held by the [`Validation`] that was rejected
    Rejected,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Defaulted(_) | Stage::Rejected)
    }

    pub fn track(&self) -> Option<Track> {
        match self {
            Stage::Loaded | Stage::Rejected => None,
            Stage::GlobalsChecked(track)
            | Stage::GitChecked(track)
            | Stage::SecretsChecked(track)
            | Stage::TrackChecked(track)
            | Stage::Defaulted(track) => Some(*track),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Loaded => "loaded",
            Stage::GlobalsChecked(_) => "globals-checked",
            Stage::GitChecked(_) => "git-checked",
            Stage::SecretsChecked(_) => "secrets-checked",
            Stage::TrackChecked(_) => "track-checked",
            Stage::Defaulted(_) => "defaulted",
            Stage::Rejected => "rejected",
        }
    }
}

/// A single validation run over a borrowed specification
///
/// Drive it with [`Validation::step`] to observe each transition, or
/// [`Validation::run`] to go straight to a terminal stage.
pub struct Validation<'a, E: Environment + ?Sized> {
    spec: &'a mut ClusterSpec,
    env: &'a E,
    options: ValidationOptions,
    stage: Stage,
    rejection: Option<ConfigError>,
}

impl<E: Environment + ?Sized> std::fmt::Debug for Validation<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validation")
            .field("stage", &self.stage)
            .field("options", &self.options)
            .field("rejection", &self.rejection)
            .finish_non_exhaustive()
    }
}

impl<'a, E: Environment + ?Sized> Validation<'a, E> {
    pub fn new(spec: &'a mut ClusterSpec, env: &'a E, options: ValidationOptions) -> Self {
        Self {
            spec,
            env,
            options,
            stage: Stage::Loaded,
            rejection: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The error that rejected this run, if any
    pub fn rejection(&self) -> Option<&ConfigError> {
        self.rejection.as_ref()
    }

    /// Perform one transition
    ///
    /// On failure the run moves to [`Stage::Rejected`] and keeps the error.
    /// Stepping a rejected run returns that error again; stepping a defaulted
    /// run does nothing.
    pub fn step(&mut self) -> Result<Stage, ConfigError> {
        if let Some(e) = &self.rejection {
            return Err(e.clone());
        }

        match self.advance() {
            Ok(next) => {
                debug!("Validation stage: {}", next.as_str());
                self.stage = next;
                Ok(next)
            }
            Err(e) => {
                debug!("Validation rejected after {}: {}", self.stage.as_str(), e);
                self.stage = Stage::Rejected;
                self.rejection = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Step until a terminal stage, returning the resolved track
    pub fn run(mut self) -> Result<Track, ConfigError> {
        loop {
            if let Stage::Defaulted(track) = self.step()? {
                return Ok(track);
            }
        }
    }

    fn advance(&mut self) -> Result<Stage, ConfigError> {
        let spec = &mut *self.spec;
        Ok(match self.stage {
            Stage::Loaded => Stage::GlobalsChecked(check_required_global_values(spec)?),
            Stage::GlobalsChecked(track) => {
                if self.options.validate_git {
                    check_required_git_values(spec)?;
                }
                Stage::GitChecked(track)
            }
            Stage::GitChecked(track) => {
                validate_sealed_secrets_values(spec)?;
                Stage::SecretsChecked(track)
            }
            Stage::SecretsChecked(track) => {
                check_track_values(spec.track_config(track))?;
                Stage::TrackChecked(track)
            }
            Stage::TrackChecked(track) => {
                apply_defaults(spec, track, self.env);
                Stage::Defaulted(track)
            }
            terminal @ (Stage::Defaulted(_) | Stage::Rejected) => terminal,
        })
    }
}

/// Validate the sections a track reads
pub fn check_track_values(config: TrackConfig<'_>) -> Result<(), ConfigError> {
    match config {
        TrackConfig::Eks(eks) => check_required_eks_values(eks),
        TrackConfig::WksSsh { wks, ssh } => {
            check_required_wks_values(wks)?;
            check_required_ssh_values(ssh)
        }
        TrackConfig::WksFootloose { wks, footloose } => {
            check_required_wks_values(wks)?;
            check_required_footloose_values(footloose).map(|_| ())
        }
    }
}

/// Run the global defaulter and the one belonging to `track`
pub fn apply_defaults<E: Environment + ?Sized>(spec: &mut ClusterSpec, track: Track, env: &E) {
    set_default_global_values(spec, env);
    match track {
        Track::Eks => set_default_eks_values(&mut spec.eks_config),
        Track::WksSsh => set_default_ssh_values(&mut spec.wks_config.ssh_config, env),
        Track::WksFootloose => {}
    }
}

/// Validates and defaults cluster specifications
///
/// Holds no state between calls; one engine can serve any number of
/// specifications.
#[derive(Debug, Clone)]
pub struct Engine<E: Environment = ProcessEnvironment> {
    env: E,
    options: ValidationOptions,
}

impl Default for Engine<ProcessEnvironment> {
    fn default() -> Self {
        Self::new(ProcessEnvironment)
    }
}

impl<E: Environment> Engine<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            options: ValidationOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Validate `spec` and apply defaults in place
    pub fn validate_in_place(&self, spec: &mut ClusterSpec) -> Result<Track, ConfigError> {
        let span = info_span!("validate", track = %spec.track);
        let _guard = span.enter();

        let track = Validation::new(spec, &self.env, self.options).run()?;
        info!(
            "Cluster configuration valid: track={}, clusterName={}",
            track, spec.cluster_name
        );
        Ok(track)
    }

    /// Validate `spec`, returning it with defaults applied
    pub fn validate(&self, mut spec: ClusterSpec) -> Result<ClusterSpec, ConfigError> {
        self.validate_in_place(&mut spec)?;
        Ok(spec)
    }
}

/// Validate and default `spec` against the process environment
pub fn validate(
    spec: ClusterSpec,
    options: ValidationOptions,
) -> Result<ClusterSpec, ConfigError> {
    Engine::<ProcessEnvironment>::default().with_options(options).validate(spec)
}
