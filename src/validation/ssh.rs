//! # SSH Validation
//!
//! Checks the machine inventory for the wks-ssh track.

use crate::error::ConfigError;
use crate::spec::{non_empty, MachineRole, SshConfig};

use super::primitives::validate_file_exists;

/// Validate sshConfig
///
/// Every machine's role is checked before the master/worker counts, so a
/// missing or unknown role is reported even when it also leaves the set
/// without a master.
pub fn check_required_ssh_values(ssh: &SshConfig) -> Result<(), ConfigError> {
    if ssh.machines.is_empty() {
        return Err(ConfigError::MissingField(
            "No machine information provided".to_string(),
        ));
    }

    let mut masters = 0usize;
    let mut workers = 0usize;

    for machine in &ssh.machines {
        if machine.role.is_empty() {
            return Err(ConfigError::MissingField(
                "A role ('master' or 'worker') must be specified for each machine".to_string(),
            ));
        }

        match MachineRole::parse(&machine.role) {
            Some(MachineRole::Master) => masters += 1,
            Some(MachineRole::Worker) => workers += 1,
            None => {
                return Err(ConfigError::InvalidEnum(format!(
                    "Invalid machine role: '{}'. Only 'master' and 'worker' are valid.",
                    machine.role
                )));
            }
        }
    }

    if masters < 1 || workers < 1 {
        return Err(ConfigError::CountConstraint(
            "Invalid machine set. At least one master and one worker must be specified."
                .to_string(),
        ));
    }

    if let Some(path) = non_empty(ssh.ssh_key_file.as_ref()) {
        validate_file_exists(path, "sshKeyFile")?;
    }

    Ok(())
}
