//! # SSH Defaults
//!
//! Access settings and per-machine addressing for the wks-ssh track.

use tracing::warn;

use crate::constants::{
    DEFAULT_SSH_KEY_RELATIVE_PATH, DEFAULT_SSH_PORT, DEFAULT_SSH_USER, ENV_HOME,
};
use crate::env::Environment;
use crate::spec::{non_empty, SshConfig};

/// Default SSH access settings and per-machine addressing
///
/// The key file defaults to `$HOME/.ssh/id_rsa`. Ports default to 22 and a
/// machine without a private address uses its public one.
pub fn set_default_ssh_values<E: Environment + ?Sized>(ssh: &mut SshConfig, env: &E) {
    if non_empty(ssh.ssh_user.as_ref()).is_none() {
        warn!("sshUser not set, defaulting to {}", DEFAULT_SSH_USER);
        ssh.ssh_user = Some(DEFAULT_SSH_USER.to_string());
    }

    if non_empty(ssh.ssh_key_file.as_ref()).is_none() {
        let home = env.var(ENV_HOME).unwrap_or_default();
        let key_file = format!("{home}/{DEFAULT_SSH_KEY_RELATIVE_PATH}");
        warn!("sshKeyFile not set, defaulting to {}", key_file);
        ssh.ssh_key_file = Some(key_file);
    }

    for (index, machine) in ssh.machines.iter_mut().enumerate() {
        if machine.public_port.is_none() || machine.private_port.is_none() {
            warn!("machines[{}] ports not set, defaulting to {}", index, DEFAULT_SSH_PORT);
            machine.public_port.get_or_insert(DEFAULT_SSH_PORT);
            machine.private_port.get_or_insert(DEFAULT_SSH_PORT);
        }
        if non_empty(machine.private_address.as_ref()).is_none() {
            warn!(
                "machines[{}].privateAddress not set, defaulting to {}",
                index, machine.public_address
            );
            machine.private_address = Some(machine.public_address.clone());
        }
    }
}
