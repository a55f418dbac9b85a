/*
 * This module provides utility functions for locating application-specific
 * directories. It centralizes the platform directory lookup so the config
 * loader and its tests agree on where configuration lives.
 */
use directories::ProjectDirs;
use std::path::PathBuf;

/*
 * Retrieves the application's local (non-roaming) configuration directory,
 * e.g. AppData/Local/<app> on Windows or ~/.config/<app> on Linux.
 * The directory is not created; configuration is only ever read.
 *
 * Returns `None` if no home directory can be determined for the current user.
 */
pub fn get_app_config_local_dir(app_name: &str) -> Option<PathBuf> {
    log::trace!("PathUtils: Looking up local config dir for '{app_name}'");
    let dir = ProjectDirs::from("", "", app_name)
        .map(|proj_dirs| proj_dirs.config_local_dir().to_path_buf());
    if dir.is_none() {
        log::debug!("PathUtils: No config directory available for '{app_name}'.");
    }
    dir
}
