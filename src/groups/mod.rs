//! Function group table
//!
//! Groups are emitted in declaration order. Lookup is exact and
//! case-sensitive; the first group listing a name wins.

/// One output section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// Stable identifier
    pub key: &'static str,
    /// Section title printed in the banner
    pub title: &'static str,
    /// Function names that belong to this section
    pub members: &'static [&'static str],
}

impl Group {
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(&name)
    }
}

/// Where a function ends up in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Index into the group table
    Group(usize),
    Uncategorized,
}

/// Banner title for functions no group claims
pub const UNCATEGORIZED_TITLE: &str = "UNCATEGORIZED FUNCTIONS";

/// Banner title for relocated loader, source and trap lines
pub const DEPENDENCY_LOADING_TITLE: &str = "DEPENDENCY LOADING";

/// Functions that are similar on purpose and never reported as duplicates
pub const EXCLUDE_FROM_DEDUP: &[&str] = &["_load_vars_file", "_load_vars_file_to_map"];

/// Static group table, in output order
pub const FUNCTION_GROUPS: &[Group] = &[
    Group {
        key: "CORE_INIT",
        title: "CORE INITIALIZATION & VARIABLES",
        members: &["variables"],
    },
    // Filled by the bootstrap block, never by functions
    Group {
        key: "DEPENDENCIES",
        title: DEPENDENCY_LOADING_TITLE,
        members: &[],
    },
    Group {
        key: "VALIDATION",
        title: "SYSTEM VALIDATION & CHECKS",
        members: &[
            "maxkeys_check",
            "check_container_resources",
            "check_container_storage",
            "check_nvidia_host_setup",
            "check_storage_support",
        ],
    },
    Group {
        key: "NETWORK",
        title: "NETWORK & IP MANAGEMENT",
        members: &["get_current_ip", "update_motd_ip"],
    },
    Group {
        key: "SSH",
        title: "SSH KEY MANAGEMENT",
        members: &[
            "find_host_ssh_keys",
            "ssh_discover_default_files",
            "ssh_extract_keys_from_file",
            "ssh_build_choices_from_files",
            "configure_ssh_settings",
            "install_ssh_keys_into_ct",
        ],
    },
    Group {
        key: "SETTINGS",
        title: "SETTINGS & CONFIGURATION",
        members: &[
            "base_settings",
            "echo_default",
            "exit_script",
            "advanced_settings",
            "diagnostics_check",
            "diagnostics_menu",
            "default_var_settings",
            "ensure_global_default_vars_file",
            "settings_menu",
            "edit_default_storage",
        ],
    },
    Group {
        key: "DEFAULTS",
        title: "DEFAULTS MANAGEMENT (VAR_* FILES)",
        members: &[
            "get_app_defaults_path",
            "_is_whitelisted_key",
            "_sanitize_value",
            "_load_vars_file",
            "_load_vars_file_to_map",
            "_build_vars_diff",
            "_build_current_app_vars_tmp",
            "maybe_offer_save_app_defaults",
            "ensure_storage_selection_for_vars_file",
        ],
    },
    Group {
        key: "STORAGE",
        title: "STORAGE DISCOVERY & SELECTION",
        members: &[
            "resolve_storage_preselect",
            "select_storage",
            "choose_and_set_storage_for_file",
            "_write_storage_to_vars",
        ],
    },
    Group {
        key: "GPU",
        title: "GPU & HARDWARE PASSTHROUGH",
        members: &[
            "is_gpu_app",
            "detect_gpu_devices",
            "configure_gpu_passthrough",
            "configure_usb_passthrough",
            "configure_additional_devices",
            "fix_gpu_gids",
            "get_container_gid",
        ],
    },
    Group {
        key: "CONTAINER",
        title: "CONTAINER LIFECYCLE & CREATION",
        members: &[
            "create_lxc_container",
            "offer_lxc_stack_upgrade_and_maybe_retry",
            "parse_template_osver",
            "pkg_ver",
            "pkg_cand",
            "ver_ge",
            "ver_gt",
            "ver_lt",
            "build_container",
            "destroy_lxc",
            "description",
        ],
    },
    Group {
        key: "MAIN",
        title: "MAIN ENTRY POINTS & ERROR HANDLING",
        members: &["install_script", "start", "api_exit_script"],
    },
];

/// Classify `name` against an ordered table
pub fn classify_in(table: &[Group], name: &str) -> Classification {
    table
        .iter()
        .position(|group| group.contains(name))
        .map(Classification::Group)
        .unwrap_or(Classification::Uncategorized)
}

/// Classify `name` against the built-in table
pub fn classify(name: &str) -> Classification {
    classify_in(FUNCTION_GROUPS, name)
}

/// Key of the group `name` belongs to, or `None` when uncategorized
pub fn group_key(name: &str) -> Option<&'static str> {
    match classify(name) {
        Classification::Group(index) => Some(FUNCTION_GROUPS[index].key),
        Classification::Uncategorized => None,
    }
}
