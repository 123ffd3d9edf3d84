//! Built-in project defaults
//!
//! Used when neither a config file, the environment, nor the command line
//! names a project directory or file list.

/// Project directory used when nothing else is configured
pub const DEFAULT_PROJECT_DIR: &str = "/Users/henryfritz/Personal Projects/PrestigeNative";

/// Files opened when nothing else is configured, in processing order
pub const DEFAULT_FILES: &[&str] = &[
    "PrestigeNative/Core/Models/APIEndpoints.swift",
    "PrestigeNative/Core/Models/APIModels.swift",
    "PrestigeNative/Core/Models/PrestigeModels.swift",
    "PrestigeNative/Core/Models/UserModels.swift",
    "PrestigeNative/Core/Networking/APIClient.swift",
    "PrestigeNative/Core/Networking/AuthManager.swift",
    "PrestigeNative/Core/Networking/Services/FriendsService.swift",
    "PrestigeNative/Core/Networking/Services/ProfileService.swift",
    "PrestigeNative/Core/Networking/Services/SpotifyService.swift",
    "PrestigeNative/Features/Authentication/Components/LoadingButton.swift",
    "PrestigeNative/Features/Authentication/ViewModels/LoginViewModel.swift",
    "PrestigeNative/Features/Authentication/Views/AuthenticationView.swift",
    "PrestigeNative/Features/Authentication/Views/LoginView.swift",
];

/// Project config file name looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = "xcadd.toml";
