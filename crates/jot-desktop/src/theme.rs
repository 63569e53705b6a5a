//! Theme resolution and color palettes for the desktop shell.

use std::sync::OnceLock;

pub use jot_core::models::ThemeMode;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Value for the root `data-theme` attribute, also used as the CSS hook.
    #[must_use]
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if is_system_dark_mode() {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Detect system dark mode preference (cached after first call; the
/// detection spawns a subprocess on some platforms)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let output = Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let is_dark = stdout.contains("0x0");
            tracing::debug!(
                "System theme detected: {}",
                if is_dark { "dark" } else { "light" }
            );
            is_dark
        }
        Err(error) => {
            tracing::warn!(
                "Failed to detect system theme: {}. Defaulting to light mode.",
                error
            );
            false
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let is_dark = stdout.trim().eq_ignore_ascii_case("dark");
            tracing::debug!(
                "System theme detected: {}",
                if is_dark { "dark" } else { "light" }
            );
            is_dark
        }
        Err(error) => {
            tracing::warn!(
                "Failed to detect system theme: {}. Defaulting to light mode.",
                error
            );
            false
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_system_dark_mode() -> bool {
    if let Ok(theme) = std::env::var("GTK_THEME") {
        let is_dark = theme.to_lowercase().contains("dark");
        tracing::debug!(
            "System theme detected from GTK_THEME: {}",
            if is_dark { "dark" } else { "light" }
        );
        is_dark
    } else {
        tracing::debug!("GTK_THEME not set, defaulting to light mode");
        false
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn detect_system_dark_mode() -> bool {
    tracing::debug!("Unsupported platform for system theme detection, defaulting to light mode");
    false
}

/// Cycle order for the quick theme shortcut.
#[must_use]
pub const fn next_theme_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::Light => ThemeMode::Dark,
        ThemeMode::Dark => ThemeMode::System,
        ThemeMode::System => ThemeMode::Light,
    }
}

/// Label shown when announcing a theme change.
#[must_use]
pub const fn theme_mode_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
        ThemeMode::System => "System",
    }
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)] // Full palette defined for completeness, not all used yet
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_raised: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub accent_text: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#fafafa",
    bg_secondary: "#f0f1f3",
    bg_raised: "#ffffff",
    text_primary: "#1f2328",
    text_secondary: "#57606a",
    text_muted: "#8c959f",
    border: "#d0d7de",
    accent: "#0969da",
    accent_hover: "#0550ae",
    accent_text: "#ffffff",
    success: "#1a7f37",
    error: "#cf222e",
    warning: "#9a6700",
    info: "#0969da",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#0d1117",
    bg_secondary: "#161b22",
    bg_raised: "#1c2128",
    text_primary: "#e6edf3",
    text_secondary: "#8d96a0",
    text_muted: "#6e7681",
    border: "#30363d",
    accent: "#4493f8",
    accent_hover: "#79b8ff",
    accent_text: "#0d1117",
    success: "#3fb950",
    error: "#f85149",
    warning: "#d29922",
    info: "#58a6ff",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_skip_system_detection() {
        assert_eq!(resolve_theme(ThemeMode::Light), ResolvedTheme::Light);
        assert_eq!(resolve_theme(ThemeMode::Dark), ResolvedTheme::Dark);
    }

    #[test]
    fn theme_cycle_visits_every_mode() {
        let mut mode = ThemeMode::Light;
        let mut seen = Vec::new();
        for _ in 0..3 {
            mode = next_theme_mode(mode);
            seen.push(mode);
        }
        assert!(seen.contains(&ThemeMode::Light));
        assert!(seen.contains(&ThemeMode::Dark));
        assert!(seen.contains(&ThemeMode::System));
    }

    #[test]
    fn palettes_differ_between_themes() {
        assert_ne!(
            ResolvedTheme::Light.palette().bg_primary,
            ResolvedTheme::Dark.palette().bg_primary
        );
    }
}
