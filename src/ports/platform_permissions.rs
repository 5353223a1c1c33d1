use crate::global_constants::LOG_TAG_PERMISSIONS;

#[cfg(target_os = "macos")]
pub mod macos {
    use std::ffi::CString;

    use crate::global_constants::LOG_TAG_PERMISSIONS;

    const CORE_GRAPHICS_PATH: &str = "/System/Library/Frameworks/CoreGraphics.framework/CoreGraphics";
    const APPLICATION_SERVICES_PATH: &str =
        "/System/Library/Frameworks/ApplicationServices.framework/ApplicationServices";

    /// Looks up a zero-argument `bool` function in a system framework and calls it.
    /// Returns `None` when the framework or symbol is unavailable.
    fn call_framework_predicate(framework_path: &str, symbol: &str) -> Option<bool> {
        let framework_path = CString::new(framework_path).ok()?;
        let symbol_name = CString::new(symbol).ok()?;

        unsafe {
            let lib = libc::dlopen(framework_path.as_ptr(), libc::RTLD_LAZY);
            if lib.is_null() {
                log::warn!(
                    "{} Could not load framework {:?}",
                    LOG_TAG_PERMISSIONS,
                    framework_path
                );
                return None;
            }

            let func_ptr = libc::dlsym(lib, symbol_name.as_ptr());
            if func_ptr.is_null() {
                libc::dlclose(lib);
                log::warn!("{} Could not find {}", LOG_TAG_PERMISSIONS, symbol);
                return None;
            }

            type PredicateFn = unsafe extern "C" fn() -> bool;
            let predicate: PredicateFn = std::mem::transmute(func_ptr);
            let result = predicate();

            libc::dlclose(lib);
            Some(result)
        }
    }

    pub fn check_screen_recording_permission() -> bool {
        log::info!(
            "{} Checking screen recording permission",
            LOG_TAG_PERMISSIONS
        );

        call_framework_predicate(CORE_GRAPHICS_PATH, "CGPreflightScreenCaptureAccess")
            .unwrap_or(false)
    }

    pub fn check_accessibility_permission() -> bool {
        log::info!("{} Checking accessibility permission", LOG_TAG_PERMISSIONS);

        call_framework_predicate(APPLICATION_SERVICES_PATH, "AXIsProcessTrusted").unwrap_or(true)
    }
}

#[cfg(not(target_os = "macos"))]
pub mod macos {
    pub fn check_screen_recording_permission() -> bool {
        true
    }

    pub fn check_accessibility_permission() -> bool {
        true
    }
}

/// Warns about missing OS permissions. Capture still proceeds: without screen
/// recording access macOS returns the wallpaper instead of an error, and without
/// accessibility access injected input is silently dropped.
pub fn warn_on_missing_permissions() {
    if !macos::check_screen_recording_permission() {
        log::warn!(
            "{} Screen recording permission not granted, grant it in System Settings > Privacy & Security > Screen Recording",
            LOG_TAG_PERMISSIONS
        );
    }

    if !macos::check_accessibility_permission() {
        log::warn!(
            "{} Accessibility permission not granted, page advance input will be ignored",
            LOG_TAG_PERMISSIONS
        );
    }
}
