use thiserror::Error;

/// Failures internal to the platform adapters.
///
/// None of these ever cross the bridge API; a failed platform call folds
/// into the absence sentinel or a default status so that callers can check
/// plain return values uniformly.
#[derive(Debug, Error)]
pub enum Error {
    /// The current platform has no native location stack.
    #[error("geolocation is not supported on this platform")]
    NotSupported,

    /// The Android VM or activity could not be reached.
    #[cfg(target_os = "android")]
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
