//! Android backend via JNI against the framework location classes
//!
//! No Java shim is involved: permission state comes from
//! `Activity.checkSelfPermission`, the prompt from
//! `Activity.requestPermissions`, and the cached fix from
//! `LocationManager.getLastKnownLocation`. The activity and VM are reached
//! through `ndk-context`.

use jni::objects::{JObject, JValue};
use jni::{JNIEnv, JavaVM};

use crate::{AuthorizationStatus, Result};

const PERMISSION_GRANTED: i32 = 0;
const REQUEST_CODE: i32 = 1001;

const COARSE: &str = "android.permission.ACCESS_COARSE_LOCATION";
const FINE: &str = "android.permission.ACCESS_FINE_LOCATION";
#[cfg(feature = "background-location")]
const BACKGROUND: &str = "android.permission.ACCESS_BACKGROUND_LOCATION";

/// Attach to the VM and run `f` with the env and current activity.
fn with_activity<R>(f: impl FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> Option<R>) -> Option<R> {
    match try_with_activity(f) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("android location bridge unavailable: {err}");
            None
        }
    }
}

fn try_with_activity<R>(
    f: impl FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> Option<R>,
) -> Result<Option<R>> {
    let ctx = ndk_context::android_context();
    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }?;
    let mut guard = vm.attach_current_thread()?;
    let env = &mut *guard;
    let activity = unsafe { JObject::from_raw(ctx.context().cast()) };
    Ok(f(env, &activity))
}

fn clear_pending_exception(env: &mut JNIEnv<'_>) {
    if matches!(env.exception_check(), Ok(true)) {
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
}

fn check_permission(env: &mut JNIEnv<'_>, activity: &JObject<'_>, permission: &str) -> Option<bool> {
    let permission = env.new_string(permission).ok()?;
    let status = match env.call_method(
        activity,
        "checkSelfPermission",
        "(Ljava/lang/String;)I",
        &[JValue::Object(&permission)],
    ) {
        Ok(result) => result.i().ok()?,
        Err(_) => {
            clear_pending_exception(env);
            return Some(false);
        }
    };

    Some(status == PERMISSION_GRANTED)
}

fn has_foreground_permission(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> Option<bool> {
    #[allow(unused_mut)]
    let mut has_permission = false;

    #[cfg(feature = "location-fine")]
    {
        has_permission |= check_permission(env, activity, FINE)?;
    }

    #[cfg(feature = "location-coarse")]
    {
        has_permission |= check_permission(env, activity, COARSE)?;
    }

    #[cfg(not(any(feature = "location-fine", feature = "location-coarse")))]
    {
        has_permission = true;
    }

    Some(has_permission)
}

fn permission_names() -> Vec<&'static str> {
    #[allow(unused_mut)]
    let mut names = Vec::new();

    #[cfg(feature = "location-coarse")]
    names.push(COARSE);

    #[cfg(feature = "location-fine")]
    names.push(FINE);

    #[cfg(feature = "background-location")]
    names.push(BACKGROUND);

    names
}

/// Get the last known location
pub fn last_known() -> Option<(f64, f64)> {
    with_activity(|env, activity| {
        if !has_foreground_permission(env, activity)? {
            return None;
        }

        let location_manager = location_manager(env, activity)?;

        let provider = env.new_string("gps").ok()?;
        let mut location = get_last_known_location(env, &location_manager, &provider)?;

        if location.is_null() {
            let fused_provider = env.new_string("fused").ok()?;
            location = get_last_known_location(env, &location_manager, &fused_provider)?;
        }

        if location.is_null() {
            return None;
        }

        let latitude = env
            .call_method(&location, "getLatitude", "()D", &[])
            .ok()?
            .d()
            .ok()?;
        let longitude = env
            .call_method(&location, "getLongitude", "()D", &[])
            .ok()?
            .d()
            .ok()?;

        Some((latitude, longitude))
    })
}

/// Present the runtime permission prompt
pub fn request_authorization() {
    let sent = with_activity(|env, activity| {
        clear_pending_exception(env);

        let names = permission_names();
        if names.is_empty() {
            return Some(false);
        }

        let permissions = env
            .new_object_array(names.len() as i32, "java/lang/String", JObject::null())
            .ok()?;
        for (index, name) in names.into_iter().enumerate() {
            let value = env.new_string(name).ok()?;
            env.set_object_array_element(&permissions, index as i32, value)
                .ok()?;
        }

        // Must run on the thread the platform designates for UI prompts;
        // the host is expected to call the bridge from there.
        if env
            .call_method(
                activity,
                "requestPermissions",
                "([Ljava/lang/String;I)V",
                &[JValue::Object(&permissions), JValue::Int(REQUEST_CODE)],
            )
            .is_err()
        {
            clear_pending_exception(env);
            return Some(false);
        }

        Some(true)
    })
    .unwrap_or(false);

    if !sent {
        log::warn!("failed to present the location permission prompt");
    }
}

/// Map the grant state onto the five-variant model.
///
/// Android cannot distinguish "never asked" from "asked and refused" here,
/// so anything short of a grant reports `NotDetermined` rather than
/// inventing a `Denied` the platform never confirmed.
pub fn authorization_status() -> AuthorizationStatus {
    with_activity(|env, activity| {
        if !has_foreground_permission(env, activity)? {
            return Some(AuthorizationStatus::NotDetermined);
        }

        #[cfg(feature = "background-location")]
        if check_permission(env, activity, BACKGROUND)? {
            return Some(AuthorizationStatus::AuthorizedAlways);
        }

        Some(AuthorizationStatus::AuthorizedWhenInUse)
    })
    .unwrap_or(AuthorizationStatus::NotDetermined)
}

/// Whether location services are enabled system-wide
pub fn services_enabled() -> bool {
    with_activity(|env, activity| {
        let location_manager = location_manager(env, activity)?;

        match env.call_method(&location_manager, "isLocationEnabled", "()Z", &[]) {
            Ok(enabled) => enabled.z().ok(),
            Err(_) => {
                clear_pending_exception(env);
                // API < 28: probe the individual providers instead.
                let gps = provider_enabled(env, &location_manager, "gps")?;
                let network = provider_enabled(env, &location_manager, "network")?;
                Some(gps || network)
            }
        }
    })
    .unwrap_or(false)
}

fn location_manager<'env>(
    env: &mut JNIEnv<'env>,
    activity: &JObject<'_>,
) -> Option<JObject<'env>> {
    let service_name = env.new_string("location").ok()?;
    env.call_method(
        activity,
        "getSystemService",
        "(Ljava/lang/String;)Ljava/lang/Object;",
        &[JValue::Object(&service_name)],
    )
    .ok()?
    .l()
    .ok()
}

fn get_last_known_location<'env>(
    env: &mut JNIEnv<'env>,
    manager: &JObject<'env>,
    provider: &JObject<'env>,
) -> Option<JObject<'env>> {
    match env.call_method(
        manager,
        "getLastKnownLocation",
        "(Ljava/lang/String;)Landroid/location/Location;",
        &[JValue::Object(provider)],
    ) {
        Ok(value) => value.l().ok(),
        Err(_) => {
            clear_pending_exception(env);
            None
        }
    }
}

fn provider_enabled(env: &mut JNIEnv<'_>, manager: &JObject<'_>, provider: &str) -> Option<bool> {
    let provider = env.new_string(provider).ok()?;
    match env.call_method(
        manager,
        "isProviderEnabled",
        "(Ljava/lang/String;)Z",
        &[JValue::Object(&provider)],
    ) {
        Ok(enabled) => enabled.z().ok(),
        Err(_) => {
            clear_pending_exception(env);
            Some(false)
        }
    }
}
