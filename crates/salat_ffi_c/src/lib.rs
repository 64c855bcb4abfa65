//! C-facing adapter for the salat prayer-time engine.
//!
//! A context is created with [`salat_context_new`], configured with the
//! `salat_set_*` calls, advanced with [`salat_step`] (one phase per call)
//! or [`salat_compute`], read with [`salat_times`] and released with
//! [`salat_context_free`].

use salat_config::{ConfigError, Method};
use salat_engine::{
    CalculationContext, HighLatitudeMode, Hms, MidnightMode, PrayerTimes, hours_to_hms,
};

/// ABI version for downstream bindings.
pub const SALAT_API_VERSION: u32 = 1;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalatStatus {
    Ok = 0,
    InvalidMethod = 1,
    InvalidDate = 2,
    InvalidLocation = 3,
    InvalidMode = 4,
    InvalidNumber = 5,
    UndefinedTime = 6,
    NullPointer = 7,
    Internal = 255,
}

impl From<&ConfigError> for SalatStatus {
    fn from(value: &ConfigError) -> Self {
        match value {
            ConfigError::UnknownMethod(_) | ConfigError::MethodCodeOutOfRange(_) => {
                Self::InvalidMethod
            }
            ConfigError::InvalidDate(_) => Self::InvalidDate,
            ConfigError::UnknownMode(_) => Self::InvalidMode,
            ConfigError::InvalidNumber(_) | ConfigError::InvalidAdjustment(_) => {
                Self::InvalidNumber
            }
            _ => Self::Internal,
        }
    }
}

/// Nine event times in decimal local hours; NaN for an event that does not
/// occur.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalatTimes {
    pub imsak: f64,
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub sunset: f64,
    pub maghrib: f64,
    pub isha: f64,
    pub midnight: f64,
}

impl From<&PrayerTimes> for SalatTimes {
    fn from(t: &PrayerTimes) -> Self {
        Self {
            imsak: t.imsak,
            fajr: t.fajr,
            sunrise: t.sunrise,
            dhuhr: t.dhuhr,
            asr: t.asr,
            sunset: t.sunset,
            maghrib: t.maghrib,
            isha: t.isha,
            midnight: t.midnight,
        }
    }
}

/// Clock time of day.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalatHms {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl From<Hms> for SalatHms {
    fn from(h: Hms) -> Self {
        Self {
            hours: h.hours,
            minutes: h.minutes,
            seconds: h.seconds,
        }
    }
}

/// Opaque context handle.
pub type SalatContextHandle = CalculationContext;

/// Validate and store observer location.
pub fn salat_set_location_internal(
    ctx: &mut CalculationContext,
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
    timezone_hours: f64,
) -> Result<(), SalatStatus> {
    let valid = (-90.0..=90.0).contains(&latitude_deg)
        && (-180.0..=180.0).contains(&longitude_deg)
        && elevation_m.is_finite()
        && elevation_m >= 0.0
        && (-14.0..=14.0).contains(&timezone_hours);
    if !valid {
        return Err(SalatStatus::InvalidLocation);
    }
    ctx.set_location(latitude_deg, longitude_deg, elevation_m, timezone_hours);
    Ok(())
}

/// Validate and store a Gregorian date.
pub fn salat_set_date_internal(
    ctx: &mut CalculationContext,
    year: i32,
    month: u32,
    day: u32,
) -> Result<(), SalatStatus> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(SalatStatus::InvalidDate);
    }
    ctx.set_date(year, month, day);
    Ok(())
}

/// Apply a method preset (code 1-7) to the context's configuration.
pub fn salat_set_method_internal(ctx: &mut CalculationContext, code: u8) -> Result<(), SalatStatus> {
    let method = Method::from_code(code).map_err(|e| SalatStatus::from(&e))?;
    method.apply(ctx.config_mut());
    Ok(())
}

pub fn salat_set_high_latitude_internal(
    ctx: &mut CalculationContext,
    code: u8,
) -> Result<(), SalatStatus> {
    let mode = HighLatitudeMode::from_code(code).ok_or(SalatStatus::InvalidMode)?;
    ctx.config_mut().high_latitude = mode;
    Ok(())
}

pub fn salat_set_midnight_internal(ctx: &mut CalculationContext, code: u8) -> Result<(), SalatStatus> {
    let mode = MidnightMode::from_code(code).ok_or(SalatStatus::InvalidMode)?;
    ctx.config_mut().midnight = mode;
    Ok(())
}

pub fn salat_set_asr_factor_internal(
    ctx: &mut CalculationContext,
    factor: f64,
) -> Result<(), SalatStatus> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(SalatStatus::InvalidNumber);
    }
    ctx.config_mut().asr_factor = factor;
    Ok(())
}

pub fn salat_hours_to_hms_internal(hours: f64) -> Result<SalatHms, SalatStatus> {
    hours_to_hms(hours)
        .map(SalatHms::from)
        .ok_or(SalatStatus::UndefinedTime)
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn salat_api_version() -> u32 {
    SALAT_API_VERSION
}

/// Create a context with default settings: MWL angles, night-middle rule,
/// zero location and timezone, date 2000-01-01.
///
/// # Safety
/// `out_ctx` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn salat_context_new(out_ctx: *mut *mut SalatContextHandle) -> SalatStatus {
    ffi_boundary(|| {
        if out_ctx.is_null() {
            return SalatStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and we only write a single pointer value.
        unsafe { *out_ctx = Box::into_raw(Box::new(CalculationContext::new())) };
        SalatStatus::Ok
    })
}

/// Destroy a context allocated by [`salat_context_new`].
///
/// # Safety
/// `ctx` must be either null or a pointer returned by `salat_context_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn salat_context_free(ctx: *mut SalatContextHandle) -> SalatStatus {
    ffi_boundary(|| {
        if ctx.is_null() {
            return SalatStatus::Ok;
        }
        // SAFETY: Ownership is transferred back from a pointer created by Box::into_raw.
        unsafe { drop(Box::from_raw(ctx)) };
        SalatStatus::Ok
    })
}

/// Set latitude/longitude (degrees), elevation (m) and UTC offset (hours).
///
/// # Safety
/// `ctx` must be a valid, non-null context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn salat_set_location(
    ctx: *mut SalatContextHandle,
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
    timezone_hours: f64,
) -> SalatStatus {
    ffi_boundary(|| {
        if ctx.is_null() {
            return SalatStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and uniquely borrowed for this call.
        let ctx_ref = unsafe { &mut *ctx };
        status_of(salat_set_location_internal(
            ctx_ref,
            latitude_deg,
            longitude_deg,
            elevation_m,
            timezone_hours,
        ))
    })
}

/// Set the Gregorian date.
///
/// # Safety
/// `ctx` must be a valid, non-null context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn salat_set_date(
    ctx: *mut SalatContextHandle,
    year: i32,
    month: u32,
    day: u32,
) -> SalatStatus {
    ffi_boundary(|| {
        if ctx.is_null() {
            return SalatStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and uniquely borrowed for this call.
        let ctx_ref = unsafe { &mut *ctx };
        status_of(salat_set_date_internal(ctx_ref, year, month, day))
    })
}

/// Apply a calculation method preset, code 1-7.
///
/// # Safety
/// `ctx` must be a valid, non-null context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn salat_set_method(ctx: *mut SalatContextHandle, code: u8) -> SalatStatus {
    ffi_boundary(|| {
        if ctx.is_null() {
            return SalatStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and uniquely borrowed for this call.
        let ctx_ref = unsafe { &mut *ctx };
        status_of(salat_set_method_internal(ctx_ref, code))
    })
}

/// Set the high-latitude rule: 0 none, 1 night middle, 2 angle based,
/// 3 one seventh.
///
/// # Safety
/// `ctx` must be a valid, non-null context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn salat_set_high_latitude(
    ctx: *mut SalatContextHandle,
    code: u8,
) -> SalatStatus {
    ffi_boundary(|| {
        if ctx.is_null() {
            return SalatStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and uniquely borrowed for this call.
        let ctx_ref = unsafe { &mut *ctx };
        status_of(salat_set_high_latitude_internal(ctx_ref, code))
    })
}

/// Set the midnight convention: 0 standard, 1 Jafari.
///
/// # Safety
/// `ctx` must be a valid, non-null context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn salat_set_midnight(ctx: *mut SalatContextHandle, code: u8) -> SalatStatus {
    ffi_boundary(|| {
        if ctx.is_null() {
            return SalatStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and uniquely borrowed for this call.
        let ctx_ref = unsafe { &mut *ctx };
        status_of(salat_set_midnight_internal(ctx_ref, code))
    })
}

/// Set the Asr shadow factor (1 standard, 2 Hanafi, any positive value).
///
/// # Safety
/// `ctx` must be a valid, non-null context pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn salat_set_asr_factor(
    ctx: *mut SalatContextHandle,
    factor: f64,
) -> SalatStatus {
    ffi_boundary(|| {
        if ctx.is_null() {
            return SalatStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and uniquely borrowed for this call.
        let ctx_ref = unsafe { &mut *ctx };
        status_of(salat_set_asr_factor_internal(ctx_ref, factor))
    })
}

/// Run one phase. `out_next` receives the next phase index; 0 means the
/// cycle is complete and [`salat_times`] holds local times.
///
/// # Safety
/// `ctx` and `out_next` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn salat_step(ctx: *mut SalatContextHandle, out_next: *mut u32) -> SalatStatus {
    ffi_boundary(|| {
        if ctx.is_null() || out_next.is_null() {
            return SalatStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and uniquely borrowed for this call.
        let ctx_ref = unsafe { &mut *ctx };
        let next = ctx_ref.step() as u32;
        // SAFETY: Pointer is checked for null and written once.
        unsafe { *out_next = next };
        SalatStatus::Ok
    })
}

/// Run every remaining phase and write the resulting times.
///
/// # Safety
/// `ctx` and `out_times` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn salat_compute(
    ctx: *mut SalatContextHandle,
    out_times: *mut SalatTimes,
) -> SalatStatus {
    ffi_boundary(|| {
        if ctx.is_null() || out_times.is_null() {
            return SalatStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and uniquely borrowed for this call.
        let ctx_ref = unsafe { &mut *ctx };
        let times = ctx_ref.compute();
        // SAFETY: Pointer is checked for null and written once.
        unsafe { *out_times = SalatTimes::from(&times) };
        SalatStatus::Ok
    })
}

/// Copy the current times out of the context.
///
/// # Safety
/// `ctx` and `out_times` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn salat_times(
    ctx: *const SalatContextHandle,
    out_times: *mut SalatTimes,
) -> SalatStatus {
    ffi_boundary(|| {
        if ctx.is_null() || out_times.is_null() {
            return SalatStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and only borrowed for this call.
        let ctx_ref = unsafe { &*ctx };
        // SAFETY: Pointer is checked for null and written once.
        unsafe { *out_times = SalatTimes::from(ctx_ref.times()) };
        SalatStatus::Ok
    })
}

/// Convert decimal hours to clock time. Returns `UndefinedTime` for NaN or
/// infinite input.
///
/// # Safety
/// `out_hms` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn salat_hours_to_hms(hours: f64, out_hms: *mut SalatHms) -> SalatStatus {
    ffi_boundary(|| {
        if out_hms.is_null() {
            return SalatStatus::NullPointer;
        }
        match salat_hours_to_hms_internal(hours) {
            Ok(hms) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_hms = hms };
                SalatStatus::Ok
            }
            Err(status) => status,
        }
    })
}

fn status_of(result: Result<(), SalatStatus>) -> SalatStatus {
    match result {
        Ok(()) => SalatStatus::Ok,
        Err(status) => status,
    }
}

fn ffi_boundary(f: impl FnOnce() -> SalatStatus) -> SalatStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => SalatStatus::Internal,
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn status_maps_from_config_error() {
        let status = SalatStatus::from(&ConfigError::MethodCodeOutOfRange(9));
        assert_eq!(status, SalatStatus::InvalidMethod);
        let status = SalatStatus::from(&ConfigError::UnknownMode("x".into()));
        assert_eq!(status, SalatStatus::InvalidMode);
    }

    #[test]
    fn internal_location_validation() {
        let mut ctx = CalculationContext::new();
        assert_eq!(
            salat_set_location_internal(&mut ctx, 95.0, 0.0, 0.0, 0.0),
            Err(SalatStatus::InvalidLocation)
        );
        assert_eq!(
            salat_set_location_internal(&mut ctx, 0.0, 0.0, f64::NAN, 0.0),
            Err(SalatStatus::InvalidLocation)
        );
        assert_eq!(salat_set_location_internal(&mut ctx, 43.0, -80.0, 0.0, -5.0), Ok(()));
        assert_eq!(ctx.location().longitude_deg, -80.0);
    }

    #[test]
    fn internal_date_validation() {
        let mut ctx = CalculationContext::new();
        assert_eq!(salat_set_date_internal(&mut ctx, 2018, 0, 1), Err(SalatStatus::InvalidDate));
        assert_eq!(salat_set_date_internal(&mut ctx, 2018, 10, 32), Err(SalatStatus::InvalidDate));
        assert_eq!(salat_set_date_internal(&mut ctx, 2018, 10, 17), Ok(()));
        assert_eq!(ctx.julian_date(), 2_458_408.5);
    }

    #[test]
    fn internal_method_and_modes() {
        let mut ctx = CalculationContext::new();
        assert_eq!(salat_set_method_internal(&mut ctx, 4), Ok(()));
        assert_eq!(ctx.config().isha.minutes, 90.0);
        assert_eq!(salat_set_method_internal(&mut ctx, 0), Err(SalatStatus::InvalidMethod));
        assert_eq!(salat_set_high_latitude_internal(&mut ctx, 3), Ok(()));
        assert_eq!(ctx.config().high_latitude, HighLatitudeMode::OneSeventh);
        assert_eq!(salat_set_high_latitude_internal(&mut ctx, 4), Err(SalatStatus::InvalidMode));
        assert_eq!(salat_set_midnight_internal(&mut ctx, 2), Err(SalatStatus::InvalidMode));
        assert_eq!(salat_set_asr_factor_internal(&mut ctx, 0.0), Err(SalatStatus::InvalidNumber));
    }

    #[test]
    fn internal_hms() {
        assert_eq!(
            salat_hours_to_hms_internal(13.5),
            Ok(SalatHms {
                hours: 13,
                minutes: 30,
                seconds: 0
            })
        );
        assert_eq!(salat_hours_to_hms_internal(f64::NAN), Err(SalatStatus::UndefinedTime));
    }

    #[test]
    fn ffi_step_rejects_null() {
        let mut next = 0_u32;
        // SAFETY: Null context pointer is intentional for this validation test.
        let status = unsafe { salat_step(ptr::null_mut(), &mut next) };
        assert_eq!(status, SalatStatus::NullPointer);
    }

    #[test]
    fn ffi_free_accepts_null() {
        // SAFETY: Null is explicitly allowed.
        let status = unsafe { salat_context_free(ptr::null_mut()) };
        assert_eq!(status, SalatStatus::Ok);
    }
}
