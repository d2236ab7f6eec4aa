//! The device position shown on the risk map.
//!
//! On wasm32 the browser's Geolocation API is asked once per mount. Natively,
//! and whenever the browser refuses, the map falls back to
//! [`DEFAULT_POSITION`] as its centre and draws no position marker.

use dioxus::prelude::*;

use crate::GeoError;

/// A WGS84 coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Map centre used when the device position is unknown.
pub const DEFAULT_POSITION: GeoPoint = GeoPoint {
    latitude: 28.474389,
    longitude: 77.504,
};

/// Position lookup progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DevicePosition {
    #[default]
    Locating,
    Located(GeoPoint),
    Unavailable,
}

impl DevicePosition {
    pub fn is_locating(&self) -> bool {
        matches!(self, DevicePosition::Locating)
    }

    /// Where the user is, if known.
    pub fn point(&self) -> Option<GeoPoint> {
        match self {
            DevicePosition::Located(point) => Some(*point),
            _ => None,
        }
    }

    /// Centre of the map: the user's position, else [`DEFAULT_POSITION`].
    pub fn centre(&self) -> GeoPoint {
        self.point().unwrap_or(DEFAULT_POSITION)
    }

    fn from_lookup(result: Result<GeoPoint, GeoError>) -> Self {
        match result {
            Ok(point) => DevicePosition::Located(point),
            Err(e) => {
                tracing::warn!("geolocation unavailable: {e}");
                DevicePosition::Unavailable
            }
        }
    }
}

/// Ask the browser for the current position.
#[cfg(target_arch = "wasm32")]
pub async fn current_position() -> Result<GeoPoint, GeoError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let geolocation = web_sys::window()
        .ok_or(GeoError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeoError::Unsupported)?;

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(10_000);
    options.set_maximum_age(0);

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &options,
        ) {
            let _ = reject.call1(&wasm_bindgen::JsValue::NULL, &e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let position = value
                .dyn_into::<web_sys::GeolocationPosition>()
                .map_err(|_| GeoError::Denied("unexpected position value".to_string()))?;
            let coords = position.coords();
            Ok(GeoPoint {
                latitude: coords.latitude(),
                longitude: coords.longitude(),
            })
        }
        Err(e) => {
            let message = e
                .dyn_into::<web_sys::GeolocationPositionError>()
                .map(|err| err.message())
                .unwrap_or_else(|_| "position request failed".to_string());
            Err(GeoError::Denied(message))
        }
    }
}

/// No position source outside the browser.
#[cfg(not(target_arch = "wasm32"))]
pub async fn current_position() -> Result<GeoPoint, GeoError> {
    Err(GeoError::Unsupported)
}

/// Look up the device position once for this mount.
pub fn use_device_position() -> Signal<DevicePosition> {
    let position = use_signal(DevicePosition::default);

    use_hook(move || {
        let mut position = position;
        spawn(async move {
            let result = current_position().await;
            position.set(DevicePosition::from_lookup(result));
        });
    });

    position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_falls_back_to_default() {
        assert_eq!(DevicePosition::Locating.centre(), DEFAULT_POSITION);
        assert_eq!(DevicePosition::Unavailable.centre(), DEFAULT_POSITION);
        assert!(DevicePosition::Unavailable.point().is_none());

        let here = GeoPoint {
            latitude: 42.36,
            longitude: -71.06,
        };
        assert_eq!(DevicePosition::Located(here).centre(), here);
    }

    #[test]
    fn test_failed_lookup_is_unavailable() {
        let position = DevicePosition::from_lookup(Err(GeoError::Denied("User denied".to_string())));
        assert_eq!(position, DevicePosition::Unavailable);
        assert!(!position.is_locating());
    }

    #[tokio::test]
    async fn test_native_has_no_position_source() {
        assert_eq!(current_position().await, Err(GeoError::Unsupported));
    }
}
