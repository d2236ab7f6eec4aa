//! Risk areas drawn as circles on a schematic, north-up plane.
//!
//! Tile rendering is left to a real mapping library; this view only needs
//! the relative placement and size of each zone and of the user's position,
//! which [`project`] computes with an equirectangular approximation around
//! the mean latitude.

use api::SafetyBackend;
use dioxus::prelude::*;
use store::{RiskArea, RiskLevel};

use crate::fetch::{use_fetch, Loadable};
use crate::geolocation::{use_device_position, GeoPoint};
use crate::use_backend;
use crate::views::{ErrorBanner, LoadingIndicator};

/// Width and height of the SVG view box.
pub const VIEW_SIZE: f64 = 1000.0;
const METERS_PER_DEGREE: f64 = 111_320.0;
const MARKER_RADIUS: f64 = 12.0;

/// A risk area placed in view-box coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedArea {
    pub id: String,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub level: RiskLevel,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// Everything drawn on the map, in view-box coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapLayout {
    pub areas: Vec<ProjectedArea>,
    pub user: Option<ProjectedPoint>,
}

impl MapLayout {
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty() && self.user.is_none()
    }
}

/// Fit every area, including its full radius, and the user's position into
/// the view box, centred on both axes.
pub fn project(areas: &[RiskArea], user: Option<GeoPoint>) -> MapLayout {
    let mut latitudes: Vec<f64> = areas.iter().map(|a| a.latitude).collect();
    latitudes.extend(user.map(|p| p.latitude));
    if latitudes.is_empty() {
        return MapLayout::default();
    }
    let mean_lat = latitudes.iter().sum::<f64>() / latitudes.len() as f64;
    let lon_scale = mean_lat.to_radians().cos();

    // Local plane in metres: x east, y north.
    let to_plane = |lat: f64, lon: f64| (lon * METERS_PER_DEGREE * lon_scale, lat * METERS_PER_DEGREE);
    let circles: Vec<(f64, f64, f64)> = areas
        .iter()
        .map(|a| {
            let (x, y) = to_plane(a.latitude, a.longitude);
            (x, y, a.radius())
        })
        .collect();
    let user = user.map(|p| to_plane(p.latitude, p.longitude));

    let extents = circles
        .iter()
        .copied()
        .chain(user.map(|(x, y)| (x, y, 0.0)));
    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for (x, y, r) in extents {
        min_x = min_x.min(x - r);
        max_x = max_x.max(x + r);
        min_y = min_y.min(y - r);
        max_y = max_y.max(y + r);
    }
    let span = (max_x - min_x).max(max_y - min_y).max(1.0);
    let scale = VIEW_SIZE / span;
    let pad_x = (VIEW_SIZE - (max_x - min_x) * scale) / 2.0;
    let pad_y = (VIEW_SIZE - (max_y - min_y) * scale) / 2.0;
    let place = |x: f64, y: f64| ((x - min_x) * scale + pad_x, (max_y - y) * scale + pad_y);

    let areas = areas
        .iter()
        .zip(circles)
        .map(|(area, (x, y, r))| {
            let (cx, cy) = place(x, y);
            ProjectedArea {
                id: area.id.clone(),
                cx,
                cy,
                r: r * scale,
                level: area.risk_level,
                description: area.description_or_default().to_string(),
            }
        })
        .collect();
    let user = user.map(|(x, y)| {
        let (x, y) = place(x, y);
        ProjectedPoint { x, y }
    });

    MapLayout { areas, user }
}

#[component]
pub fn RiskMapView() -> Element {
    let backend = use_backend();
    let areas = use_fetch(move || async move { backend.fetch_risk_areas().await });
    let position = use_device_position();

    let position = position();
    if position.is_locating() {
        return rsx! { LoadingIndicator { label: "Finding your location..." } };
    }

    let state = areas.read().state().clone();
    let areas = match state {
        Loadable::Loading => return rsx! { LoadingIndicator { label: "Loading risk areas..." } },
        Loadable::Failed(message) => return rsx! { ErrorBanner { message } },
        Loadable::Ready(areas) => areas,
    };
    let layout = project(&areas, position.point());
    let view_box = format!("0 0 {VIEW_SIZE} {VIEW_SIZE}");
    let centre = position.centre();
    let centre_label = format!("Centred on {:.4}, {:.4}", centre.latitude, centre.longitude);

    rsx! {
        section {
            class: "page-card map-page",
            h1 { "Interactive Safety Map" }
            p { class: "map-centre", "{centre_label}" }
            if layout.is_empty() {
                p { class: "empty-state", "No risk areas reported nearby." }
            } else {
                svg {
                    class: "risk-map",
                    view_box: "{view_box}",
                    role: "img",
                    "aria-label": "Risk areas",
                    for area in layout.areas.iter() {
                        circle {
                            key: "{area.id}",
                            cx: "{area.cx}",
                            cy: "{area.cy}",
                            r: "{area.r}",
                            stroke: area.level.color(),
                            fill: area.level.color(),
                            fill_opacity: "0.3",
                        }
                    }
                    if let Some(user) = layout.user {
                        circle {
                            class: "user-marker",
                            cx: "{user.x}",
                            cy: "{user.y}",
                            r: "{MARKER_RADIUS}",
                        }
                        text {
                            class: "user-marker-label",
                            x: "{user.x}",
                            y: format!("{}", user.y - MARKER_RADIUS * 1.5),
                            text_anchor: "middle",
                            "You are here (approx.)"
                        }
                    }
                }
                ul {
                    class: "risk-legend",
                    for area in layout.areas {
                        li {
                            key: "{area.id}",
                            span {
                                class: "risk-swatch",
                                style: format!("background-color: {}", area.level.color()),
                            }
                            strong { "Risk Level: {area.level}" }
                            span { " {area.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(id: &str, lat: f64, lon: f64, radius: f64, level: u8) -> RiskArea {
        RiskArea::new(id, lat, lon, radius, RiskLevel::new(level).unwrap(), None).unwrap()
    }

    fn inside(x: f64) -> bool {
        (-1e-6..=VIEW_SIZE + 1e-6).contains(&x)
    }

    #[test]
    fn test_empty() {
        assert!(project(&[], None).is_empty());
    }

    #[test]
    fn test_single_area_fills_view() {
        let layout = project(&[area("r1", 42.0, -71.0, 200.0, 3)], None);
        let p = &layout.areas[0];
        assert!((p.cx - VIEW_SIZE / 2.0).abs() < 1e-6);
        assert!((p.cy - VIEW_SIZE / 2.0).abs() < 1e-6);
        assert!((p.r - VIEW_SIZE / 2.0).abs() < 1e-6);
        assert_eq!(p.description, "Designated risk area.");
        assert!(layout.user.is_none());
    }

    #[test]
    fn test_north_is_up_and_all_inside() {
        let areas = [
            area("south", 42.3550, -71.0630, 300.0, 5),
            area("north", 42.3601, -71.0589, 100.0, 2),
        ];
        let projected = project(&areas, None).areas;
        assert!(projected[1].cy < projected[0].cy);
        assert!(projected[1].cx > projected[0].cx);
        for p in &projected {
            assert!(inside(p.cx - p.r) && inside(p.cx + p.r));
            assert!(inside(p.cy - p.r) && inside(p.cy + p.r));
        }
        assert!(projected[0].r > projected[1].r);
    }

    #[test]
    fn test_user_position_included_in_fit() {
        let areas = [area("r1", 42.3584, -71.0598, 200.0, 4)];
        let here = GeoPoint {
            latitude: 42.3700,
            longitude: -71.0598,
        };
        let layout = project(&areas, Some(here));
        let user = layout.user.unwrap();
        let zone = &layout.areas[0];

        assert!(inside(user.x) && inside(user.y));
        assert!(user.y < zone.cy, "user is north of the zone");
        assert!((user.x - zone.cx).abs() < 1e-6);
        // The zone shrinks to make room for the marker.
        assert!(zone.r < VIEW_SIZE / 4.0);
    }

    #[test]
    fn test_user_only_is_centred() {
        let here = GeoPoint {
            latitude: 28.474389,
            longitude: 77.504,
        };
        let layout = project(&[], Some(here));
        assert!(!layout.is_empty());
        assert_eq!(
            layout.user,
            Some(ProjectedPoint {
                x: VIEW_SIZE / 2.0,
                y: VIEW_SIZE / 2.0
            })
        );
    }
}
