use bridgemap_core::{
    gateways::reproject::{self, Reprojector},
    projection::{SD_STATE_PLANE_NORTH_FT, WGS84_LONGLAT},
};
use bridgemap_entities::{geo::MapPoint, planar::PlanarPoint};
use proj4rs::{proj::Proj, transform::transform};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Invalid projection definition '{definition}': {reason}")]
pub struct Error {
    definition: String,
    reason: String,
}

/// Reprojects planar coordinates with the pure Rust port of proj4js.
pub struct Proj4Reprojector {
    source: Proj,
    target: Proj,
}

impl std::fmt::Debug for Proj4Reprojector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proj4Reprojector").finish_non_exhaustive()
    }
}

fn parse_definition(definition: &str) -> Result<Proj, Error> {
    Proj::from_proj_string(definition).map_err(|err| Error {
        definition: definition.to_owned(),
        reason: format!("{err:?}"),
    })
}

impl Proj4Reprojector {
    /// The target definition must describe geographic coordinates.
    pub fn try_new(source: &str, target: &str) -> Result<Self, Error> {
        let source = parse_definition(source)?;
        let target = parse_definition(target)?;
        Ok(Self { source, target })
    }

    /// NAD 1983 State Plane South Dakota North (U.S. survey feet) to WGS 84.
    pub fn south_dakota_north() -> Result<Self, Error> {
        log::debug!("Initialize projection engine");
        Self::try_new(SD_STATE_PLANE_NORTH_FT, WGS84_LONGLAT)
    }
}

impl Reprojector for Proj4Reprojector {
    fn reproject(&self, pt: PlanarPoint) -> Result<MapPoint, reproject::Error> {
        let mut point = (pt.x, pt.y, 0.0);
        transform(&self.source, &self.target, &mut point)
            .map_err(|err| reproject::Error::Engine(format!("{err:?}")))?;
        let (lng_rad, lat_rad, _) = point;
        let pos = MapPoint::try_from_lat_lng_deg(lat_rad.to_degrees(), lng_rad.to_degrees())?;
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use bridgemap_core::{
        map::{MapSurface, MarkerLayer},
        projection::US_SURVEY_FOOT,
        usecases::plot_bridges,
    };
    use bridgemap_entities::map::{Control, Layer, MapView};

    use super::*;

    const EPSILON_DEG: f64 = 1e-6;

    fn reproject(x: f64, y: f64) -> (f64, f64) {
        let reprojector = Proj4Reprojector::south_dakota_north().unwrap();
        let (lat, lng) = reprojector
            .reproject(PlanarPoint::new(x, y))
            .unwrap()
            .to_lat_lng_deg();
        (lng, lat)
    }

    #[test]
    fn false_origin_maps_to_projection_origin() {
        let false_easting_ft = 600_000.0 / US_SURVEY_FOOT;
        assert!((false_easting_ft - 1_968_500.0).abs() < 1e-6);
        let (lng, lat) = reproject(false_easting_ft, 0.0);
        assert!((lng + 100.0).abs() < EPSILON_DEG, "lng = {lng}");
        assert!((lat - 43.833_333_333).abs() < EPSILON_DEG, "lat = {lat}");
    }

    #[test]
    fn planar_coordinates_are_survey_feet() {
        let (lng, lat) = reproject(600_000.0, 0.0);
        assert!((lng + 105.178_179).abs() < 1e-4, "lng = {lng}");
        assert!((lat - 43.713_251).abs() < 1e-4, "lat = {lat}");
    }

    #[test]
    fn north_east_of_the_origin() {
        let (lng, lat) = reproject(2_068_500.0, 300_000.0);
        assert!((lng + 99.615_707).abs() < 1e-4, "lng = {lng}");
        assert!((lat - 44.655_562).abs() < 1e-4, "lat = {lat}");
    }

    #[test]
    fn reprojection_is_deterministic() {
        let reprojector = Proj4Reprojector::south_dakota_north().unwrap();
        let pt = PlanarPoint::new(1_234_567.8, 345_678.9);
        let a = reprojector.reproject(pt).unwrap();
        let b = reprojector.reproject(pt).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reject_invalid_definitions() {
        assert!(Proj4Reprojector::try_new("+proj=nonsense", WGS84_LONGLAT).is_err());
    }

    #[derive(Default)]
    struct Markers(Vec<MapPoint>);

    impl MapSurface for Markers {
        fn add_layer(&mut self, layer: Layer) {
            if let Layer::Marker(m) = layer {
                self.0.push(m.pos);
            }
        }
        fn add_control(&mut self, _: Control) {}
        fn set_view(&mut self, _: MapView) {}
    }

    #[test]
    fn plot_bridge_with_the_real_projection() {
        let reprojector = Proj4Reprojector::south_dakota_north().unwrap();
        let mut map = Markers::default();
        let mut layer = MarkerLayer::new();
        let summary = plot_bridges(
            &mut map,
            &reprojector,
            &mut layer,
            "X,Y,NAME\n600000,0,Foo\n",
        );
        assert_eq!(summary.placed, 1);
        assert_eq!(
            map.0,
            vec![reprojector.reproject(PlanarPoint::new(600_000.0, 0.0)).unwrap()]
        );
        let popup = &layer.markers()[0].marker.popup;
        assert_eq!(popup.value("NAME"), Some("Foo"));
        assert!(!popup.contains_column("X"));
    }
}
