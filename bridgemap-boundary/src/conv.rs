use bridgemap_entities as e;

use super::*;

impl From<e::geo::MapPoint> for Coordinate {
    fn from(pt: e::geo::MapPoint) -> Self {
        let (lat, lng) = pt.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<e::geo::MapPoint> for Geometry {
    fn from(pt: e::geo::MapPoint) -> Self {
        let (lat, lng) = pt.to_lat_lng_deg();
        Self::Point {
            coordinates: [lng, lat],
        }
    }
}

impl From<e::marker::MarkerStyle> for MarkerStyle {
    fn from(from: e::marker::MarkerStyle) -> Self {
        let e::marker::MarkerStyle {
            radius,
            color,
            fill_color,
            fill_opacity,
        } = from;
        Self {
            radius,
            color: color.into(),
            fill_color: fill_color.into(),
            fill_opacity,
        }
    }
}

impl From<e::map::MapView> for MapView {
    fn from(from: e::map::MapView) -> Self {
        Self {
            center: from.center.into(),
            zoom: from.zoom,
        }
    }
}

impl TileLayer {
    pub fn new(layer: e::map::BaseLayer, active: bool) -> Self {
        let e::map::BaseLayer {
            name,
            url_template,
            max_zoom,
            subdomains,
            attribution,
        } = layer;
        Self {
            name,
            url_template,
            max_zoom,
            subdomains,
            attribution,
            active,
        }
    }
}

impl From<e::map::LegendEntry> for LegendEntry {
    fn from(from: e::map::LegendEntry) -> Self {
        let e::map::LegendEntry {
            label,
            color,
            diameter,
        } = from;
        Self {
            label,
            color,
            diameter,
        }
    }
}

impl From<e::map::Legend> for Legend {
    fn from(from: e::map::Legend) -> Self {
        Self {
            title: from.title,
            position: from.position.as_str().to_owned(),
            entries: from.entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// The popup entries as GeoJSON feature properties.
pub fn popup_properties(popup: &e::marker::Popup) -> serde_json::Map<String, serde_json::Value> {
    popup
        .entries
        .iter()
        .map(|e| (e.column.clone(), e.value.clone().into()))
        .collect()
}

impl From<&e::marker::Marker> for Feature {
    fn from(marker: &e::marker::Marker) -> Self {
        Self {
            geometry: marker.pos.into(),
            properties: popup_properties(&marker.popup),
        }
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_is_lng_lat() {
        let pt = e::geo::MapPoint::from_lat_lng_deg(44.5, -100.0);
        let Geometry::Point { coordinates } = pt.into();
        assert!((coordinates[0] + 100.0).abs() < 1e-6);
        assert!((coordinates[1] - 44.5).abs() < 1e-6);
    }

    #[test]
    fn feature_from_marker() {
        let marker = e::marker::Marker {
            pos: e::geo::MapPoint::from_lat_lng_deg(43.7, -105.2),
            style: e::marker::MarkerStyle::BRIDGE,
            popup: e::marker::Popup {
                title: "Bridge Details".into(),
                entries: vec![
                    e::marker::PopupEntry {
                        column: "NAME".into(),
                        value: "Foo".into(),
                    },
                    e::marker::PopupEntry {
                        column: "YEAR".into(),
                        value: "1932".into(),
                    },
                ],
            },
        };
        let feature = Feature::from(&marker);
        assert_eq!(feature.properties.len(), 2);
        assert_eq!(feature.properties["NAME"], "Foo");
        assert_eq!(feature.properties["YEAR"], "1932");
    }

    #[test]
    fn convert_legend() {
        let legend = e::map::Legend {
            title: "Legend".into(),
            position: e::map::ControlPosition::BottomRight,
            entries: vec![],
        };
        assert_eq!(Legend::from(legend).position, "bottomright");
    }
}
