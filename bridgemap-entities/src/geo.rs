use thiserror::Error;

pub type RawCoord = i32;

const RAW_COORD_MAX: RawCoord = RawCoord::MAX;
const RAW_COORD_MIN: RawCoord = -RAW_COORD_MAX;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordRangeError {
    #[error("latitude {0}° is out of range")]
    Latitude(f64),
    #[error("longitude {0}° is out of range")]
    Longitude(f64),
}

/// Compact fixed-point integer representation of an angle in degrees,
/// symmetric around 0 and scaled to the full range of [`RawCoord`].
macro_rules! angular_coord {
    ($name:ident, $deg_max:expr) => {
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
        pub struct $name(RawCoord);

        impl $name {
            const DEG_MAX: f64 = $deg_max;
            const TO_DEG: f64 = Self::DEG_MAX / RAW_COORD_MAX as f64;

            pub const fn to_raw(self) -> RawCoord {
                self.0
            }

            pub const fn from_raw(raw: RawCoord) -> Self {
                debug_assert!(raw >= RAW_COORD_MIN);
                Self(raw)
            }

            pub fn to_deg(self) -> f64 {
                f64::from(self.0) * Self::TO_DEG
            }

            /// Rounds to the nearest representable angle.
            ///
            /// The caller must ensure that `deg` is within range.
            pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
                let deg = deg.into();
                debug_assert!(deg.abs() <= Self::DEG_MAX);
                Self::from_raw(f64::round(deg / Self::TO_DEG) as RawCoord)
            }

            /// Returns `None` for angles out of range and `NaN`.
            pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
                let deg = deg.into();
                (-Self::DEG_MAX..=Self::DEG_MAX)
                    .contains(&deg)
                    .then(|| Self::from_deg(deg))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.to_deg())
            }
        }
    };
}

angular_coord!(LatCoord, 90.0);
angular_coord!(LngCoord, 180.0);

/// A geographic position on the WGS 84 datum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Result<Self, CoordRangeError> {
        let lat = lat.into();
        let lng = lng.into();
        let lat = LatCoord::try_from_deg(lat).ok_or(CoordRangeError::Latitude(lat))?;
        let lng = LngCoord::try_from_deg(lng).ok_or(CoordRangeError::Longitude(lng))?;
        Ok(Self::new(lat, lng))
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// South-west and north-east corner of a rectangular area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// The smallest box (without crossing the antimeridian)
    /// that contains all given points.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = MapPoint>,
    {
        points.into_iter().fold(None, |bbox: Option<Self>, p| {
            let Some(Self { sw, ne }) = bbox else {
                return Some(Self::new(p, p));
            };
            let sw = MapPoint::new(
                LatCoord::from_raw(sw.lat.to_raw().min(p.lat.to_raw())),
                LngCoord::from_raw(sw.lng.to_raw().min(p.lng.to_raw())),
            );
            let ne = MapPoint::new(
                LatCoord::from_raw(ne.lat.to_raw().max(p.lat.to_raw())),
                LngCoord::from_raw(ne.lng.to_raw().max(p.lng.to_raw())),
            );
            Some(Self::new(sw, ne))
        })
    }
}

impl std::fmt::Display for MapBbox {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.sw, self.ne)
    }
}
