/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

/// geodetic positions on the WGS84 ellipsoid surface. Following wpt design principles we build
/// on the [geo](https://docs.rs/geo/latest/geo/index.html) foundation crate and use the Rust
/// [new type](https://doc.rust-lang.org/rust-by-example/generics/new_types.html) pattern to add
/// normalized-degree value semantics on top of it

use std::fmt::{self,Debug,Display};
use geo::Point;
use geo_types::Coord;
use serde::{Serialize,Deserialize};
use serde::ser::{Serialize as SerializeTrait, Serializer, SerializeStruct};
use serde::de::{Deserialize as DeserializeTrait, Deserializer};

use crate::angle::{normalize_180, normalize_90, Latitude, Longitude};

pub type GeoCoord = Coord<f64>;

/// a wrapper for geo::Point that uses geodetic degrees stored as f64
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat (lon: Longitude, lat: Latitude) -> Self {
        GeoPoint( Point::new( lon.degrees(), lat.degrees()))
    }

    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    pub fn longitude (&self) -> Longitude { Longitude::from_degrees( self.0.x()) }
    pub fn latitude (&self) -> Latitude { Latitude::from_degrees( self.0.y()) }

    pub fn point<'a> (&'a self) -> &'a Point { &self.0 }

    pub fn coord (&self) -> GeoCoord { self.0.0.clone() }
}

impl fmt::Display for GeoPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(), self.0.y())
    }
}

impl SerializeTrait for GeoPoint {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoPoint", 2)?;
        state.serialize_field("lon", &self.longitude().degrees())?;
        state.serialize_field("lat", &self.latitude().degrees())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct LonLatDegrees { lon: f64, lat: f64 }

impl<'de> DeserializeTrait<'de> for GeoPoint {
    fn deserialize<D> (deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let ll = LonLatDegrees::deserialize(deserializer)?;
        Ok( GeoPoint::from_lon_lat_degrees( ll.lon, ll.lat))
    }
}
