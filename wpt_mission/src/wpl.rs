/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
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

/// QGC WPL 110 mission file support: the in-memory waypoint model plus parse/serialize.
/// One waypoint per line, 12 tab separated fields:
/// `index frame command param0 param1 param2 param3 param4 lat lon alt autocontinue`

use std::fmt::Write as FmtWrite;
use std::path::Path;
use serde::{Serialize,Deserialize};
use tracing::warn;

use wpt_common::fs::{filepath_contents_as_string, set_filepath_contents};
use wpt_common::geo::GeoPoint;

use crate::errors::WptMissionError;
use crate::Result;

pub const WPL_HEADER: &str = "QGC WPL 110";

const WPL_FIELD_COUNT: usize = 12;

/// one mission file row. Command semantics are opaque here - frame, command and the param
/// fields are passed through unchanged. A lat/lon of exactly 0 (or an empty field) is the
/// "no georeference" sentinel of home/dummy rows and exempts the row from any position transform
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Waypoint {
    pub index: u32,
    pub frame: u32,
    pub command: u32,
    pub param0: i32,
    pub param1: i32,
    pub param2: i32,
    pub param3: i32,
    pub param4: i32,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub alt: Option<f64>,
    pub autocontinue: Option<i32>,
}

impl Waypoint {
    /// the georeference of this row, None for sentinel positions
    pub fn position (&self) -> Option<GeoPoint> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            if lat != 0.0 && lon != 0.0 {
                return Some( GeoPoint::from_lon_lat_degrees( lon, lat))
            }
        }
        None
    }

    pub fn has_position (&self) -> bool {
        self.position().is_some()
    }

    pub fn set_position (&mut self, p: &GeoPoint) {
        self.lat = Some( p.latitude().degrees());
        self.lon = Some( p.longitude().degrees());
    }
}

/// ordered waypoint sequence of one mission file. Row order is ascending index order as
/// produced, indices are unique. Transforms never reorder, drop or add rows
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Mission {
    pub waypoints: Vec<Waypoint>,
}

impl Mission {
    pub fn len (&self) -> usize { self.waypoints.len() }

    pub fn is_empty (&self) -> bool { self.waypoints.is_empty() }

    pub fn waypoint (&self, index: u32) -> Option<&Waypoint> {
        self.waypoints.iter().find( |wp| wp.index == index)
    }

    /// the non-sentinel position of the given waypoint index - reference waypoints of the
    /// transforms have to exist and have to be georeferenced
    pub fn reference_position (&self, index: u32) -> Result<GeoPoint> {
        self.waypoint(index)
            .and_then( |wp| wp.position())
            .ok_or( WptMissionError::MissingReference(index))
    }
}

/* #region parsing ************************************************************************************************/

fn parse_field<T: std::str::FromStr> (s: &str, what: &str) -> std::result::Result<T,String> {
    s.parse().map_err( |_| format!("invalid {} field {:?}", what, s))
}

// the original file format stores params as reals but consumers treat them as integers,
// truncated towards zero. This is lossy and kept that way for compatibility
fn parse_truncated (s: &str, what: &str) -> std::result::Result<i32,String> {
    parse_field::<f64>(s, what).map( |v| v as i32)
}

fn parse_opt_f64 (s: &str, what: &str) -> std::result::Result<Option<f64>,String> {
    if s.is_empty() { Ok(None) } else { parse_field(s, what).map(Some) }
}

fn parse_opt_truncated (s: &str, what: &str) -> std::result::Result<Option<i32>,String> {
    if s.is_empty() { Ok(None) } else { parse_truncated(s, what).map(Some) }
}

fn parse_waypoint_line (line: &str) -> std::result::Result<Waypoint,String> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < WPL_FIELD_COUNT {
        return Err( format!("expected {} fields, got {}", WPL_FIELD_COUNT, fields.len()))
    }

    Ok( Waypoint {
        index: parse_field( fields[0], "index")?,
        frame: parse_field( fields[1], "frame")?,
        command: parse_field( fields[2], "command")?,
        param0: parse_truncated( fields[3], "param0")?,
        param1: parse_truncated( fields[4], "param1")?,
        param2: parse_truncated( fields[5], "param2")?,
        param3: parse_truncated( fields[6], "param3")?,
        param4: parse_truncated( fields[7], "param4")?,
        lat: parse_opt_f64( fields[8], "lat")?,
        lon: parse_opt_f64( fields[9], "lon")?,
        alt: parse_opt_f64( fields[10], "alt")?,
        autocontinue: parse_opt_truncated( fields[11], "autocontinue")?,
    })
}

/// parse mission file contents. Malformed rows are reported and dropped, a mission without
/// any valid rows is an error (nothing to transform)
pub fn parse_wpl (contents: &str) -> Result<Mission> {
    let mut lines = contents.lines();

    if let Some(header) = lines.next() {
        if header.trim_end() != WPL_HEADER {
            warn!("unexpected mission file header {:?}", header);
        }
    }

    let mut waypoints = Vec::new();
    for line in lines {
        // only strip the CR of CRLF line endings - a trailing tab means empty optional fields
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() { continue }

        match parse_waypoint_line(line) {
            Ok(wp) => waypoints.push(wp),
            Err(e) => warn!("skipping malformed waypoint line {:?}: {}", line, e)
        }
    }

    if waypoints.is_empty() { return Err( WptMissionError::EmptyMission) }
    Ok( Mission{ waypoints })
}

/* #endregion parsing */

/* #region serializing ********************************************************************************************/

fn push_opt_f64 (s: &mut String, v: Option<f64>, decimals: usize) {
    if let Some(v) = v {
        let _ = write!( s, "{:.*}", decimals, v);
    }
}

/// serialize to mission file contents: literal header plus one tab separated row per waypoint,
/// lat/lon with 8 and alt with 6 decimals, absent optional fields as empty strings
pub fn write_wpl (mission: &Mission) -> String {
    let mut s = String::with_capacity( 64 * (mission.len() + 1));
    s.push_str( WPL_HEADER);

    for wp in &mission.waypoints {
        s.push('\n');
        let _ = write!( s, "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t",
                        wp.index, wp.frame, wp.command,
                        wp.param0, wp.param1, wp.param2, wp.param3, wp.param4);
        push_opt_f64( &mut s, wp.lat, 8);
        s.push('\t');
        push_opt_f64( &mut s, wp.lon, 8);
        s.push('\t');
        push_opt_f64( &mut s, wp.alt, 6);
        s.push('\t');
        if let Some(ac) = wp.autocontinue {
            let _ = write!( s, "{}", ac);
        }
    }
    s
}

/* #endregion serializing */

pub fn read_wpl_file <P: AsRef<Path>> (path: &P) -> Result<Mission> {
    let contents = filepath_contents_as_string(path)?;
    parse_wpl( &contents)
}

pub fn write_wpl_file <P: AsRef<Path>> (path: &P, mission: &Mission) -> Result<()> {
    set_filepath_contents( path, write_wpl(mission).as_bytes())?;
    Ok(())
}
